//! Light/dark theme preference
//!
//! The stored value is one of `light`, `dark` or `system`; `system` follows
//! the host's colour scheme at the time it is resolved.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Storage key used by hosts that keep the preference in a key/value store
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

/// What is actually shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn resolve(self, prefers_dark: bool) -> Appearance {
        match self {
            ThemePreference::Light => Appearance::Light,
            ThemePreference::Dark => Appearance::Dark,
            ThemePreference::System if prefers_dark => Appearance::Dark,
            ThemePreference::System => Appearance::Light,
        }
    }

    /// Switch to `theme`; the old value is left untouched
    pub fn with_theme(self, theme: ThemePreference) -> ThemePreference {
        theme
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized stored value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl FromStr for ThemePreference {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            _ => Err(UnknownTheme(s.to_string())),
        }
    }
}

impl Appearance {
    pub fn is_dark(&self) -> bool {
        matches!(self, Appearance::Dark)
    }
}

/// Host key/value storage for the preference
pub trait PreferenceStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, value: &str) -> Result<()>;
}

/// Read the stored preference. Absent or unrecognized values fall back to
/// `System`.
pub fn load_theme<S: PreferenceStore + ?Sized>(store: &S) -> ThemePreference {
    parse_stored(store.load().as_deref())
}

pub fn save_theme<S: PreferenceStore + ?Sized>(store: &mut S, theme: ThemePreference) -> Result<()> {
    store.save(theme.as_str())
}

/// Parse a raw stored value
pub fn parse_stored(stored: Option<&str>) -> ThemePreference {
    match stored {
        None => ThemePreference::System,
        Some(value) => value.parse().unwrap_or_else(|UnknownTheme(value)| {
            log::warn!("ignoring unrecognized theme preference {:?}", value);
            ThemePreference::System
        }),
    }
}
