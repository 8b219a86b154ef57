//! Folio: the core of a personal portfolio site
//!
//! This crate provides:
//! - A horizontal carousel controller reconciling drag, wheel and step input
//! - A resume layout engine that paginates a structured record onto A4 pages
//! - PDF serialization of the laid-out pages
//! - The light/dark theme preference
//!
//! Everything is synchronous and free of host APIs; the `wasm` module binds it
//! to the browser.

pub mod carousel;
pub mod document;
pub mod error;
pub mod layout;
pub mod preference;
pub mod render;
pub mod resume;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::{WasmCarousel, WasmResumeDocument};

// Re-export primary types
pub use carousel::{CarouselConfig, CarouselController, CarouselGeometry, ScrollSnapshot};
pub use error::{Error, Result};
pub use layout::{LayoutEngine, RenderOptions};
pub use preference::{Appearance, ThemePreference};
pub use render::{render, DocumentSink, ResumeDocument};
pub use resume::Resume;

/// Position on a page, in millimetres from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}
