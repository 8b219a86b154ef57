//! Resume record supplied by the data provider

use crate::error::{Error, Result};
use crate::resume::skills::SkillGroups;
use serde::{Deserialize, Serialize};

/// Identity and contact details
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Personal {
    /// Required; everything else is optional
    pub name: String,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

/// One position, in the order the caller wants it printed
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Position {
    #[serde(alias = "position")]
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: String,
    pub end_date: String,
    #[serde(alias = "description")]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Degree {
    pub degree: String,
    pub institution: String,
    pub location: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub gpa: Option<String>,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub description: Option<String>,
    pub technologies: Vec<String>,
    pub topics: Vec<String>,
    pub link: Option<String>,
    pub highlights: Vec<String>,
}

/// The site's "about" block; its summary stands in for a missing top-level one
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct About {
    pub summary: Option<String>,
    pub highlights: Vec<String>,
}

/// Complete resume record. The engine only reads it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Resume {
    pub personal: Personal,
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<About>,
    pub skills: SkillGroups,
    pub experience: Vec<Position>,
    pub education: Vec<Degree>,
    pub projects: Vec<Project>,
}

impl Resume {
    /// Parse a resume from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Summary to print: the top-level one, else `about.summary`; blank
    /// values count as absent
    pub fn summary_text(&self) -> Option<&str> {
        let about = self.about.as_ref().and_then(|about| about.summary.as_deref());
        [self.summary.as_deref(), about]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|summary| !summary.is_empty())
    }

    /// Check required fields; returns the trimmed name
    pub fn validate(&self) -> Result<&str> {
        let name = self.personal.name.trim();
        if name.is_empty() {
            return Err(Error::InvalidInput(
                "personal.name is required and must not be blank".to_string(),
            ));
        }
        Ok(name)
    }
}
