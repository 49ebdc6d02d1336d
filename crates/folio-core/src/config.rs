//! Site configuration.
//!
//! Everything the page shows that is content rather than behavior: the
//! owner, the typewriter phrases, navigation, stats, skills, and the project
//! catalog. Loaded from JSON; every field falls back to [`SiteConfig::default`].

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};
use crate::filter::ALL_TAGS;
use crate::scroll::{NavLink, HEADER_MARGIN_PX};
use crate::typewriter::{TypewriterTiming, PAUSE_MS, TYPE_INTERVAL_MS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub type_interval_ms: u64,
    pub pause_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_interval_ms: TYPE_INTERVAL_MS,
            pause_ms: PAUSE_MS,
        }
    }
}

impl From<&TypewriterConfig> for TypewriterTiming {
    fn from(config: &TypewriterConfig) -> Self {
        TypewriterTiming::from_millis(config.type_interval_ms, config.pause_ms)
    }
}

/// A number in the stats block that counts up when revealed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub target: f64,
}

/// A skill bar; `level` is a percentage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

/// A project filter chip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterChip {
    pub label: String,
    pub value: String,
}

/// A project card and the details shown in its modal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

impl Project {
    /// Space-separated tags, the string the filter matches against
    pub fn tag_string(&self) -> String {
        self.tags.join(" ")
    }

    /// Visible card text, the string the search query matches against
    pub fn card_text(&self) -> String {
        format!("{} {} {}", self.title, self.summary, self.tags.join(" "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub recipient: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: "hello@example.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub owner: String,
    pub tagline: String,
    pub about: Vec<String>,
    pub roles: Vec<String>,
    pub typewriter: TypewriterConfig,
    pub header_margin_px: f64,
    pub particle_count: usize,
    pub nav: Vec<NavLink>,
    pub stats: Vec<Stat>,
    pub skills: Vec<Skill>,
    pub filters: Vec<FilterChip>,
    pub projects: Vec<Project>,
    pub contact: ContactConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Portfolio".to_string(),
            tagline: String::new(),
            about: Vec::new(),
            roles: vec![
                "CSE Student".to_string(),
                "Web Developer".to_string(),
                "Java & C++ Learner".to_string(),
                "Problem Solver".to_string(),
            ],
            typewriter: TypewriterConfig::default(),
            header_margin_px: HEADER_MARGIN_PX,
            particle_count: crate::effects::PARTICLE_COUNT,
            nav: vec![
                NavLink::new("Home", "#home"),
                NavLink::new("About", "#about"),
                NavLink::new("Skills", "#skills"),
                NavLink::new("Projects", "#projects"),
                NavLink::new("Contact", "#contact"),
            ],
            stats: Vec::new(),
            skills: Vec::new(),
            filters: vec![FilterChip {
                label: "All".to_string(),
                value: ALL_TAGS.to_string(),
            }],
            projects: Vec::new(),
            contact: ContactConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> FolioResult<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Parse `json`, logging and falling back to defaults on failure
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Invalid site config, using defaults");
                Self::default()
            }
        }
    }

    pub fn typewriter_timing(&self) -> TypewriterTiming {
        TypewriterTiming::from(&self.typewriter)
    }

    pub fn project(&self, id: &str) -> FolioResult<&Project> {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| FolioError::UnknownProject(id.to_string()))
    }
}
