//! # Session Module
//!
//! Per-session settings chosen before a layout is loaded, and the score formula
//! applied when a session ends.
//!
//! The chosen difficulty travels as a plain [`SessionConfig`] value handed to
//! the loader at construction rather than as process-wide state.

pub mod score;

pub use score::*;

use crate::config;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty levels, each backed by one bundled layout.
///
/// # Examples
///
/// ```
/// use memory_match::Difficulty;
///
/// assert_eq!(Difficulty::Easy.layout_resource(), "gameConfig.json");
/// assert_eq!(Difficulty::Hard.layout_resource(), "gameConfig_4x5.json");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 2x4 grid
    #[default]
    Easy,
    /// 3x4 grid
    Medium,
    /// 4x5 grid
    Hard,
}

impl Difficulty {
    /// All difficulties from easiest to hardest.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Layout resource name for this difficulty.
    pub fn layout_resource(self) -> &'static str {
        match self {
            Difficulty::Easy => config::DEFAULT_LAYOUT_RESOURCE,
            Difficulty::Medium => "gameConfig_3x4.json",
            Difficulty::Hard => "gameConfig_4x5.json",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

/// Settings for one play session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Chosen difficulty
    pub difficulty: Difficulty,
    /// Explicit layout resource, taking precedence over the difficulty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_override: Option<String>,
}

impl SessionConfig {
    /// Creates a session for the given difficulty.
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            layout_override: None,
        }
    }

    /// Uses `resource` instead of the difficulty's layout. Blank names are ignored.
    pub fn with_layout(mut self, resource: impl Into<String>) -> Self {
        let resource = resource.into();
        self.layout_override = if resource.trim().is_empty() {
            None
        } else {
            Some(resource)
        };
        self
    }

    /// The layout resource this session should load.
    pub fn layout_resource(&self) -> &str {
        self.layout_override
            .as_deref()
            .unwrap_or_else(|| self.difficulty.layout_resource())
    }
}
