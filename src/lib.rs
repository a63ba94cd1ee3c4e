//! # Memory Match
//!
//! Level layout loading and validation for a card-pairs memory game.
//!
//! ## Architecture Overview
//!
//! A game session starts from a layout document: a flat list of tiles, each
//! placed at a 1-based row and column and carrying a type number. Before a grid
//! is shown to the player the layout goes through a fixed pipeline:
//!
//! - **Registry**: the set of known tile types, looked up by numeric id
//! - **Fetch**: raw layout text from a directory or from bundled resources
//! - **Parse**: JSON into a [`ConfigDocument`]
//! - **Validate**: ordered, fail-fast structural and semantic checks
//! - **Grid**: the validated document turned into a sorted [`GridLayout`]
//!
//! Scoring and the persisted leaderboard live alongside in [`session`] and
//! [`leaderboard`].

pub mod layout;
pub mod leaderboard;
pub mod registry;
pub mod session;

// Core module re-exports
pub use layout::*;
pub use leaderboard::*;
pub use registry::*;
pub use session::*;

/// Core error type for the memory match crate.
#[derive(thiserror::Error, Debug)]
pub enum MatchError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Named resource does not exist in the fetch channel
    #[error("Cannot find resource '{0}'")]
    ResourceNotFound(String),

    /// Resource exists but could not be fetched
    #[error("Failed to fetch resource '{resource}': {reason}")]
    Fetch { resource: String, reason: String },

    /// Resource text is not a well-formed layout document
    #[error("Error parsing JSON from resource '{resource}': {reason}")]
    Parse { resource: String, reason: String },

    /// Layout document failed validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Internal state is inconsistent
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type used throughout the memory match codebase.
pub type MatchResult<T> = Result<T, MatchError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Smallest allowed number of rows or columns in a layout
    pub const MIN_GRID_DIMENSION: i32 = 2;

    /// Largest allowed number of rows or columns in a layout
    pub const MAX_GRID_DIMENSION: i32 = 8;

    /// Lowest type number a placement may carry
    pub const MIN_TYPE_NUMBER: i32 = 0;

    /// Highest type number a placement may carry
    pub const MAX_TYPE_NUMBER: i32 = 9;

    /// Every type number must appear exactly this many times
    pub const PAIR_SIZE: usize = 2;

    /// Layout resource used when no difficulty was chosen
    pub const DEFAULT_LAYOUT_RESOURCE: &str = "gameConfig.json";

    /// File name of the persisted leaderboard
    pub const LEADERBOARD_FILE_NAME: &str = "leaderboard.json";

    /// Number of leaderboard entries shown to the player
    pub const MAX_LEADERBOARD_ENTRIES: usize = 8;

    /// Name recorded when a player leaves the name field blank
    pub const ANONYMOUS_PLAYER_NAME: &str = "Anonymous";
}
