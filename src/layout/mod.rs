//! # Layout Module
//!
//! Level layout documents: the parsed model, validation, fetching and loading.
//!
//! A layout is a JSON document with a single `blocks` field holding the tile
//! placements of one level:
//!
//! ```json
//! { "blocks": [ { "R": 1, "C": 1, "number": 0 }, { "R": 1, "C": 2, "number": 0 } ] }
//! ```
//!
//! Every stage before validation keeps absent values representable (a `null`
//! document, a missing `blocks` field, `null` entries) so the validator can
//! report them precisely instead of failing inside the parser.

pub mod fetch;
pub mod grid;
pub mod loader;
pub mod validator;

pub use fetch::*;
pub use grid::*;
pub use loader::*;
pub use validator::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 1-based row/column coordinate on the card grid.
///
/// # Examples
///
/// ```
/// use memory_match::GridPosition;
///
/// let pos = GridPosition::new(2, 3);
/// assert_eq!(pos.row, 2);
/// assert_eq!(pos.to_string(), "(row 2, column 3)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPosition {
    pub row: i32,
    pub column: i32,
}

impl GridPosition {
    /// Creates a new position.
    pub fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Returns true if both coordinates are 1 or greater.
    pub fn is_positive(self) -> bool {
        self.row > 0 && self.column > 0
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(row {}, column {})", self.row, self.column)
    }
}

/// One tile of a layout document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TilePlacement {
    /// 1-based row
    #[serde(rename = "R", alias = "row")]
    pub row: i32,
    /// 1-based column
    #[serde(rename = "C", alias = "column")]
    pub column: i32,
    /// Tile type, resolved through the registry
    #[serde(rename = "number", alias = "typeNumber")]
    pub type_number: i32,
}

impl TilePlacement {
    /// Creates a new placement.
    pub fn new(row: i32, column: i32, type_number: i32) -> Self {
        Self {
            row,
            column,
            type_number,
        }
    }

    /// The placement's grid coordinate.
    pub fn position(&self) -> GridPosition {
        GridPosition::new(self.row, self.column)
    }
}

/// A parsed, not yet validated layout document.
///
/// `blocks` is `None` when the field was missing or `null`; individual entries
/// are `None` when the source held a `null` in the array.
///
/// # Examples
///
/// ```
/// use memory_match::{ConfigDocument, TilePlacement};
///
/// let doc = ConfigDocument::new(vec![
///     TilePlacement::new(1, 1, 0),
///     TilePlacement::new(1, 2, 0),
/// ]);
/// assert_eq!(doc.len(), 2);
/// assert_eq!(doc.placements().count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    #[serde(default)]
    pub blocks: Option<Vec<Option<TilePlacement>>>,
}

impl ConfigDocument {
    /// Creates a document where every entry is present.
    pub fn new(placements: Vec<TilePlacement>) -> Self {
        Self::from_entries(placements.into_iter().map(Some).collect())
    }

    /// Creates a document from entries that may be absent.
    pub fn from_entries(entries: Vec<Option<TilePlacement>>) -> Self {
        Self {
            blocks: Some(entries),
        }
    }

    /// Creates a document whose placement list is absent.
    pub fn without_blocks() -> Self {
        Self { blocks: None }
    }

    /// Number of entries, counting absent ones. Zero if the list is absent.
    pub fn len(&self) -> usize {
        self.blocks.as_ref().map_or(0, Vec::len)
    }

    /// Returns true if there are no entries (or no list at all).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the present placements in document order.
    pub fn placements(&self) -> impl Iterator<Item = &TilePlacement> {
        self.blocks.iter().flatten().flatten()
    }
}

/// Parses layout text. JSON `null` yields `Ok(None)`.
pub fn parse_document(text: &str) -> Result<Option<ConfigDocument>, serde_json::Error> {
    serde_json::from_str(text)
}
