//! # Tile Type Descriptors
//!
//! The records a [`TypeRegistry`](super::TypeRegistry) is seeded from.

use crate::{config, MatchError, MatchResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Anything that names a tile type by integer id.
///
/// The registry treats descriptors as opaque apart from this id.
pub trait TypeDescriptor {
    /// The type number this descriptor answers to.
    fn id(&self) -> i32;
}

/// Concrete tile type shipped with the game.
///
/// # Examples
///
/// ```
/// use memory_match::{CardType, TypeDescriptor};
///
/// let card = CardType::numbered(4);
/// assert_eq!(card.id(), 4);
/// assert_eq!(card.name, "Card 4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardType {
    /// Matches `number` in layout documents
    pub id: i32,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Asset path of the face image, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub face: Option<String>,
}

impl CardType {
    /// Creates a card type with an explicit name.
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            face: None,
        }
    }

    /// Creates a card type named after its id.
    pub fn numbered(id: i32) -> Self {
        Self::new(id, format!("Card {}", id))
    }

    /// Attaches a face image path.
    pub fn with_face(mut self, face: impl Into<String>) -> Self {
        self.face = Some(face.into());
        self
    }

    /// One card type for every allowed type number.
    pub fn standard_set() -> Vec<CardType> {
        (config::MIN_TYPE_NUMBER..=config::MAX_TYPE_NUMBER)
            .map(CardType::numbered)
            .collect()
    }
}

impl TypeDescriptor for CardType {
    fn id(&self) -> i32 {
        self.id
    }
}

/// Parses a JSON array of card types. `null` entries are kept as `None` so the
/// registry can report them.
pub fn parse_card_types(text: &str) -> MatchResult<Vec<Option<CardType>>> {
    Ok(serde_json::from_str(text)?)
}

/// Reads and parses a card type list from disk.
pub fn load_card_types(path: impl AsRef<Path>) -> MatchResult<Vec<Option<CardType>>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| MatchError::Fetch {
        resource: path.display().to_string(),
        reason: e.to_string(),
    })?;
    parse_card_types(&text)
}
