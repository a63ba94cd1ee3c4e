//! # Layout Validation
//!
//! Ordered, fail-fast checks run on a parsed layout before a grid is built.
//!
//! The checks always run in the same order and stop at the first failure, so a
//! given bad document always produces the same single diagnostic:
//!
//! 1. document present, placement list present, non-empty, even length
//! 2. registry present
//! 3. one pass over the placements: entry present, positive coordinates,
//!    registered type, type number in range, no repeated position
//! 4. effective grid dimensions within bounds
//! 5. every type number appears exactly twice

use super::{ConfigDocument, GridPosition};
use crate::config::{
    MAX_GRID_DIMENSION, MAX_TYPE_NUMBER, MIN_GRID_DIMENSION, MIN_TYPE_NUMBER, PAIR_SIZE,
};
use crate::registry::{TypeDescriptor, TypeRegistry};
use log::{error, info};
use std::collections::HashSet;

/// Reason a layout document was rejected.
///
/// The `Display` text is the diagnostic that gets logged.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("config object is null (document might be empty or malformed)")]
    MissingDocument,

    #[error("blocks array is null ('blocks' field might be missing or malformed)")]
    MissingBlocks,

    #[error("blocks array is empty, no card data provided")]
    EmptyBlocks,

    #[error("odd number of blocks ({0}), must be even to form pairs")]
    OddBlockCount(usize),

    #[error("registry is null, cannot validate block numbers")]
    MissingRegistry,

    #[error("null block entry found within the blocks array")]
    NullBlock,

    #[error("invalid row ({row}) or column ({column}) for a block, both must be positive (1-based)")]
    NonPositivePosition { row: i32, column: i32 },

    #[error("type number {type_number} at {position} does not correspond to any registered type")]
    UnregisteredType {
        type_number: i32,
        position: GridPosition,
    },

    #[error(
        "type number {type_number} at {position} is outside the allowed {}-{} range",
        MIN_TYPE_NUMBER,
        MAX_TYPE_NUMBER
    )]
    TypeOutOfRange {
        type_number: i32,
        position: GridPosition,
    },

    #[error("duplicate position {0} found in config")]
    DuplicatePosition(GridPosition),

    #[error(
        "effective grid dimensions (rows: {rows}, columns: {columns}) are out of bounds, both must be between {} and {} inclusive",
        MIN_GRID_DIMENSION,
        MAX_GRID_DIMENSION
    )]
    GridOutOfBounds { rows: i32, columns: i32 },

    #[error("type number {type_number} appears {count} times, must appear exactly twice to form a pair")]
    NotPaired { type_number: i32, count: usize },
}

/// Effective size of a layout: the largest row and column used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    pub rows: i32,
    pub columns: i32,
}

impl GridDimensions {
    fn within_bounds(&self) -> bool {
        let bounds = MIN_GRID_DIMENSION..=MAX_GRID_DIMENSION;
        bounds.contains(&self.rows) && bounds.contains(&self.columns)
    }
}

/// Runs every check and returns the effective grid dimensions on success.
///
/// Nothing is logged; see [`validate_config`] for the logging variant.
///
/// # Examples
///
/// ```
/// use memory_match::{check_config, ConfigDocument, TilePlacement, TypeRegistry, ValidationError};
///
/// let registry = TypeRegistry::standard();
/// let doc = ConfigDocument::new(vec![
///     TilePlacement::new(1, 1, 0),
///     TilePlacement::new(1, 2, 1),
///     TilePlacement::new(2, 1, 0),
/// ]);
/// assert_eq!(
///     check_config(Some(&doc), Some(&registry)),
///     Err(ValidationError::OddBlockCount(3))
/// );
/// ```
pub fn check_config<D: TypeDescriptor>(
    document: Option<&ConfigDocument>,
    registry: Option<&TypeRegistry<D>>,
) -> Result<GridDimensions, ValidationError> {
    let document = document.ok_or(ValidationError::MissingDocument)?;
    let blocks = document
        .blocks
        .as_ref()
        .ok_or(ValidationError::MissingBlocks)?;

    if blocks.is_empty() {
        return Err(ValidationError::EmptyBlocks);
    }
    if blocks.len() % 2 != 0 {
        return Err(ValidationError::OddBlockCount(blocks.len()));
    }

    let registry = registry.ok_or(ValidationError::MissingRegistry)?;

    let mut dimensions = GridDimensions {
        rows: 0,
        columns: 0,
    };
    // First-seen order, so the pairing diagnostic follows the document
    let mut type_counts: Vec<(i32, usize)> = Vec::new();
    let mut seen: HashSet<GridPosition> = HashSet::with_capacity(blocks.len());

    for block in blocks {
        let block = block.as_ref().ok_or(ValidationError::NullBlock)?;
        let position = block.position();

        if !position.is_positive() {
            return Err(ValidationError::NonPositivePosition {
                row: block.row,
                column: block.column,
            });
        }
        dimensions.rows = dimensions.rows.max(block.row);
        dimensions.columns = dimensions.columns.max(block.column);

        if registry.lookup(block.type_number).is_none() {
            return Err(ValidationError::UnregisteredType {
                type_number: block.type_number,
                position,
            });
        }
        if !(MIN_TYPE_NUMBER..=MAX_TYPE_NUMBER).contains(&block.type_number) {
            return Err(ValidationError::TypeOutOfRange {
                type_number: block.type_number,
                position,
            });
        }

        match type_counts.iter_mut().find(|(n, _)| *n == block.type_number) {
            Some((_, count)) => *count += 1,
            None => type_counts.push((block.type_number, 1)),
        }

        if !seen.insert(position) {
            return Err(ValidationError::DuplicatePosition(position));
        }
    }

    if !dimensions.within_bounds() {
        return Err(ValidationError::GridOutOfBounds {
            rows: dimensions.rows,
            columns: dimensions.columns,
        });
    }

    if let Some(&(type_number, count)) = type_counts.iter().find(|(_, count)| *count != PAIR_SIZE) {
        return Err(ValidationError::NotPaired { type_number, count });
    }

    Ok(dimensions)
}

/// Validates a layout, logging the outcome.
///
/// Each failure emits exactly one `error!` line naming the reason; success logs
/// a confirmation.
pub fn validate_config<D: TypeDescriptor>(
    document: Option<&ConfigDocument>,
    registry: Option<&TypeRegistry<D>>,
) -> bool {
    check_and_log(document, registry).is_ok()
}

pub(crate) fn check_and_log<D: TypeDescriptor>(
    document: Option<&ConfigDocument>,
    registry: Option<&TypeRegistry<D>>,
) -> Result<GridDimensions, ValidationError> {
    let result = check_config(document, registry);
    match &result {
        Ok(_) => info!("Config validation successful."),
        Err(e) => error!("Validation Error: {}", e),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::TilePlacement;
    use crate::registry::CardType;

    fn registry() -> TypeRegistry {
        TypeRegistry::from_descriptors((0..3).map(CardType::numbered))
    }

    fn doc(placements: &[(i32, i32, i32)]) -> ConfigDocument {
        ConfigDocument::new(
            placements
                .iter()
                .map(|&(r, c, n)| TilePlacement::new(r, c, n))
                .collect(),
        )
    }

    fn check(document: &ConfigDocument) -> Result<GridDimensions, ValidationError> {
        check_config(Some(document), Some(&registry()))
    }

    #[test]
    fn test_valid_minimal_2x2() {
        let layout = doc(&[(2, 1, 0), (2, 2, 1), (1, 1, 0), (1, 2, 1)]);
        assert_eq!(
            check(&layout),
            Ok(GridDimensions {
                rows: 2,
                columns: 2
            })
        );
        assert!(validate_config(Some(&layout), Some(&registry())));
    }

    #[test]
    fn test_null_document() {
        assert_eq!(
            check_config::<CardType>(None, Some(&registry())),
            Err(ValidationError::MissingDocument)
        );
        assert!(!validate_config::<CardType>(None, Some(&registry())));
    }

    #[test]
    fn test_null_and_empty_blocks() {
        assert_eq!(
            check(&ConfigDocument::without_blocks()),
            Err(ValidationError::MissingBlocks)
        );
        assert_eq!(
            check(&ConfigDocument::new(Vec::new())),
            Err(ValidationError::EmptyBlocks)
        );
    }

    #[test]
    fn test_odd_count_reported_before_anything_else() {
        // Also has a null registry, bad coordinates and unknown types
        let layout = doc(&[(0, 0, 42), (0, 0, 42), (-1, 1, 99)]);
        assert_eq!(
            check_config::<CardType>(Some(&layout), None),
            Err(ValidationError::OddBlockCount(3))
        );
        assert!(ValidationError::OddBlockCount(3).to_string().contains("(3)"));
    }

    #[test]
    fn test_null_registry() {
        let layout = doc(&[(1, 1, 0), (1, 2, 0)]);
        assert_eq!(
            check_config::<CardType>(Some(&layout), None),
            Err(ValidationError::MissingRegistry)
        );
    }

    #[test]
    fn test_null_entry() {
        let layout = ConfigDocument::from_entries(vec![
            Some(TilePlacement::new(2, 1, 0)),
            None,
            Some(TilePlacement::new(1, 1, 0)),
            Some(TilePlacement::new(1, 2, 1)),
        ]);
        assert_eq!(check(&layout), Err(ValidationError::NullBlock));
    }

    #[test]
    fn test_non_positive_coordinates() {
        let layout = doc(&[(1, 1, 0), (1, 0, 0)]);
        assert_eq!(
            check(&layout),
            Err(ValidationError::NonPositivePosition { row: 1, column: 0 })
        );
    }

    #[test]
    fn test_unregistered_type() {
        let layout = doc(&[(2, 1, 0), (2, 2, 5), (1, 1, 0), (1, 2, 5)]);
        let err = check(&layout).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnregisteredType {
                type_number: 5,
                position: GridPosition::new(2, 2)
            }
        );
        let message = err.to_string();
        assert!(message.contains("type number 5"));
        assert!(message.contains("(row 2, column 2)"));
    }

    #[test]
    fn test_registered_type_out_of_range() {
        let wide =
            TypeRegistry::from_descriptors(vec![CardType::numbered(0), CardType::numbered(12)]);
        let layout = doc(&[(1, 1, 12), (1, 2, 12), (2, 1, 0), (2, 2, 0)]);
        assert_eq!(
            check_config(Some(&layout), Some(&wide)),
            Err(ValidationError::TypeOutOfRange {
                type_number: 12,
                position: GridPosition::new(1, 1)
            })
        );
    }

    #[test]
    fn test_duplicate_position() {
        let layout = doc(&[(2, 1, 0), (2, 2, 1), (1, 1, 0), (2, 1, 1)]);
        assert_eq!(
            check(&layout),
            Err(ValidationError::DuplicatePosition(GridPosition::new(2, 1)))
        );
    }

    #[test]
    fn test_grid_too_small() {
        let one_row = doc(&[(1, 1, 0), (1, 2, 0)]);
        assert_eq!(
            check(&one_row),
            Err(ValidationError::GridOutOfBounds {
                rows: 1,
                columns: 2
            })
        );

        let one_column = doc(&[(1, 1, 0), (2, 1, 0)]);
        assert_eq!(
            check(&one_column),
            Err(ValidationError::GridOutOfBounds {
                rows: 2,
                columns: 1
            })
        );
    }

    #[test]
    fn test_grid_too_tall() {
        let placements: Vec<(i32, i32, i32)> = (1..=9)
            .flat_map(|r| [(r, 1, (r - 1) % 3), (r, 2, (r - 1) % 3)])
            .collect();
        let err = check(&doc(&placements)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::GridOutOfBounds {
                rows: 9,
                columns: 2
            }
        );
        assert!(err.to_string().contains("rows: 9"));
    }

    #[test]
    fn test_type_appearing_once() {
        let layout = doc(&[(2, 1, 0), (2, 2, 1), (1, 1, 0), (1, 2, 2)]);
        let err = check(&layout).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotPaired {
                type_number: 1,
                count: 1
            }
        );
        assert!(err.to_string().contains("appears 1 times"));
    }

    #[test]
    fn test_type_appearing_three_times() {
        let layout = doc(&[(1, 1, 0), (1, 2, 0), (2, 1, 0), (2, 2, 1)]);
        assert_eq!(
            check(&layout),
            Err(ValidationError::NotPaired {
                type_number: 0,
                count: 3
            })
        );
    }

    #[test]
    fn test_first_unpaired_type_in_document_order() {
        let registry = TypeRegistry::standard();
        let layout = doc(&[(1, 1, 5), (1, 2, 5), (2, 1, 5), (2, 2, 1)]);
        assert_eq!(
            check_config(Some(&layout), Some(&registry)),
            Err(ValidationError::NotPaired {
                type_number: 5,
                count: 3
            })
        );

        let reversed = doc(&[(2, 2, 1), (1, 1, 5), (1, 2, 5), (2, 1, 5)]);
        assert_eq!(
            check_config(Some(&reversed), Some(&registry)),
            Err(ValidationError::NotPaired {
                type_number: 1,
                count: 1
            })
        );
    }

    #[test]
    fn test_bounds_checked_before_pairing() {
        let layout = doc(&[(1, 1, 0), (1, 2, 1)]);
        assert!(matches!(
            check(&layout),
            Err(ValidationError::GridOutOfBounds { .. })
        ));
    }
}
