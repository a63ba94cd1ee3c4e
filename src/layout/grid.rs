//! # Grid Layout
//!
//! Turns a validated layout document into the card grid shown to the player.

use super::{ConfigDocument, GridPosition};
use crate::registry::{TypeDescriptor, TypeRegistry};
use crate::{MatchError, MatchResult};
use log::info;

/// One card slot of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell<D> {
    pub position: GridPosition,
    pub type_number: i32,
    pub descriptor: D,
}

/// The visible card grid: dimensions plus cells in row-major order.
///
/// # Examples
///
/// ```
/// use memory_match::{ConfigDocument, GridLayout, TilePlacement, TypeRegistry};
///
/// let doc = ConfigDocument::new(vec![
///     TilePlacement::new(2, 2, 1),
///     TilePlacement::new(1, 1, 0),
///     TilePlacement::new(2, 1, 0),
///     TilePlacement::new(1, 2, 1),
/// ]);
/// let grid = GridLayout::build(&doc, &TypeRegistry::standard()).unwrap();
/// assert_eq!((grid.rows, grid.columns), (2, 2));
/// assert_eq!(grid.pair_count(), 2);
/// assert_eq!(grid.cells[0].position.row, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout<D> {
    pub rows: i32,
    pub columns: i32,
    pub cells: Vec<GridCell<D>>,
}

impl<D: TypeDescriptor + Clone> GridLayout<D> {
    /// Builds the grid. Expects a document that already passed validation;
    /// unresolvable type numbers or absent entries are reported as
    /// [`MatchError::InvalidState`].
    pub fn build(document: &ConfigDocument, registry: &TypeRegistry<D>) -> MatchResult<Self> {
        let blocks = document
            .blocks
            .as_ref()
            .ok_or_else(|| MatchError::InvalidState("layout has no blocks".to_string()))?;

        let mut cells = Vec::with_capacity(blocks.len());
        for block in blocks {
            let block = block
                .as_ref()
                .ok_or_else(|| MatchError::InvalidState("layout has a null block".to_string()))?;
            let descriptor = registry.lookup(block.type_number).ok_or_else(|| {
                MatchError::InvalidState(format!(
                    "no type found for number {} at {}",
                    block.type_number,
                    block.position()
                ))
            })?;
            cells.push(GridCell {
                position: block.position(),
                type_number: block.type_number,
                descriptor: descriptor.clone(),
            });
        }
        cells.sort_by_key(|cell| cell.position);

        let rows = cells.iter().map(|c| c.position.row).max().unwrap_or(0);
        let columns = cells.iter().map(|c| c.position.column).max().unwrap_or(0);

        info!(
            "Grid created with {} cards. Columns: {}, rows: {}.",
            cells.len(),
            columns,
            rows
        );
        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// The cell at `(row, column)`, if one was placed there.
    pub fn cell_at(&self, row: i32, column: i32) -> Option<&GridCell<D>> {
        let target = GridPosition::new(row, column);
        self.cells
            .binary_search_by_key(&target, |cell| cell.position)
            .ok()
            .map(|index| &self.cells[index])
    }

    /// Number of pairs the player has to find.
    pub fn pair_count(&self) -> usize {
        self.cells.len() / 2
    }

    /// Renders the grid as rows of type numbers, `.` for empty slots.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in 1..=self.rows {
            let line: Vec<String> = (1..=self.columns)
                .map(|column| match self.cell_at(row, column) {
                    Some(cell) => cell.type_number.to_string(),
                    None => ".".to_string(),
                })
                .collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }
}
