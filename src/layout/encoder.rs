//! Row-major grid traversal into placement records
//!
//! Traversal order is fixed — row 0 to H-1, column 0 to W-1 — so two runs
//! over the same grid produce byte-identical, diffable documents.

use log::debug;

use crate::grid::{Cell, Grid};
use crate::io::configuration::{
    COASTLINE_BLOCKER_COLOR, HARBOUR_BLOCKER_COLOR, LAND_BLOCKER_COLOR,
};
use crate::layout::document::{Color, LayoutDocument, PlacementRecord};

/// Blocker colour for a cell class, `None` for cells that emit no record
///
/// Plain boolean grids encode with the land colour; the classified outline
/// tags map to their fixed palette entries.
const fn blocker_color(cell: Cell) -> Option<Color> {
    match cell {
        Cell::Empty => None,
        Cell::Set | Cell::Land => Some(Color::from_argb(LAND_BLOCKER_COLOR)),
        Cell::Coastline => Some(Color::from_argb(COASTLINE_BLOCKER_COLOR)),
        Cell::Harbour => Some(Color::from_argb(HARBOUR_BLOCKER_COLOR)),
    }
}

/// Encode a grid as a layout document, one blocker per non-empty cell
///
/// The record's X coordinate is the cell's column index and its Y coordinate
/// the cell's row index.
pub fn encode_layout(grid: &Grid) -> LayoutDocument {
    let objects: Vec<PlacementRecord> = grid
        .iter()
        .filter_map(|((row, col), cell)| {
            blocker_color(cell).map(|color| PlacementRecord::blocker(col, row, color))
        })
        .collect();
    debug!(
        "encoded {} placement records from a {}x{} grid",
        objects.len(),
        grid.width(),
        grid.height()
    );
    LayoutDocument::new(objects)
}
