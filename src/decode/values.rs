//! Paired value token decoding and shared row normalization

use crate::grid::{Cell, Grid};
use crate::io::error::{ExtractError, Result};

/// Reshape a flat cell sequence into a grid, flipping the row order
///
/// The serialized encodings store rows bottom-to-top; the first decoded row
/// becomes the last row of the resulting grid so that row 0 is the top row.
///
/// # Errors
///
/// Returns [`ExtractError::CellCountMismatch`] if the sequence does not
/// supply exactly `width * height` cells.
pub fn cells_to_grid(cells: Vec<Cell>, width: usize, height: usize) -> Result<Grid> {
    if width > 0 && cells.len() == width * height {
        let flipped = cells
            .chunks_exact(width)
            .rev()
            .flatten()
            .copied()
            .collect();
        Grid::from_flat(width, height, flipped)
    } else {
        Err(ExtractError::CellCountMismatch {
            expected: width * height,
            actual: cells.len(),
        })
    }
}

/// Truth mapping shared by the token decoders: any token but `"0"` is set
fn token_cell(token: &str) -> Cell {
    if token == "0" { Cell::Empty } else { Cell::Set }
}

/// Decode a paired-token value list into a boolean grid
///
/// Each logical cell is serialized as two whitespace-separated tokens of
/// which only the second carries the value, so tokens at even indices are
/// discarded. The kept tokens fill rows width-first, bottom row first.
///
/// # Errors
///
/// Returns [`ExtractError::CellCountMismatch`] if the kept tokens do not
/// cover exactly `width * height` cells.
pub fn parse_double_value_grid(text: &str, width: usize, height: usize) -> Result<Grid> {
    let cells = text
        .split_whitespace()
        .skip(1)
        .step_by(2)
        .map(token_cell)
        .collect();
    cells_to_grid(cells, width, height)
}
