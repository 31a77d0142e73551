//! Sparse region-block decoding of the buildable-area grid
//!
//! The sparse encoding replays an ordered block sequence onto an all-empty
//! grid. `BeginRegion` declares the dimensions of the sub-grids that follow,
//! `EndRegion` clears them; value-carrying blocks are only valid while a
//! region with positive dimensions is active.

use crate::decode::values::parse_double_value_grid;
use crate::grid::{Cell, Grid};
use crate::io::error::{ExtractError, Result};

/// One block of the sparse buildable-area encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SparseBlock {
    /// Declare the dimensions of the following sub-grid blocks
    BeginRegion {
        /// Sub-grid width in cells
        width: usize,
        /// Sub-grid height in cells
        height: usize,
    },
    /// Clear the active region dimensions
    EndRegion,
    /// A dense sub-grid of paired value tokens placed at `(x, y)`
    Explicit {
        /// Column offset in the parent grid
        x: usize,
        /// Row offset in the parent grid
        y: usize,
        /// Raw paired-token text covering the active region size
        values: String,
    },
    /// A sub-grid uniformly filled with a single value placed at `(x, y)`
    Uniform {
        /// Column offset in the parent grid
        x: usize,
        /// Row offset in the parent grid
        y: usize,
        /// Raw paired-token text of the single fill value
        default: String,
    },
}

/// Active region dimensions, present only between begin and end blocks
struct RegionState(Option<(usize, usize)>);

impl RegionState {
    fn activate(&mut self, width: usize, height: usize) {
        self.0 = Some((width, height));
    }

    fn clear(&mut self) {
        self.0 = None;
    }

    /// Dimensions for a value-carrying block at `block_index`
    fn require(&self, block_index: usize) -> Result<(usize, usize)> {
        match self.0 {
            Some((width, height)) if width > 0 && height > 0 => Ok((width, height)),
            Some(_) => Err(ExtractError::InvalidRegionState {
                block_index,
                reason: "active region dimensions must be positive",
            }),
            None => Err(ExtractError::InvalidRegionState {
                block_index,
                reason: "value block outside an active region",
            }),
        }
    }
}

/// Replay a sparse block sequence into a boolean grid
///
/// Blocks are applied strictly in sequence onto an all-empty grid of the
/// declared dimensions.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidRegionState`] if a value-carrying block is
/// encountered with no active region or non-positive region dimensions,
/// [`ExtractError::ShapeMismatch`] if a sub-grid placed at its offset would
/// exceed the parent bounds, and any decoding error of the sub-grid tokens.
pub fn parse_sparse_grid(width: usize, height: usize, blocks: &[SparseBlock]) -> Result<Grid> {
    let mut grid = Grid::new(width, height);
    let mut region = RegionState(None);

    for (block_index, block) in blocks.iter().enumerate() {
        match block {
            SparseBlock::BeginRegion { width, height } => region.activate(*width, *height),
            SparseBlock::EndRegion => region.clear(),
            SparseBlock::Explicit { x, y, values } => {
                let (sub_width, sub_height) = region.require(block_index)?;
                let sub_grid = parse_double_value_grid(values, sub_width, sub_height)?;
                grid.paste(&sub_grid, *x, *y)?;
            }
            SparseBlock::Uniform { x, y, default } => {
                let (sub_width, sub_height) = region.require(block_index)?;
                let value = parse_double_value_grid(default, 1, 1)?
                    .get(0, 0)
                    .unwrap_or(Cell::Empty);
                let sub_grid = Grid::filled(sub_width, sub_height, value);
                grid.paste(&sub_grid, *x, *y)?;
            }
        }
    }
    Ok(grid)
}
