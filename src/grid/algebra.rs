//! Outline, intersection, subtraction, overlay and retagging operations
//!
//! All operations are pure: inputs are never mutated and every result is a
//! freshly allocated grid with the dimensions of the primary operand.
//! Operands of differing dimensions are a precondition violation and fail
//! with `ShapeMismatch`.

use ndarray::{Array2, Zip};

use crate::grid::cell::Cell;
use crate::grid::container::Grid;
use crate::io::error::Result;

/// Relative positions of the 8 neighbours at Chebyshev distance 1
const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Grid {
    /// All-empty grid with the same dimensions as this one
    pub fn empty_like(&self) -> Self {
        let (width, height) = self.dimensions();
        Self::new(width, height)
    }

    /// The ring of empty cells bordering the non-empty area
    ///
    /// Marks as [`Cell::Set`] every empty cell with at least one non-empty
    /// neighbour at Chebyshev distance 1. Cells that are non-empty in the
    /// input are never marked. Neighbour positions outside the grid bounds
    /// do not exist; they are skipped, never wrapped to the opposite edge.
    pub fn outline(&self) -> Self {
        let cells = Array2::from_shape_fn(self.cells().dim(), |(row, col)| {
            let here = self.get(row, col).unwrap_or(Cell::Empty);
            if !here.is_empty() {
                return Cell::Empty;
            }
            let bordered = NEIGHBOUR_OFFSETS.iter().any(|&(row_off, col_off)| {
                row.checked_add_signed(row_off)
                    .zip(col.checked_add_signed(col_off))
                    .and_then(|(r, c)| self.get(r, c))
                    .is_some_and(|neighbour| !neighbour.is_empty())
            });
            if bordered { Cell::Set } else { Cell::Empty }
        });
        Self::from_cells(cells)
    }

    /// Cells non-empty in this grid and in every grid of `others`
    ///
    /// The result is a boolean grid: matching cells are [`Cell::Set`]
    /// regardless of the operand tags. With an empty `others` slice this
    /// reduces to the boolean projection of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeMismatch`](crate::ExtractError::ShapeMismatch) if any
    /// operand's dimensions differ from this grid's.
    pub fn intersect(&self, others: &[&Self]) -> Result<Self> {
        let mut cells = self.cells().mapv(|cell| {
            if cell.is_empty() {
                Cell::Empty
            } else {
                Cell::Set
            }
        });
        for other in others {
            self.ensure_same_shape(other)?;
            cells = Zip::from(&cells)
                .and(other.cells())
                .map_collect(|&acc, &with| {
                    if !acc.is_empty() && !with.is_empty() {
                        Cell::Set
                    } else {
                        Cell::Empty
                    }
                });
        }
        Ok(Self::from_cells(cells))
    }

    /// This grid with every cell that is non-empty in `other` cleared
    ///
    /// # Errors
    ///
    /// Returns [`ShapeMismatch`](crate::ExtractError::ShapeMismatch) if the
    /// operand dimensions differ.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.ensure_same_shape(other)?;
        let cells = Zip::from(self.cells())
            .and(other.cells())
            .map_collect(|&keep, &remove| if remove.is_empty() { keep } else { Cell::Empty });
        Ok(Self::from_cells(cells))
    }

    /// This grid with empty cells filled from the first non-empty fallback
    ///
    /// Base values always win; a cell empty in the base takes the value of
    /// the first grid in `fallbacks` that is non-empty there. Argument order
    /// is the precedence order.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeMismatch`](crate::ExtractError::ShapeMismatch) if any
    /// fallback's dimensions differ from this grid's.
    pub fn overlay(&self, fallbacks: &[&Self]) -> Result<Self> {
        let mut cells = self.cells().clone();
        for fallback in fallbacks {
            self.ensure_same_shape(fallback)?;
            cells = Zip::from(&cells)
                .and(fallback.cells())
                .map_collect(|&base, &fill| if base.is_empty() { fill } else { base });
        }
        Ok(Self::from_cells(cells))
    }

    /// Every non-empty cell mapped to the single classification `tag`
    ///
    /// Empty cells stay empty. Idempotent for any fixed tag.
    pub fn retag(&self, tag: Cell) -> Self {
        let cells = self
            .cells()
            .mapv(|cell| if cell.is_empty() { Cell::Empty } else { tag });
        Self::from_cells(cells)
    }
}
