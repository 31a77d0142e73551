//! Bit-packed byte sequence decoding

use bitvec::order::Lsb0;
use bitvec::vec::BitVec;

use crate::decode::values::cells_to_grid;
use crate::grid::{Cell, Grid};
use crate::io::error::{ExtractError, Result};

/// Decode a space-separated byte sequence into a boolean grid
///
/// Each byte contributes 8 bits least-significant first, concatenated in
/// byte order; the first `width * height` bits are the cell values, filling
/// rows width-first, bottom row first. Trailing padding bits in the final
/// byte are ignored.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidToken`] for tokens outside `0..=255` and
/// [`ExtractError::CellCountMismatch`] if the byte count does not match the
/// declared dimensions.
pub fn parse_byte_grid(text: &str, width: usize, height: usize) -> Result<Grid> {
    let bytes = text
        .split_whitespace()
        .map(|token| {
            token.parse::<u8>().map_err(|_| ExtractError::InvalidToken {
                value: token.to_string(),
                expected: "byte value in 0..=255",
            })
        })
        .collect::<Result<Vec<u8>>>()?;

    let cell_count = width * height;
    let required_bytes = cell_count.div_ceil(8);
    if bytes.len() != required_bytes {
        return Err(ExtractError::CellCountMismatch {
            expected: cell_count,
            actual: bytes.len() * 8,
        });
    }

    let bits = BitVec::<u8, Lsb0>::from_vec(bytes);
    let cells = bits
        .iter()
        .by_vals()
        .take(cell_count)
        .map(|bit| if bit { Cell::Set } else { Cell::Empty })
        .collect();
    cells_to_grid(cells, width, height)
}
