//! Terminal rendering of a grid
//!
//! Debug visualization: one character per cell, one terminal row per grid
//! row, truncated to the terminal width so wide islands do not wrap.

use std::io::Write;

use crate::grid::Grid;
use crate::io::configuration::DEFAULT_SCREEN_WIDTH;

/// Columns available for rendering
///
/// An explicit override wins; otherwise the terminal is queried, with a
/// fixed fallback for non-terminal targets.
pub fn render_width(max_width: Option<usize>) -> usize {
    max_width
        .or_else(|| termsize::get().map(|size| size.cols as usize))
        .unwrap_or(DEFAULT_SCREEN_WIDTH)
}

/// Render a grid to `target`, one glyph per cell
///
/// # Errors
///
/// Propagates write failures of the target.
pub fn render_grid(
    grid: &Grid,
    target: &mut impl Write,
    max_width: Option<usize>,
) -> std::io::Result<()> {
    let width_limit = render_width(max_width);
    for row in grid.rows() {
        let line: String = row.iter().take(width_limit).map(|cell| cell.glyph()).collect();
        writeln!(target, "{line}")?;
    }
    Ok(())
}
