//! Validates the set-algebra invariants of the grid operations

use islegrid::ExtractError;
use islegrid::grid::{Cell, Grid};

/// Build a grid from row strings, `#` marking set cells
fn grid_from_rows(rows: &[&str]) -> Grid {
    let width = rows.first().map_or(0, |row| row.chars().count());
    let cells = rows
        .iter()
        .flat_map(|row| row.chars())
        .map(|glyph| if glyph == '#' { Cell::Set } else { Cell::Empty })
        .collect();
    match Grid::from_flat(width, rows.len(), cells) {
        Ok(grid) => grid,
        Err(_) => Grid::new(0, 0),
    }
}

fn set_positions(grid: &Grid) -> Vec<(usize, usize)> {
    grid.iter()
        .filter(|(_, cell)| !cell.is_empty())
        .map(|(pos, _)| pos)
        .collect()
}

#[test]
fn test_subtracting_an_empty_grid_is_identity() -> Result<(), ExtractError> {
    let grid = grid_from_rows(&["##  ", " #  ", "   #"]);
    assert_eq!(grid.subtract(&grid.empty_like())?, grid);
    Ok(())
}

#[test]
fn test_subtracting_a_grid_from_itself_clears_it() -> Result<(), ExtractError> {
    let grid = grid_from_rows(&["##  ", " #  ", "   #"]);
    assert!(grid.subtract(&grid)?.is_all_empty());
    Ok(())
}

#[test]
fn test_intersect_is_commutative() -> Result<(), ExtractError> {
    let first = grid_from_rows(&["## ", " ##", "#  "]);
    let second = grid_from_rows(&[" # ", "## ", "# #"]);
    assert_eq!(first.intersect(&[&second])?, second.intersect(&[&first])?);
    Ok(())
}

#[test]
fn test_intersect_with_empty_grid_is_empty() -> Result<(), ExtractError> {
    let grid = grid_from_rows(&["## ", " ##", "#  "]);
    assert!(grid.intersect(&[&grid.empty_like()])?.is_all_empty());
    Ok(())
}

#[test]
fn test_outline_never_marks_occupied_cells() -> Result<(), ExtractError> {
    let grid = grid_from_rows(&["     ", " ##  ", " ##  ", "     "]);
    let outline = grid.outline();
    assert!(outline.intersect(&[&grid])?.is_all_empty());
    Ok(())
}

#[test]
fn test_outline_surrounds_a_block_with_a_ring() {
    let grid = grid_from_rows(&["    ", " #  ", "    "]);
    let outline = grid.outline();
    assert_eq!(
        set_positions(&outline),
        vec![
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 2),
            (2, 0),
            (2, 1),
            (2, 2),
        ]
    );
}

// Verified against an implementation that wraps negative neighbour offsets
// to the opposite edge: a corner cell must only outline its three in-bounds
// neighbours, with no phantom marks on the far rows or columns.
#[test]
fn test_outline_skips_out_of_bounds_neighbours() {
    let grid = grid_from_rows(&["#   ", "    ", "    ", "    "]);
    let outline = grid.outline();
    assert_eq!(set_positions(&outline), vec![(0, 1), (1, 0), (1, 1)]);
}

#[test]
fn test_overlay_keeps_a_fully_populated_base() -> Result<(), ExtractError> {
    let base = Grid::filled(3, 3, Cell::Land);
    let fallback = Grid::filled(3, 3, Cell::Harbour);
    assert_eq!(base.overlay(&[&fallback])?, base);
    Ok(())
}

#[test]
fn test_overlay_takes_the_first_non_empty_fallback() -> Result<(), ExtractError> {
    let base = grid_from_rows(&["#  "]).retag(Cell::Land);
    let first = grid_from_rows(&[" # "]).retag(Cell::Coastline);
    let second = grid_from_rows(&[" ##"]).retag(Cell::Harbour);
    let combined = base.overlay(&[&first, &second])?;
    assert_eq!(combined.get(0, 0), Some(Cell::Land));
    assert_eq!(combined.get(0, 1), Some(Cell::Coastline));
    assert_eq!(combined.get(0, 2), Some(Cell::Harbour));
    Ok(())
}

#[test]
fn test_retag_is_idempotent() {
    let grid = grid_from_rows(&["## ", "  #"]);
    let once = grid.retag(Cell::Coastline);
    assert_eq!(once.retag(Cell::Coastline), once);
}

#[test]
fn test_retag_leaves_empty_cells_empty() {
    let grid = grid_from_rows(&["# "]);
    let tagged = grid.retag(Cell::Harbour);
    assert_eq!(tagged.get(0, 0), Some(Cell::Harbour));
    assert_eq!(tagged.get(0, 1), Some(Cell::Empty));
}

#[test]
fn test_algebra_rejects_mismatched_shapes() {
    let small = Grid::new(2, 2);
    let large = Grid::new(3, 2);
    assert!(matches!(
        small.subtract(&large),
        Err(ExtractError::ShapeMismatch { .. })
    ));
    assert!(matches!(
        small.intersect(&[&large]),
        Err(ExtractError::ShapeMismatch { .. })
    ));
    assert!(matches!(
        small.overlay(&[&large]),
        Err(ExtractError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_paste_rejects_out_of_bounds_placement() {
    let mut parent = Grid::new(4, 4);
    let block = Grid::filled(2, 2, Cell::Set);
    assert!(matches!(
        parent.paste(&block, 3, 3),
        Err(ExtractError::ShapeMismatch { .. })
    ));
}
