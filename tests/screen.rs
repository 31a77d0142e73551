//! Validates terminal grid rendering

use std::error::Error;

use islegrid::grid::{Cell, Grid};
use islegrid::io::screen::render_grid;

type TestResult = Result<(), Box<dyn Error>>;

fn rendered(grid: &Grid, max_width: Option<usize>) -> Result<String, Box<dyn Error>> {
    let mut buffer = Vec::new();
    render_grid(grid, &mut buffer, max_width)?;
    Ok(String::from_utf8(buffer)?)
}

#[test]
fn test_each_class_renders_its_glyph() -> TestResult {
    let cells = vec![
        Cell::Set,
        Cell::Empty,
        Cell::Land,
        Cell::Coastline,
        Cell::Harbour,
        Cell::Empty,
    ];
    let grid = Grid::from_flat(3, 2, cells)?;
    assert_eq!(rendered(&grid, Some(80))?, "█ L\nCH \n");
    Ok(())
}

#[test]
fn test_rows_are_truncated_to_the_width_limit() -> TestResult {
    let grid = Grid::filled(10, 2, Cell::Set);
    let output = rendered(&grid, Some(4))?;
    for line in output.lines() {
        assert_eq!(line.chars().count(), 4);
    }
    Ok(())
}
