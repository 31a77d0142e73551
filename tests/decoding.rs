//! Validates the three grid decoding strategies

use islegrid::ExtractError;
use islegrid::decode::{
    SparseBlock, parse_byte_grid, parse_double_value_grid, parse_sparse_grid,
};
use islegrid::grid::Cell;

#[test]
fn test_byte_bits_expand_least_significant_first() -> Result<(), ExtractError> {
    let grid = parse_byte_grid("1", 8, 1)?;
    assert_eq!(grid.get(0, 0), Some(Cell::Set));
    for col in 1..8 {
        assert_eq!(grid.get(0, col), Some(Cell::Empty));
    }
    Ok(())
}

#[test]
fn test_byte_rows_are_flipped_bottom_to_top() -> Result<(), ExtractError> {
    // First serialized row is byte 1 (bit 0 set); it must land on the
    // bottom row of the decoded grid.
    let grid = parse_byte_grid("1 0", 8, 2)?;
    assert_eq!(grid.get(1, 0), Some(Cell::Set));
    assert_eq!(grid.get(0, 0), Some(Cell::Empty));
    Ok(())
}

#[test]
fn test_byte_decoder_requires_exact_coverage() {
    assert!(matches!(
        parse_byte_grid("1 2 3", 8, 1),
        Err(ExtractError::CellCountMismatch { .. })
    ));
}

#[test]
fn test_byte_decoder_rejects_values_over_255() {
    assert!(matches!(
        parse_byte_grid("256", 8, 1),
        Err(ExtractError::InvalidToken { .. })
    ));
}

#[test]
fn test_double_value_decoder_keeps_odd_tokens() -> Result<(), ExtractError> {
    let grid = parse_double_value_grid("0 0 0 X", 2, 1)?;
    assert_eq!(grid.get(0, 0), Some(Cell::Empty));
    assert_eq!(grid.get(0, 1), Some(Cell::Set));
    Ok(())
}

#[test]
fn test_double_value_rows_are_flipped_bottom_to_top() -> Result<(), ExtractError> {
    let grid = parse_double_value_grid("0 1 0 0", 1, 2)?;
    assert_eq!(grid.get(0, 0), Some(Cell::Empty));
    assert_eq!(grid.get(1, 0), Some(Cell::Set));
    Ok(())
}

#[test]
fn test_double_value_decoder_requires_exact_coverage() {
    assert!(matches!(
        parse_double_value_grid("0 1 0 1", 3, 1),
        Err(ExtractError::CellCountMismatch { .. })
    ));
}

#[test]
fn test_sparse_uniform_block_fills_a_region() -> Result<(), ExtractError> {
    let blocks = [
        SparseBlock::BeginRegion {
            width: 2,
            height: 2,
        },
        SparseBlock::Uniform {
            x: 1,
            y: 1,
            default: "0 1".to_string(),
        },
        SparseBlock::EndRegion,
    ];
    let grid = parse_sparse_grid(4, 4, &blocks)?;
    for row in 0..4 {
        for col in 0..4 {
            let inside = (1..3).contains(&row) && (1..3).contains(&col);
            let expected = if inside { Cell::Set } else { Cell::Empty };
            assert_eq!(grid.get(row, col), Some(expected), "cell ({row}, {col})");
        }
    }
    Ok(())
}

#[test]
fn test_sparse_uniform_zero_default_stays_empty() -> Result<(), ExtractError> {
    let blocks = [
        SparseBlock::BeginRegion {
            width: 2,
            height: 2,
        },
        SparseBlock::Uniform {
            x: 0,
            y: 0,
            default: "0 0".to_string(),
        },
    ];
    let grid = parse_sparse_grid(4, 4, &blocks)?;
    assert!(grid.is_all_empty());
    Ok(())
}

#[test]
fn test_sparse_explicit_block_is_row_flipped_within_itself() -> Result<(), ExtractError> {
    // Sub-grid cells are (Empty, Set) then (Set, Empty) bottom-to-top, so
    // the pasted block reads (Set, Empty) on its upper row.
    let blocks = [
        SparseBlock::BeginRegion {
            width: 2,
            height: 2,
        },
        SparseBlock::Explicit {
            x: 0,
            y: 0,
            values: "0 0 0 1 0 1 0 0".to_string(),
        },
    ];
    let grid = parse_sparse_grid(2, 2, &blocks)?;
    assert_eq!(grid.get(0, 0), Some(Cell::Set));
    assert_eq!(grid.get(0, 1), Some(Cell::Empty));
    assert_eq!(grid.get(1, 0), Some(Cell::Empty));
    assert_eq!(grid.get(1, 1), Some(Cell::Set));
    Ok(())
}

#[test]
fn test_sparse_blit_past_parent_bounds_is_rejected() {
    let blocks = [
        SparseBlock::BeginRegion {
            width: 2,
            height: 2,
        },
        SparseBlock::Uniform {
            x: 3,
            y: 3,
            default: "0 1".to_string(),
        },
    ];
    assert!(matches!(
        parse_sparse_grid(4, 4, &blocks),
        Err(ExtractError::ShapeMismatch { .. })
    ));
}
