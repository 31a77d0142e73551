//! Decoding strategies for the serialized grid encodings
//!
//! Three independent strategies produce boolean grids from the raw node text
//! of a world-state document:
//! - bit-packed byte sequences (`bits` fields)
//! - paired value token lists (`val` fields)
//! - the sparse region-block encoding of the buildable-area node
//!
//! All strategies normalize the game's bottom-to-top row order so downstream
//! algebra and output use a single top-to-bottom orientation.

/// Bit-packed byte sequence decoding
pub mod bits;
/// Sparse region-block decoding of the buildable-area grid
pub mod sparse;
/// Paired value token decoding and shared row normalization
pub mod values;

pub use bits::parse_byte_grid;
pub use sparse::{SparseBlock, parse_sparse_grid};
pub use values::parse_double_value_grid;
