//! Island terrain extraction from Anno 1800 world-state files
//!
//! The system decodes the bit-packed and run-length grid encodings found in a
//! serialized game session, derives a classified boundary outline of buildable
//! versus harbour terrain, and emits an AnnoDesigner layout of blocker tiles.

#![deny(unsafe_code)]

/// Composition of decoded terrain grids into land/harbour/coastline classes
pub mod classify;
/// Decoding strategies for the serialized grid encodings
pub mod decode;
/// Classified 2D grid container and its set algebra
pub mod grid;
/// Input/output operations and error handling
pub mod io;
/// AnnoDesigner layout document model and grid-to-blocker encoding
pub mod layout;

pub use io::error::{ExtractError, Result};
