//! AnnoDesigner layout document model and grid-to-blocker encoding

/// Serializable layout document value types
pub mod document;
/// Row-major grid traversal into placement records
pub mod encoder;

pub use document::{Color, LayoutDocument, PlacementRecord};
pub use encoder::encode_layout;
