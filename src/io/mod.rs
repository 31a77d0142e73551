//! Input/output operations and error handling

/// Command-line surface and target dispatch
pub mod cli;
/// Schema constants and runtime defaults
pub mod configuration;
/// Error types for the extraction pipeline
pub mod error;
/// World-state document reading and grid node extraction
pub mod gamefile;
/// Terminal rendering of a grid
pub mod screen;
