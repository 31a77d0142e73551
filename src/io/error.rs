//! Error types for the extraction pipeline

use std::fmt;
use std::path::PathBuf;

/// Main error type for all extraction operations
#[derive(Debug)]
pub enum ExtractError {
    /// Declared dimensions disagree between the input grid nodes
    DimensionMismatch {
        /// Buildable-area node dimensions as `(width, height)`
        area: (usize, usize),
        /// River node dimensions as `(width, height)`
        river: (usize, usize),
        /// Water node dimensions as `(width, height)`
        water: (usize, usize),
    },

    /// Grid algebra invoked on grids of differing dimensions
    ShapeMismatch {
        /// Dimensions of the primary operand as `(rows, cols)`
        left: (usize, usize),
        /// Dimensions (or required extent) of the other operand
        right: (usize, usize),
    },

    /// Sparse block sequence violates the begin/end region protocol
    InvalidRegionState {
        /// Position of the offending block in the sequence
        block_index: usize,
        /// Description of the protocol violation
        reason: &'static str,
    },

    /// Decoded cell supply does not cover the declared dimensions
    CellCountMismatch {
        /// Cell count implied by the declared dimensions
        expected: usize,
        /// Cell count the encoded data actually supplies
        actual: usize,
    },

    /// A serialized field holds an unparsable value
    InvalidToken {
        /// The offending token text
        value: String,
        /// What the field was expected to hold
        expected: &'static str,
    },

    /// A required node or field is absent from the world-state document
    MissingNode {
        /// Path of the missing node relative to the document root
        path: String,
    },

    /// The world-state document is not well-formed XML
    XmlParse {
        /// Underlying parser error
        source: roxmltree::Error,
    },

    /// Output path already present and overwrite not requested
    ///
    /// Recoverable at the CLI boundary: the user is informed and no write
    /// occurs.
    OutputExists {
        /// The existing output path
        path: PathBuf,
    },

    /// Failed to serialize the layout document
    Serialize {
        /// Path the document was being written to
        path: PathBuf,
        /// Underlying serialization error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { area, river, water } => {
                write!(
                    f,
                    "Grid dimensions disagree: AreaIDs {}x{}, RiverGrid {}x{}, Water {}x{}",
                    area.0, area.1, river.0, river.1, water.0, water.1
                )
            }
            Self::ShapeMismatch { left, right } => {
                write!(
                    f,
                    "Grid shapes differ: {}x{} vs {}x{}",
                    left.0, left.1, right.0, right.1
                )
            }
            Self::InvalidRegionState {
                block_index,
                reason,
            } => {
                write!(f, "Invalid sparse block {block_index}: {reason}")
            }
            Self::CellCountMismatch { expected, actual } => {
                write!(
                    f,
                    "Encoded data supplies {actual} cells where {expected} are declared"
                )
            }
            Self::InvalidToken { value, expected } => {
                write!(f, "Invalid token '{value}': expected {expected}")
            }
            Self::MissingNode { path } => {
                write!(f, "Missing node '{path}' in world-state document")
            }
            Self::XmlParse { source } => {
                write!(f, "Failed to parse world-state document: {source}")
            }
            Self::OutputExists { path } => {
                write!(
                    f,
                    "Output file '{}' already exists, specify -y to overwrite it",
                    path.display()
                )
            }
            Self::Serialize { path, source } => {
                write!(
                    f,
                    "Failed to serialize layout to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::XmlParse { source } => Some(source),
            Self::Serialize { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<roxmltree::Error> for ExtractError {
    fn from(err: roxmltree::Error) -> Self {
        Self::XmlParse { source: err }
    }
}

/// Convenience type alias for extraction results
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Create a file system error with path and operation context
pub fn fs_error(path: &std::path::Path, operation: &'static str, source: std::io::Error) -> ExtractError {
    ExtractError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source,
    }
}
