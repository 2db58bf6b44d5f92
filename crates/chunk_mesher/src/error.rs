//! Error types for the chunk mesher.

use thiserror::Error;

/// Result type for mesher operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the mesher and its collaborators.
///
/// Meshing itself cannot fail; only reading input and writing output can.
#[derive(Error, Debug)]
pub enum Error {
    /// Writing the geometry stream failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Raw chunk data had the wrong size.
    #[error("chunk data must be {expected} bytes, got {actual}")]
    ChunkLength { expected: usize, actual: usize },

    /// Configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}
