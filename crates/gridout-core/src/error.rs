//! Error types for gridout-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gridout-core
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid column letter sequence
    #[error("Invalid column letters: {0}")]
    InvalidColumn(String),
}
