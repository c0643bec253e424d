//! Error types for the cv-press library

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the cv-press library
#[derive(Error, Debug)]
pub enum Error {
    /// PDF serialization error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// IO error (prompt streams, output file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A prompt response could not be parsed as a number
    #[error("Invalid numeric input: {0:?}")]
    InvalidNumber(String),
}
