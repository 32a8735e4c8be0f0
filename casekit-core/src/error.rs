//! Core error types

use thiserror::Error;

/// Errors raised by the core crate.
///
/// Text-shaped input never produces an error; every edge case of the
/// segmenter and the transforms is a defined behavior. These variants cover
/// identifier lookups and embedded data only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No transformation type carries the given name
    #[error("unknown transformation: {0}")]
    UnknownTransformation(String),

    /// No transformation type carries the given ordinal
    #[error("invalid transformation ordinal: {0}")]
    InvalidOrdinal(u8),

    /// Embedded word list could not be parsed
    #[error("word list error: {0}")]
    WordList(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
