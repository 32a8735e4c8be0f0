//! Engine error types
//!
//! Layered on top of the core errors. Transform failures are deliberately
//! absent: they are isolated and recorded per result, never returned.

use casekit_core::{CoreError, TransformationType};
use thiserror::Error;

/// Engine-level errors (application layer)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Core error
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Two definitions in one registry share a type
    #[error("transformation '{0}' is registered more than once")]
    DuplicateTransformation(TransformationType),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
