//! Transformation catalog and batch evaluation for casekit
//!
//! This crate wires the pure transforms of `casekit-core` into categories,
//! collects them in an immutable [`Registry`] and evaluates the whole catalog
//! against one input with the [`BatchTransformer`].
//!
//! # Example
//!
//! ```rust
//! use casekit_engine::{BatchTransformer, EngineConfig, TransformationType};
//!
//! let transformer = BatchTransformer::standard(EngineConfig::default());
//! let results = transformer.transform_all("fooBar_baz");
//!
//! assert_eq!(results.text(TransformationType::SnakeCase).as_deref(), Some("foo_bar_baz"));
//! assert_eq!(results.text(TransformationType::UpperCase).as_deref(), Some("FOOBAR_BAZ"));
//! ```

#![warn(missing_docs)]

pub mod batch;
pub mod category;
pub mod config;
pub mod definition;
pub mod error;
pub mod registry;

pub use batch::{BatchTransformer, TransformResults, FAILURE_HEADER};
pub use category::{CategoryId, Preservation, TransformationCategory};
pub use config::{EngineConfig, EngineConfigBuilder, FailurePolicy};
pub use definition::{TransformKind, TransformationDefinition};
pub use error::{EngineError, Result};
pub use registry::Registry;

// Re-export from core for convenience
pub use casekit_core::{detect_words_multi_line, MultiLineSegmentation, TransformationType};
