//! Word segmentation and case transforms for casekit
//!
//! This crate is the domain layer of the workspace. It has no I/O and no
//! shared mutable state: every operation is a pure function of its input,
//! except random case which draws from the thread-local generator.
//!
//! # Architecture
//!
//! - **segmenter**: detects word boundaries in separator-delimited,
//!   camelCase or whitespace-delimited text, per token or per line
//! - **transform**: word-array and whole-string case styles, including
//!   Chicago title case backed by an embedded word list
//! - **normalizer**: diacritic, special-character and whitespace cleanup
//! - **types**: the stable `TransformationType` identity
//!
//! # Example
//!
//! ```rust
//! use casekit_core::segmenter::detect_words;
//! use casekit_core::transform::words;
//!
//! let detection = detect_words("XMLHttpRequest");
//! assert_eq!(detection.words, vec!["XML", "Http", "Request"]);
//!
//! assert_eq!(words::to_snake_case(&detection.words), "xml_http_request");
//! ```

pub mod error;
pub mod lines;
pub mod normalizer;
pub mod segmenter;
pub mod transform;
pub mod types;

pub use error::{CoreError, Result};
pub use lines::{split_lines, to_lines};
pub use segmenter::{
    detect_words, detect_words_multi_line, LineSegmentation, MultiLineSegmentation,
    SeparatorStatistics, WordDetection,
};
pub use types::TransformationType;
