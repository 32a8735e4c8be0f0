//! Output formatting module

use anyhow::Result;
use casekit_core::TransformationType;
use serde::Serialize;

pub mod json;
pub mod markdown;
pub mod preview;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Title and preview per result
    Text,
    /// JSON array with full results and metadata
    Json,
    /// Markdown sections with fenced results
    Markdown,
}

/// Where a result is listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Recently used
    Recent,
    /// Pinned by the user
    Pinned,
    /// Full catalog
    All,
}

/// One listed result
#[derive(Debug, Clone)]
pub struct ResultEntry<'a> {
    /// Listing section
    pub section: Section,
    /// Transformation identity
    pub ty: TransformationType,
    /// Display title
    pub title: &'static str,
    /// Category display name
    pub category: &'static str,
    /// Full output lines
    pub lines: &'a [String],
    /// Whether the transform panicked
    pub failed: bool,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Begin the results of one named input
    fn start_input(&mut self, source: &str) -> Result<()>;

    /// Format and output a single result
    fn format_entry(&mut self, entry: &ResultEntry<'_>) -> Result<()>;

    /// Finalize output (e.g., write the JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Preview size for the text formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewLimits {
    /// Lines per result
    pub lines: usize,
    /// Characters per line
    pub width: usize,
}

/// Formatter for `format` writing to `writer`
pub fn create_formatter<'w, W>(
    format: OutputFormat,
    writer: W,
    limits: PreviewLimits,
    pretty_json: bool,
) -> Box<dyn OutputFormatter + 'w>
where
    W: std::io::Write + Send + Sync + 'w,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, limits)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
