//! JSON output formatter

use super::{OutputFormatter, ResultEntry, Section};
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs results as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    source: Option<String>,
    results: Vec<ResultData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct ResultData {
    /// Input the result belongs to, when several were given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Listing section
    pub section: Section,
    /// Kebab-case transformation name
    #[serde(rename = "type")]
    pub name: &'static str,
    /// Persisted ordinal
    pub ordinal: u8,
    /// Display title
    pub title: &'static str,
    /// Category display name
    pub category: &'static str,
    /// Full output lines
    pub lines: Vec<String>,
    /// Whether the transform panicked
    pub failed: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            source: None,
            results: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn start_input(&mut self, source: &str) -> Result<()> {
        self.source = Some(source.to_string());
        Ok(())
    }

    fn format_entry(&mut self, entry: &ResultEntry<'_>) -> Result<()> {
        self.results.push(ResultData {
            source: self.source.clone(),
            section: entry.section,
            name: entry.ty.name(),
            ordinal: entry.ty.ordinal(),
            title: entry.title,
            category: entry.category,
            lines: entry.lines.to_vec(),
            failed: entry.failed,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.results)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.results)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
