//! Markdown output formatter

use super::preview::code_fence;
use super::{OutputFormatter, ResultEntry, Section};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - one heading and fenced block per result
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    entry_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            entry_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn start_input(&mut self, source: &str) -> Result<()> {
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_entry(&mut self, entry: &ResultEntry<'_>) -> Result<()> {
        self.entry_count += 1;
        let content = entry.lines.join("\n");
        let fence = code_fence(&content);

        writeln!(self.writer, "### {}", entry.title)?;
        writeln!(self.writer)?;
        match entry.section {
            Section::All => writeln!(self.writer, "*{}*", entry.category)?,
            Section::Recent => writeln!(self.writer, "*{}, recent*", entry.category)?,
            Section::Pinned => writeln!(self.writer, "*{}, pinned*", entry.category)?,
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "{fence}")?;
        if !content.is_empty() {
            writeln!(self.writer, "{content}")?;
        }
        writeln!(self.writer, "{fence}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total results: {}*", self.entry_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
