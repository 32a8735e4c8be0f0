//! Plain text output formatter

use super::preview::preview;
use super::{OutputFormatter, PreviewLimits, ResultEntry, Section};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - title line followed by an indented preview
pub struct TextFormatter<W: Write> {
    writer: W,
    limits: PreviewLimits,
    inputs: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, limits: PreviewLimits) -> Self {
        Self {
            writer,
            limits,
            inputs: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn start_input(&mut self, source: &str) -> Result<()> {
        if self.inputs > 0 {
            writeln!(self.writer)?;
        }
        self.inputs += 1;
        writeln!(self.writer, "==> {source} <==")?;
        Ok(())
    }

    fn format_entry(&mut self, entry: &ResultEntry<'_>) -> Result<()> {
        let marker = match (entry.failed, entry.section) {
            (true, _) => " (failed)",
            (false, Section::Recent) => " (recent)",
            (false, Section::Pinned) => " (pinned)",
            (false, Section::All) => "",
        };
        writeln!(self.writer, "{}{}", entry.title, marker)?;

        for line in preview(entry.lines, self.limits.lines, self.limits.width) {
            writeln!(self.writer, "    {line}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
