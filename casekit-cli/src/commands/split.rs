//! Split command implementation

use super::AppContext;
use crate::error::CliError;
use crate::input::InputArgs;
use crate::output::{preview::code_fence, OutputFormat};
use anyhow::Result;
use casekit_engine::{detect_words_multi_line, MultiLineSegmentation};
use clap::Args;
use std::io::{self, Write};

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format (default from configuration)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self, ctx: &AppContext) -> Result<()> {
        let input = self.input.read_single()?;
        if input.text.trim().is_empty() {
            return Ok(());
        }

        let format = match self.format {
            Some(format) => format,
            None => ctx.config.output.format()?,
        };

        let segmentation = detect_words_multi_line(&input.text);
        log::info!(
            "Split {} lines, dominant separator {:?}",
            segmentation.lines.len(),
            segmentation.dominant_separator
        );

        let rendered = render(&segmentation, format, ctx.config.output.pretty_json)?;
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{rendered}")?;
        Ok(())
    }
}

fn render(
    segmentation: &MultiLineSegmentation,
    format: OutputFormat,
    pretty_json: bool,
) -> Result<String> {
    if format == OutputFormat::Json {
        let json = if pretty_json {
            serde_json::to_string_pretty(segmentation)?
        } else {
            serde_json::to_string(segmentation)?
        };
        return Ok(json);
    }

    let text = segmentation.recompose().ok_or(CliError::NothingToSplit)?;
    Ok(match format {
        OutputFormat::Markdown => {
            let fence = code_fence(&text);
            format!("{fence}\n{text}\n{fence}")
        }
        _ => text,
    })
}
