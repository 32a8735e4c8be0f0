//! Copy command implementation

use super::AppContext;
use crate::error::CliError;
use crate::input::InputArgs;
use anyhow::Result;
use clap::Args;
use std::io::{self, Write};

/// Arguments for the copy command
#[derive(Debug, Args)]
pub struct CopyArgs {
    /// Transformation name, e.g. snake-case
    #[arg(value_name = "TYPE")]
    pub transformation: String,

    #[command(flatten)]
    pub input: InputArgs,
}

impl CopyArgs {
    /// Execute the copy command
    pub fn execute(&self, ctx: &AppContext) -> Result<()> {
        let ty = ctx.catalog_type(&self.transformation)?;
        let input = self.input.read_single()?;
        if input.text.trim().is_empty() {
            log::info!("Nothing to copy from blank input");
            return Ok(());
        }

        let results = ctx.transformer.transform_all(&input.text);
        if results.is_failure(ty) {
            return Err(CliError::TransformationFailed(ctx.title(ty).to_string()).into());
        }
        let text = results
            .text(ty)
            .ok_or_else(|| CliError::TransformationFailed(ctx.title(ty).to_string()))?;

        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{text}")?;
        stdout.flush()?;

        let mut state = ctx.open_state()?;
        state.record_use(ty)?;
        log::info!("Recorded use of {}", ty);
        Ok(())
    }
}
