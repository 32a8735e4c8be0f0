//! History command implementation

use super::AppContext;
use anyhow::Result;
use clap::Args;

/// Arguments for the history command
#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Forget all recorded uses
    #[arg(long)]
    pub clear: bool,
}

impl HistoryArgs {
    /// Execute the history command
    pub fn execute(&self, ctx: &AppContext) -> Result<()> {
        let mut state = ctx.open_state()?;

        if self.clear {
            state.clear_history()?;
            println!("History cleared");
            return Ok(());
        }

        if state.history().is_empty() {
            println!("No transformations used yet");
            return Ok(());
        }

        for (index, &ty) in state.history().iter().enumerate() {
            println!("{:>3}. {:<28} {}", index + 1, ty.name(), ctx.title(ty));
        }
        Ok(())
    }
}
