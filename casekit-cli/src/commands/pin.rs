//! Pin, unpin and pinned commands

use super::AppContext;
use anyhow::Result;
use clap::Args;

/// Arguments for the pin and unpin commands
#[derive(Debug, Args)]
pub struct PinArgs {
    /// Transformation name, e.g. snake-case
    #[arg(value_name = "TYPE")]
    pub transformation: String,
}

impl PinArgs {
    /// Pin the transformation
    pub fn execute_pin(&self, ctx: &AppContext) -> Result<()> {
        let ty = ctx.catalog_type(&self.transformation)?;
        let mut state = ctx.open_state()?;

        if state.pin(ty)? {
            println!("Pinned {}", ctx.title(ty));
        } else {
            println!("{} is already pinned", ctx.title(ty));
        }
        Ok(())
    }

    /// Unpin the transformation
    pub fn execute_unpin(&self, ctx: &AppContext) -> Result<()> {
        let ty = ctx.catalog_type(&self.transformation)?;
        let mut state = ctx.open_state()?;

        if state.unpin(ty)? {
            println!("Unpinned {}", ctx.title(ty));
        } else {
            println!("{} is not pinned", ctx.title(ty));
        }
        Ok(())
    }
}

/// Print pinned transformations in pin order
pub fn list_pinned(ctx: &AppContext) -> Result<()> {
    let state = ctx.open_state()?;
    if state.pinned().is_empty() {
        println!("No pinned transformations");
        return Ok(());
    }

    for &ty in state.pinned() {
        println!("{:<28} {}", ty.name(), ctx.title(ty));
    }
    Ok(())
}
