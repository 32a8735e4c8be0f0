//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.file.display());

        match CliConfig::from_file(&self.file) {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!("  Default format: {}", config.output.default_format);
                println!(
                    "  Preview: {} lines x {} characters",
                    config.output.preview_lines, config.output.preview_width
                );
                println!(
                    "  Recent items: {} ({:?})",
                    config.history.recent_items, config.history.order
                );
                if let Some(path) = &config.state.path {
                    println!("  State file: {}", path.display());
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }
}
