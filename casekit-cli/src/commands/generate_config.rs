//! Generate config command implementation

use crate::config::{default_config_path, CliConfig};
use anyhow::{bail, Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (prints to standard output when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = template()?;

        let Some(path) = &self.output else {
            print!("{template}");
            return Ok(());
        };

        if path.exists() && !self.force {
            bail!(
                "{} already exists (use --force to overwrite)",
                path.display()
            );
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }
        fs::write(path, template)
            .with_context(|| format!("Failed to write to {}", path.display()))?;

        println!("✓ Configuration written to {}", path.display());
        println!();
        println!("Next steps:");
        println!("1. Edit the values you want to change");
        println!("2. Validate your configuration:");
        println!("   casekit validate {}", path.display());
        println!("3. Use it:");
        match default_config_path() {
            Some(default) if default == *path => {
                println!("   It is picked up automatically from this location")
            }
            _ => println!("   casekit --config {} transform <TEXT>", path.display()),
        }

        Ok(())
    }
}

fn template() -> Result<String> {
    let body = CliConfig::default().to_toml()?;
    Ok(format!(
        "# casekit configuration\n\
         #\n\
         # [output] default_format: text, json or markdown\n\
         # [history] order: recent-first or pinned-first\n\
         # [state] path: overrides the state file location\n\
         \n{body}"
    ))
}
