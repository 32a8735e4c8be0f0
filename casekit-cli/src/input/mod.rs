//! Input handling module
//!
//! Text comes from a positional argument, from files matched by `--input`
//! patterns, or from standard input when neither is given.

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use crate::error::CliError;
use anyhow::Result;
use clap::Args;

/// Name used for text given on the command line
pub const ARGUMENT_SOURCE: &str = "<argument>";

/// Name used for standard input
pub const STDIN_SOURCE: &str = "<stdin>";

/// Input selection shared by the commands that read text
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Text to transform (reads standard input when omitted)
    #[arg(value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,
}

/// Text of one input and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedInput {
    /// File path, or a placeholder for argument and stdin
    pub source: String,
    /// Full text
    pub text: String,
}

impl InputArgs {
    /// Collect every selected input
    pub fn read(&self) -> Result<Vec<NamedInput>> {
        if let Some(text) = &self.text {
            return Ok(vec![NamedInput {
                source: ARGUMENT_SOURCE.to_string(),
                text: text.clone(),
            }]);
        }

        if self.input.is_empty() {
            log::debug!("Reading text from standard input");
            return Ok(vec![NamedInput {
                source: STDIN_SOURCE.to_string(),
                text: FileReader::read_all(std::io::stdin().lock())?,
            }]);
        }

        resolve_patterns(&self.input)?
            .into_iter()
            .map(|path| -> Result<NamedInput> {
                log::info!("Reading {}", path.display());
                Ok(NamedInput {
                    text: FileReader::read_text(&path)?,
                    source: path.display().to_string(),
                })
            })
            .collect()
    }

    /// The only selected input
    pub fn read_single(&self) -> Result<NamedInput> {
        let mut inputs = self.read()?;
        if inputs.len() != 1 {
            return Err(CliError::MultipleInputs(inputs.len()).into());
        }
        Ok(inputs.remove(0))
    }
}
