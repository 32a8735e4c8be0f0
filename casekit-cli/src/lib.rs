//! casekit CLI library
//!
//! This library provides the command-line interface for the casekit text
//! case transformation engine.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod state;

pub use commands::Cli;
pub use error::{CliError, CliResult};
