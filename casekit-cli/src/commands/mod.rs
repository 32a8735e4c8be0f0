//! CLI command implementations

use crate::config::CliConfig;
use crate::error::CliError;
use crate::state::StateStore;
use anyhow::Result;
use casekit_core::TransformationType;
use casekit_engine::{BatchTransformer, EngineConfig, Registry};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod copy;
pub mod generate_config;
pub mod history;
pub mod list;
pub mod pin;
pub mod split;
pub mod transform;
pub mod validate;

/// casekit - change the case of text: camelCase, snake_case, Title Case and more
#[derive(Debug, Parser)]
#[command(name = "casekit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file
    #[arg(short, long, global = true, value_name = "FILE", env = "CASEKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// State file holding pinned transformations and history
    #[arg(long, global = true, value_name = "FILE", env = "CASEKIT_STATE_FILE")]
    pub state_file: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Apply every transformation to the input and list the results
    Transform(transform::TransformArgs),

    /// Split identifiers into space-separated words
    Split(split::SplitArgs),

    /// Print the full output of one transformation and record its use
    Copy(copy::CopyArgs),

    /// Pin a transformation so it is listed first
    Pin(pin::PinArgs),

    /// Unpin a transformation
    Unpin(pin::PinArgs),

    /// List pinned transformations
    Pinned,

    /// Show or clear the usage history
    History(history::HistoryArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration file with every default spelled out
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List transformations in display order
    Transformations,

    /// List transformation categories
    Categories,
}

/// Shared state of one CLI invocation
pub struct AppContext {
    /// Loaded configuration
    pub config: CliConfig,
    /// Resolved state file location
    pub state_path: PathBuf,
    /// Transformer over the standard catalog
    pub transformer: BatchTransformer,
}

impl AppContext {
    /// Resolve the state location: flag, then config, then platform default
    pub fn new(config: CliConfig, state_file: Option<PathBuf>) -> Self {
        let state_path = state_file
            .or_else(|| config.state.path.clone())
            .unwrap_or_else(StateStore::default_path);
        log::debug!("State file: {}", state_path.display());

        Self {
            config,
            state_path,
            transformer: BatchTransformer::standard(EngineConfig::default()),
        }
    }

    /// Transformation catalog
    pub fn registry(&self) -> &Registry {
        self.transformer.registry()
    }

    /// Load the pinned list and history
    pub fn open_state(&self) -> Result<StateStore> {
        StateStore::open(&self.state_path)
    }

    /// Parse a transformation name and require it to be in the catalog.
    ///
    /// Accepts the kebab-case name in any letter case, with `_` or spaces in
    /// place of hyphens.
    pub fn catalog_type(&self, name: &str) -> Result<TransformationType> {
        let normalized = name.trim().replace(['_', ' '], "-");
        let ty = TransformationType::from_name(&normalized)
            .map_err(|_| CliError::UnknownTransformation(name.to_string()))?;

        if !self.registry().contains(ty) {
            return Err(CliError::NotInCatalog(ty.name().to_string()).into());
        }
        Ok(ty)
    }

    /// Display title of a catalog type
    pub fn title(&self, ty: TransformationType) -> &'static str {
        self.registry().get(ty).map_or(ty.name(), |d| d.title())
    }
}

impl Cli {
    /// Execute the selected command
    pub fn run(self) -> Result<()> {
        self.init_logging();

        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let ctx = AppContext::new(config, self.state_file);

        match self.command {
            Commands::Transform(args) => args.execute(&ctx),
            Commands::Split(args) => args.execute(&ctx),
            Commands::Copy(args) => args.execute(&ctx),
            Commands::Pin(args) => args.execute_pin(&ctx),
            Commands::Unpin(args) => args.execute_unpin(&ctx),
            Commands::Pinned => pin::list_pinned(&ctx),
            Commands::History(args) => args.execute(&ctx),
            Commands::List { subcommand } => list::execute(subcommand, &ctx),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn context() -> AppContext {
        AppContext::new(CliConfig::default(), Some(PathBuf::from("unused.json")))
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_transform_command() {
        let cli = Cli::try_parse_from([
            "casekit", "-vv", "transform", "fooBar", "-f", "json", "-t", "snake-case",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Transform(args) => {
                assert_eq!(args.input.text.as_deref(), Some("fooBar"));
                assert_eq!(args.types, vec!["snake-case"]);
            }
            other => panic!("expected transform, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_list_command() {
        let cli = Cli::try_parse_from(["casekit", "list", "categories"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::List {
                subcommand: ListCommands::Categories
            }
        ));
    }

    #[test]
    fn test_state_path_resolution() {
        let mut config = CliConfig::default();
        config.state.path = Some(PathBuf::from("from-config.json"));

        let ctx = AppContext::new(config.clone(), Some(PathBuf::from("from-flag.json")));
        assert_eq!(ctx.state_path, PathBuf::from("from-flag.json"));

        let ctx = AppContext::new(config, None);
        assert_eq!(ctx.state_path, PathBuf::from("from-config.json"));
    }

    #[test]
    fn test_catalog_type_names() {
        let ctx = context();
        assert_eq!(ctx.catalog_type("snake-case").unwrap(), TransformationType::SnakeCase);
        assert_eq!(ctx.catalog_type("Snake_Case").unwrap(), TransformationType::SnakeCase);
        assert_eq!(ctx.catalog_type("title case").unwrap(), TransformationType::TitleCase);

        let err = ctx.catalog_type("snek").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::UnknownTransformation(_))
        ));

        let err = ctx.catalog_type("as-is").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::NotInCatalog(_))
        ));
    }
}
