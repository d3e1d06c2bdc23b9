//! CLI command implementations

use anyhow::Result;
use clap::{Args, Subcommand};

pub mod explain;
pub mod generate_config;
pub mod inspect;
pub mod list;
pub mod segment;
pub mod train;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Learn a Punkt model from raw text files
    Train(train::TrainArgs),

    /// Split text files into sentences
    Segment(segment::SegmentArgs),

    /// Show what a trained model contains
    Inspect(inspect::InspectArgs),

    /// Explain the decision taken at every candidate sentence boundary
    Explain(explain::ExplainArgs),

    /// Generate a language configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Validate a language configuration file
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List built-in languages
    Languages,

    /// List available output formats
    Formats,
}

impl Commands {
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Train(args) => args.execute(),
            Commands::Segment(args) => args.execute(),
            Commands::Inspect(args) => args.execute(),
            Commands::Explain(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => list::execute(subcommand),
        }
    }
}

/// Verbosity options shared by the long-running commands
#[derive(Debug, Clone, Default, Args)]
pub struct LogArgs {
    /// Suppress progress output and logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl LogArgs {
    /// Initialize logging based on verbosity level
    ///
    /// `RUST_LOG` takes precedence over `-v`.
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when commands run in-process
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Commands,
    }

    #[test]
    fn test_parse_train() {
        let cli = TestCli::try_parse_from([
            "punkt", "train", "-i", "a.txt", "-i", "b/*.txt", "-o", "model.json", "-vv",
        ])
        .unwrap();
        match cli.command {
            Commands::Train(args) => {
                assert_eq!(args.input, vec!["a.txt", "b/*.txt"]);
                assert_eq!(args.log.verbose, 2);
                assert_eq!(args.prune, None);
            }
            other => panic!("expected train, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_segment_defaults() {
        let cli = TestCli::try_parse_from(["punkt", "segment", "-i", "a.txt"]).unwrap();
        match cli.command {
            Commands::Segment(args) => {
                assert!(args.model.is_none());
                assert!(args.format.is_none());
                assert!(!args.no_realign);
            }
            other => panic!("expected segment, got {other:?}"),
        }
    }

    #[test]
    fn test_language_code_requires_config() {
        let result = TestCli::try_parse_from([
            "punkt", "segment", "-i", "a.txt", "--language-code", "xx",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_list() {
        let cli = TestCli::try_parse_from(["punkt", "list", "formats"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::List {
                subcommand: ListCommands::Formats
            }
        ));
    }

    #[test]
    fn test_input_is_required() {
        assert!(TestCli::try_parse_from(["punkt", "train", "-o", "model.json"]).is_err());
    }
}
