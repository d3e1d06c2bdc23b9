//! Command-line entry point for `punkt`

use clap::Parser;
use punkt_cli::commands::Commands;

/// Unsupervised sentence boundary detection with the Punkt algorithm
#[derive(Debug, Parser)]
#[command(name = "punkt", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    Cli::parse().command.execute()
}
