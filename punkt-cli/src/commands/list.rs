//! List command implementation

use anyhow::Result;
use clap::ValueEnum;
use punkt_core::list_languages;

use super::ListCommands;
use crate::output::OutputFormat;

pub fn execute(subcommand: &ListCommands) -> Result<()> {
    match subcommand {
        ListCommands::Languages => {
            println!("Available languages:");
            for info in list_languages() {
                println!("  {:<4} {:<10} {}", info.code, info.alias, info.name);
            }
        }
        ListCommands::Formats => {
            println!("Available output formats:");
            for value in OutputFormat::value_variants()
                .iter()
                .filter_map(|format| format.to_possible_value())
            {
                let help = value.get_help().map(ToString::to_string).unwrap_or_default();
                println!("  {:<10} {}", value.get_name(), help);
            }
        }
    }
    Ok(())
}
