//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to language configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub language_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        use punkt_core::{ConfigurableLanguageVars, LanguageVars};

        println!(
            "Validating language configuration: {}",
            self.language_config.display()
        );

        match ConfigurableLanguageVars::from_file(&self.language_config, None) {
            Ok(vars) => {
                let chars = |set: &[char]| set.iter().collect::<String>();
                println!("✓ Configuration is valid!");
                println!("  Language code: {}", vars.code());
                println!("  Language name: {}", vars.language_name());
                println!("  Sentence ends: {}", chars(vars.sentence_end_chars()));
                println!(
                    "  Internal punctuation: {}",
                    chars(vars.internal_punctuation())
                );
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
