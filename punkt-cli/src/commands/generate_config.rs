//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use punkt_core::language::embedded_source;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new configuration
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Human-readable language name
    #[arg(short, long, value_name = "NAME", default_value = "Custom Language")]
    pub name: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating language configuration template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the punctuation classes for your language");
        println!("2. Validate your configuration:");
        println!("   punkt validate -c {}", self.output.display());
        println!("3. Train a model with it:");
        println!(
            "   punkt train -i corpus.txt -o model.json --language-config {}",
            self.output.display()
        );

        Ok(())
    }

    /// English configuration with this language's metadata
    fn generate_template(&self) -> Result<String> {
        let english = embedded_source("en").context("English configuration is not embedded")?;

        let mut template = format!(
            "# Language configuration for {}\n# Derived from the English defaults.\n",
            self.language_code
        );
        for line in english.lines().skip_while(|line| line.starts_with('#')) {
            let line = if line.starts_with("code = ") {
                format!("code = {:?}", self.language_code)
            } else if line.starts_with("name = ") {
                format!("name = {:?}", self.name)
            } else {
                line.to_string()
            };
            template.push_str(&line);
            template.push('\n');
        }
        Ok(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use punkt_core::LanguageConfig;
    use tempfile::TempDir;

    fn args(output: PathBuf) -> GenerateConfigArgs {
        GenerateConfigArgs {
            language_code: "fr".to_string(),
            name: "French".to_string(),
            output,
        }
    }

    #[test]
    fn test_template_is_valid_config() {
        let template = args(PathBuf::from("fr.toml")).generate_template().unwrap();
        assert!(template.starts_with("# Language configuration for fr"));

        let config = LanguageConfig::from_toml(&template).unwrap();
        assert_eq!(config.metadata.code, "fr");
        assert_eq!(config.metadata.name, "French");
        assert_eq!(config.punctuation, LanguageConfig::default().punctuation);
    }

    #[test]
    fn test_execute_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("fr.toml");

        args(output.clone()).execute().unwrap();
        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.contains("code = \"fr\""));
    }

    #[test]
    fn test_execute_unwritable_path() {
        let err = args(PathBuf::from("/nonexistent/dir/fr.toml"))
            .execute()
            .unwrap_err();
        assert!(err.to_string().contains("Failed to write"));
    }
}
