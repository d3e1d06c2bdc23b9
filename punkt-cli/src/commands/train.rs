//! Train command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use punkt_core::Trainer;

use super::LogArgs;
use crate::config::CliConfig;
use crate::input::{resolve_patterns, FileReader};
use crate::language_source::LanguageArgs;
use crate::model;
use crate::progress::ProgressReporter;

/// Arguments for the train command
#[derive(Debug, Args)]
pub struct TrainArgs {
    /// Training corpus files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Where to write the trained model (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    #[command(flatten)]
    pub language: LanguageArgs,

    /// Configuration file with [trainer] thresholds
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// After each file, drop counts seen fewer than N times
    #[arg(long, value_name = "N")]
    pub prune: Option<u64>,

    #[command(flatten)]
    pub log: LogArgs,
}

impl TrainArgs {
    /// Execute the train command
    pub fn execute(&self) -> Result<()> {
        self.log.init_logging();
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let lang = self.language.source().resolve()?;
        let files = resolve_patterns(&self.input)?;

        let mut progress = ProgressReporter::new(self.log.quiet);
        progress.init_bytes(FileReader::total_size(&files)?);

        let mut trainer = Trainer::new()
            .with_language(lang)
            .with_config(config.trainer);

        for path in &files {
            let text = FileReader::read_text(path)?;
            let stats = trainer.accumulate(&text);
            if let Some(warning) = stats.warning() {
                log::warn!("{}: {warning}", path.display());
            }
            if let Some(threshold) = self.prune {
                trainer.freq_threshold(threshold, threshold, threshold, threshold);
            }
            progress.file_completed(&path.display().to_string(), text.len() as u64);
        }
        progress.finish();

        let tokens = trainer.state().total_tokens();
        let params = trainer.finalize().clone();
        model::save(&params, &self.output)?;

        if !self.log.quiet {
            println!("Trained on {} file(s), {} tokens", files.len(), tokens);
            println!("  Abbreviations:     {}", params.abbreviation_count());
            println!("  Collocations:      {}", params.collocation_count());
            println!("  Sentence starters: {}", params.sentence_starter_count());
            println!("  Model written to {}", self.output.display());
        }

        Ok(())
    }
}
