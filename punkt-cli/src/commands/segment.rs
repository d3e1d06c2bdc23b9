//! Segment command implementation

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use punkt_core::{ClassifierConfig, SentenceTokenizer};

use super::LogArgs;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::language_source::LanguageArgs;
use crate::model;
use crate::output::OutputFormat;
use crate::progress::ProgressReporter;

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from the config file, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Trained model; without one, every sentence-end character that looks
    /// final ends a sentence
    #[arg(short, long, value_name = "FILE")]
    pub model: Option<PathBuf>,

    #[command(flatten)]
    pub language: LanguageArgs,

    /// Keep closing quotes and brackets after a break in the next sentence
    #[arg(long)]
    pub no_realign: bool,

    /// Configuration file with [output] defaults
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub log: LogArgs,
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        self.log.init_logging();
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::parse(&config.output.default_format).ok_or_else(|| {
                CliError::ConfigError(format!(
                    "unknown output format '{}'",
                    config.output.default_format
                ))
            })?,
        };

        let tokenizer = SentenceTokenizer::new(model::load_or_untrained(self.model.as_deref())?)
            .with_language(self.language.source().resolve()?)
            .with_config(ClassifierConfig {
                realign_boundaries: !self.no_realign,
            });

        let files = resolve_patterns(&self.input)?;
        // A bar on the terminal would interleave with sentences written to stdout
        let mut progress = ProgressReporter::new(self.log.quiet || self.output.is_none());
        progress.init_bytes(FileReader::total_size(&files)?);

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout().lock()),
        };
        let mut formatter = format.formatter(writer, config.output.pretty_json);

        let mut sentences = 0;
        for path in &files {
            let text = FileReader::read_text(path)?;
            formatter.begin_document(&path.display().to_string())?;
            for (start, end) in tokenizer.span_tokenize(&text) {
                formatter.format_sentence(&text[start..end], (start, end))?;
                sentences += 1;
            }
            progress.file_completed(&path.display().to_string(), text.len() as u64);
        }
        formatter.finish()?;
        progress.finish();

        log::info!("Wrote {sentences} sentences from {} file(s)", files.len());
        Ok(())
    }
}
