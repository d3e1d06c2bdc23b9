//! Explain command implementation

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use punkt_core::SentenceTokenizer;

use crate::input::FileReader;
use crate::language_source::LanguageArgs;
use crate::model;

/// Arguments for the explain command
#[derive(Debug, Args)]
pub struct ExplainArgs {
    /// Text file to explain
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Trained model (default: untrained)
    #[arg(short, long, value_name = "FILE")]
    pub model: Option<PathBuf>,

    #[command(flatten)]
    pub language: LanguageArgs,

    /// Only show candidates that were not classified as sentence breaks
    #[arg(long)]
    pub only_kept: bool,
}

impl ExplainArgs {
    /// Execute the explain command
    pub fn execute(&self) -> Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout)
    }

    fn write_to(&self, writer: &mut dyn Write) -> Result<()> {
        let tokenizer = SentenceTokenizer::new(model::load_or_untrained(self.model.as_deref())?)
            .with_language(self.language.source().resolve()?);
        let text = FileReader::read_text(&self.input)?;

        let mut decisions = tokenizer.debug_decisions(&text);
        if self.only_kept {
            decisions.retain(|decision| !decision.break_decision);
        }

        serde_json::to_writer_pretty(&mut *writer, &decisions)?;
        writeln!(writer)?;
        Ok(())
    }
}
