//! Output formatting module

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Start the sentences of the next input document
    fn begin_document(&mut self, _source: &str) -> Result<()> {
        Ok(())
    }

    /// Format a single sentence with its byte span in the document
    fn format_sentence(&mut self, sentence: &str, span: (usize, usize)) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one sentence per line
    Text,
    /// JSON array of documents with sentence byte spans
    Json,
    /// Markdown table of sentences and spans
    Markdown,
}

impl OutputFormat {
    /// Parse a format name as written in a configuration file
    pub fn parse(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }

    /// Build the formatter for this format
    pub fn formatter<'w>(
        self,
        writer: Box<dyn Write + 'w>,
        pretty_json: bool,
    ) -> Box<dyn OutputFormatter + 'w> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer).pretty(pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        }
    }
}
