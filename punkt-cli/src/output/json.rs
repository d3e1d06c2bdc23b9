//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - one entry per input document with its sentence spans
///
/// Everything is buffered until [`OutputFormatter::finish`] so the output is a
/// single valid JSON array.
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentData>,
}

/// Sentences found in one input document
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DocumentData {
    pub source: String,
    pub sentences: Vec<SentenceData>,
}

/// One sentence and its half-open byte span in the source document
#[derive(Debug, Serialize, Deserialize)]
pub struct SentenceData {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
            documents: Vec::new(),
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn begin_document(&mut self, source: &str) -> Result<()> {
        self.documents.push(DocumentData {
            source: source.to_string(),
            sentences: Vec::new(),
        });
        Ok(())
    }

    fn format_sentence(&mut self, sentence: &str, (start, end): (usize, usize)) -> Result<()> {
        if self.documents.is_empty() {
            self.documents.push(DocumentData::default());
        }
        if let Some(document) = self.documents.last_mut() {
            document.sentences.push(SentenceData {
                start,
                end,
                text: sentence.to_string(),
            });
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
