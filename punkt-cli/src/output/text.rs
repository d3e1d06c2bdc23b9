//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one sentence per line
///
/// Line breaks inside a sentence are folded into spaces so that every
/// output line is exactly one sentence.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_sentence(&mut self, sentence: &str, _span: (usize, usize)) -> Result<()> {
        let mut words = sentence.split_whitespace();
        if let Some(first) = words.next() {
            write!(self.writer, "{first}")?;
            for word in words {
                write!(self.writer, " {word}")?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
