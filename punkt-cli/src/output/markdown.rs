//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - a table of sentences and spans per document
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    in_table: bool,
    documents: usize,
    document_sentences: usize,
    total_sentences: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            in_table: false,
            documents: 0,
            document_sentences: 0,
            total_sentences: 0,
        }
    }

    fn open_table(&mut self) -> Result<()> {
        writeln!(self.writer, "| # | Span | Sentence |")?;
        writeln!(self.writer, "|---:|---|---|")?;
        self.in_table = true;
        Ok(())
    }
}

/// Fold whitespace and escape table delimiters
fn table_cell(sentence: &str) -> String {
    sentence
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('|', "\\|")
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn begin_document(&mut self, source: &str) -> Result<()> {
        if self.documents > 0 {
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        self.documents += 1;
        self.document_sentences = 0;
        self.in_table = false;
        Ok(())
    }

    fn format_sentence(&mut self, sentence: &str, (start, end): (usize, usize)) -> Result<()> {
        if !self.in_table {
            self.open_table()?;
        }
        self.document_sentences += 1;
        self.total_sentences += 1;
        writeln!(
            self.writer,
            "| {} | {start}..{end} | {} |",
            self.document_sentences,
            table_cell(sentence)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "*{} sentence(s) in {} document(s)*",
            self.total_sentences,
            self.documents.max(1)
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_per_document() {
        let mut buffer = Vec::new();
        let mut formatter = MarkdownFormatter::new(&mut buffer);
        formatter.begin_document("notes.txt").unwrap();
        formatter.format_sentence("First one.", (0, 10)).unwrap();
        formatter.format_sentence("Second\none.", (11, 22)).unwrap();
        formatter.finish().unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "## notes.txt\n\n\
             | # | Span | Sentence |\n\
             |---:|---|---|\n\
             | 1 | 0..10 | First one. |\n\
             | 2 | 11..22 | Second one. |\n\
             \n\
             *2 sentence(s) in 1 document(s)*\n"
        );
    }

    #[test]
    fn test_numbering_restarts_and_pipes_are_escaped() {
        let mut buffer = Vec::new();
        let mut formatter = MarkdownFormatter::new(&mut buffer);
        formatter.begin_document("a").unwrap();
        formatter.format_sentence("A.", (0, 2)).unwrap();
        formatter.begin_document("b").unwrap();
        formatter.format_sentence("x | y.", (0, 6)).unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("## b\n\n| # | Span | Sentence |\n"));
        assert!(output.contains("| 1 | 0..6 | x \\| y. |\n"));
        assert!(output.ends_with("*2 sentence(s) in 2 document(s)*\n"));
    }
}
