//! Word tokenization into annotated tokens
//!
//! Text is processed line by line: the first token of every line is marked
//! `linestart`, and the first token after one or more blank lines is marked
//! `parastart`.

use crate::language::{scan::Words, LanguageVars};
use crate::token::Token;

/// Lazy, restartable stream of [`Token`]s over a text
///
/// Cloning the stream restarts from the clone's position.
#[derive(Clone)]
pub struct TokenStream<'l, 't> {
    lang: &'l dyn LanguageVars,
    text: &'t str,
    /// Start of the next unread line, past the end once exhausted
    next_line: usize,
    words: Option<Words<'l, 't, dyn LanguageVars + 'l>>,
    line_offset: usize,
    first_in_line: bool,
    parastart: bool,
}

impl<'l, 't> TokenStream<'l, 't> {
    pub fn new(lang: &'l dyn LanguageVars, text: &'t str) -> Self {
        Self {
            lang,
            text,
            next_line: 0,
            words: None,
            line_offset: 0,
            first_in_line: false,
            parastart: false,
        }
    }

    /// Advance to the next line that has content; false at end of text
    fn advance_line(&mut self) -> bool {
        while self.next_line <= self.text.len() {
            let start = self.next_line;
            let end = self.text[start..]
                .find('\n')
                .map_or(self.text.len(), |i| start + i);
            self.next_line = end + 1;

            let line = &self.text[start..end];
            if line.trim().is_empty() {
                self.parastart = true;
                continue;
            }

            self.words = Some(Words::new(self.lang, line));
            self.line_offset = start;
            self.first_in_line = true;
            return true;
        }
        false
    }
}

impl<'t> Iterator for TokenStream<'_, 't> {
    type Item = Token<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(words) = self.words.as_mut() {
                if let Some((offset, word)) = words.next() {
                    let mut token = Token::new(word, self.line_offset + offset);
                    if self.first_in_line {
                        token = token.with_linestart(true).with_parastart(self.parastart);
                        self.first_in_line = false;
                        self.parastart = false;
                    }
                    return Some(token);
                }
                self.words = None;
            }

            if !self.advance_line() {
                return None;
            }
        }
    }
}

/// Tokens for pre-tokenized words
///
/// Offsets are positions in the words joined by single spaces; no line or
/// paragraph information is available.
pub fn tokens_from_words<'t, I>(words: I) -> impl Iterator<Item = Token<'t>>
where
    I: IntoIterator<Item = &'t str>,
{
    words
        .into_iter()
        .filter(|word| !word.is_empty())
        .scan(0usize, |offset, word| {
            let token = Token::new(word, *offset);
            *offset += word.len() + 1;
            Some(token)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::english;

    #[test]
    fn test_line_and_paragraph_flags() {
        let lang = english();
        let text = "First line here.\nSecond line.\n\n  \nNew paragraph.";
        let tokens: Vec<_> = TokenStream::new(&*lang, text).collect();

        let flagged: Vec<_> = tokens
            .iter()
            .map(|t| (t.text(), t.linestart(), t.parastart()))
            .collect();
        assert_eq!(
            flagged,
            vec![
                ("First", true, false),
                ("line", false, false),
                ("here.", false, false),
                ("Second", true, false),
                ("line.", false, false),
                ("New", true, true),
                ("paragraph.", false, false),
            ]
        );
    }

    #[test]
    fn test_offsets_reconstruct_text() {
        let lang = english();
        let text = "Mr. Brown\r\n\tsaid \"hi\"...\n\nThen left.";
        for token in TokenStream::new(&*lang, text) {
            assert_eq!(&text[token.offset()..token.end()], token.text());
        }
    }

    #[test]
    fn test_leading_blank_line_starts_paragraph() {
        let lang = english();
        let first = TokenStream::new(&*lang, "\nHello").next().unwrap();
        assert!(first.parastart());
        let first = TokenStream::new(&*lang, "Hello").next().unwrap();
        assert!(!first.parastart());
    }

    #[test]
    fn test_empty_and_blank_text() {
        let lang = english();
        assert_eq!(TokenStream::new(&*lang, "").count(), 0);
        assert_eq!(TokenStream::new(&*lang, " \n\n \t").count(), 0);
    }

    #[test]
    fn test_stream_is_restartable() {
        let lang = english();
        let stream = TokenStream::new(&*lang, "One. Two. Three.");
        let first: Vec<_> = stream.clone().map(|t| t.text()).collect();
        let second: Vec<_> = stream.map(|t| t.text()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_tokens_from_words() {
        let tokens: Vec<_> = tokens_from_words(["Dr.", "", "Smith"]).collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].offset(), 4);
        assert!(!tokens[0].linestart());
    }
}
