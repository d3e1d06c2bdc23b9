//! Public contract for language variables
//!
//! A [`LanguageVars`] implementation supplies the character classes and the
//! multi-character punctuation pattern of one language. Word tokenization,
//! period-context matching and boundary realignment are provided on top of
//! those primitives so every language shares the same scanning rules.

use std::fmt;

use super::scan::{PeriodContexts, Words};

/// A candidate sentence end found in raw text
///
/// All offsets are byte offsets into the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodContext {
    /// Start of the non-whitespace run that carries the sentence-end character
    pub start: usize,
    /// Offset just past the sentence-end character
    pub end: usize,
    /// Offset just past the material that follows (punctuation or next token)
    pub after_end: usize,
    /// Start of the next token when whitespace follows the candidate
    pub next_token_start: Option<usize>,
}

impl PeriodContext {
    /// The candidate plus its following context, as classified by the tokenizer
    pub fn context<'t>(&self, text: &'t str) -> &'t str {
        &text[self.start..self.after_end]
    }
}

/// Language-specific character classes for Punkt
///
/// Implementations are resolved at construction time (see
/// [`get_language`](super::get_language)) and shared behind an `Arc`.
pub trait LanguageVars: Send + Sync + fmt::Debug {
    /// Language code, e.g. `"en"`
    fn code(&self) -> &str;

    /// Characters that can end a sentence (`.`, `?`, `!` for English)
    fn is_sent_end_char(&self, ch: char) -> bool;

    /// Sentence-internal punctuation (`,`, `:`, `;` for English)
    fn is_internal_punctuation(&self, ch: char) -> bool;

    /// Characters that terminate a word and stand as tokens of their own
    fn is_non_word_char(&self, ch: char) -> bool;

    /// Whether a multi-character word token may begin with `ch`
    fn can_start_word(&self, ch: char) -> bool;

    /// Closing quotes/brackets that belong to the sentence before them
    fn is_boundary_closer(&self, ch: char) -> bool;

    /// Byte length of the multi-character punctuation starting at `text[0]`
    fn multi_char_punct_at(&self, text: &str) -> Option<usize>;

    /// Whether `token` is a bare punctuation mark (sentence-end or internal)
    fn is_punctuation_token(&self, token: &str) -> bool {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => self.is_sent_end_char(ch) || self.is_internal_punctuation(ch),
            _ => false,
        }
    }

    /// Split text into word tokens, keeping trailing periods attached and
    /// multi-character punctuation together
    fn word_tokenize<'t>(&self, text: &'t str) -> Vec<&'t str> {
        Words::new(self, text).map(|(_, word)| word).collect()
    }

    /// Every sentence-end character followed by punctuation or by
    /// whitespace and another token
    fn period_context_matches(&self, text: &str) -> Vec<PeriodContext> {
        PeriodContexts::new(self, text).collect()
    }

    /// Length of the closing material at the start of `text` that should be
    /// reattached to the previous sentence, and the length consumed
    /// including trailing whitespace
    fn boundary_realignment(&self, text: &str) -> Option<(usize, usize)> {
        super::scan::realignment(self, text)
    }
}
