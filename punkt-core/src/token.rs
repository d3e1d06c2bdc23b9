//! Annotated tokens
//!
//! A [`Token`] borrows its text from the input and carries the derived
//! type plus the classification flags written by the annotation passes.

use crate::ortho::LetterCase;

/// Type shared by every numeric token
pub const NUMBER_TYPE: &str = "##number##";

/// A word token with its Punkt annotations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'t> {
    text: &'t str,
    offset: usize,
    typ: String,
    period_final: bool,
    parastart: bool,
    linestart: bool,

    sentbreak: bool,
    abbr: bool,
    ellipsis: bool,
}

impl<'t> Token<'t> {
    /// Create an unannotated token; `offset` is the byte offset of `text`
    /// in the source
    pub fn new(text: &'t str, offset: usize) -> Self {
        Self {
            text,
            offset,
            typ: token_type(text),
            period_final: text.ends_with('.'),
            parastart: false,
            linestart: false,
            sentbreak: false,
            abbr: false,
            ellipsis: false,
        }
    }

    pub fn with_parastart(mut self, parastart: bool) -> Self {
        self.parastart = parastart;
        self
    }

    pub fn with_linestart(mut self, linestart: bool) -> Self {
        self.linestart = linestart;
        self
    }

    pub fn text(&self) -> &'t str {
        self.text
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Byte offset just past the token
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    /// Lowercased text with numbers collapsed to [`NUMBER_TYPE`]
    pub fn typ(&self) -> &str {
        &self.typ
    }

    /// The type with any final period removed
    pub fn type_no_period(&self) -> &str {
        strip_final_period(&self.typ)
    }

    /// The type with its final period removed only if that period ends a
    /// sentence
    pub fn type_no_sentperiod(&self) -> &str {
        if self.sentbreak {
            self.type_no_period()
        } else {
            &self.typ
        }
    }

    pub fn period_final(&self) -> bool {
        self.period_final
    }

    /// First token after a blank line
    pub fn parastart(&self) -> bool {
        self.parastart
    }

    /// First token on its line
    pub fn linestart(&self) -> bool {
        self.linestart
    }

    pub fn sentbreak(&self) -> bool {
        self.sentbreak
    }

    pub fn abbr(&self) -> bool {
        self.abbr
    }

    pub fn ellipsis(&self) -> bool {
        self.ellipsis
    }

    /// Two or more periods and nothing else
    pub fn is_ellipsis(&self) -> bool {
        self.text.len() >= 2 && self.text.bytes().all(|b| b == b'.')
    }

    pub fn is_number(&self) -> bool {
        self.typ.starts_with(NUMBER_TYPE)
    }

    /// A single letter followed by a period, like `J.`
    pub fn is_initial(&self) -> bool {
        let mut chars = self.text.chars();
        matches!(
            (chars.next(), chars.next(), chars.next()),
            (Some(letter), Some('.'), None) if is_letter(letter)
        )
    }

    /// Letters only
    pub fn is_alpha(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(is_letter)
    }

    /// The type contains at least one letter
    pub fn is_non_punct(&self) -> bool {
        self.typ.chars().any(is_letter)
    }

    pub fn first_case(&self) -> LetterCase {
        LetterCase::of(self.text)
    }

    pub fn first_upper(&self) -> bool {
        self.first_case() == LetterCase::Upper
    }

    pub fn first_lower(&self) -> bool {
        self.first_case() == LetterCase::Lower
    }

    pub(crate) fn set_sentbreak(&mut self, sentbreak: bool) {
        self.sentbreak = sentbreak;
    }

    pub(crate) fn set_ellipsis(&mut self) {
        self.ellipsis = true;
    }

    /// Reclassify as an abbreviation; an abbreviation never ends a sentence
    /// unless a later rule says so
    pub(crate) fn mark_abbreviation(&mut self) {
        self.abbr = true;
        self.sentbreak = false;
    }
}

/// Letters in the Unicode sense, plus `_` as in a regex word character
/// that is not a digit
#[inline]
pub(crate) fn is_letter(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

pub(crate) fn strip_final_period(typ: &str) -> &str {
    match typ.strip_suffix('.') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => typ,
    }
}

/// Lowercase the token and collapse numeric literals such as `-1,000.5`
/// or `3.` to [`NUMBER_TYPE`]
pub fn token_type(text: &str) -> String {
    let lower = text.to_lowercase();
    if is_numeric_literal(&lower) {
        NUMBER_TYPE.to_string()
    } else {
        lower
    }
}

fn is_numeric_literal(text: &str) -> bool {
    let rest = text.strip_prefix('-').unwrap_or(text);
    let rest = rest
        .strip_prefix('.')
        .or_else(|| rest.strip_prefix(','))
        .unwrap_or(rest);

    let mut chars = rest.chars();
    match chars.next() {
        Some(ch) if ch.is_numeric() => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_numeric() || matches!(ch, ',' | '.' | '-'))
}
