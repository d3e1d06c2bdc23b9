//! Scanners shared by every language: word tokens, period contexts and
//! boundary realignment
//!
//! The scanners only consult the character classes of a [`LanguageVars`]
//! implementation, so they work unchanged for custom languages.

use super::interface::{LanguageVars, PeriodContext};

#[inline]
fn char_at(text: &str, pos: usize) -> Option<char> {
    text[pos..].chars().next()
}

fn skip_whitespace(text: &str, mut pos: usize) -> usize {
    while let Some(ch) = char_at(text, pos) {
        if !ch.is_whitespace() {
            break;
        }
        pos += ch.len_utf8();
    }
    pos
}

fn skip_non_whitespace(text: &str, mut pos: usize) -> usize {
    while let Some(ch) = char_at(text, pos) {
        if ch.is_whitespace() {
            break;
        }
        pos += ch.len_utf8();
    }
    pos
}

/// Lazy word tokenizer yielding `(offset, word)` pairs
///
/// At each position the scanner tries, in order: multi-character
/// punctuation, a word (which ends at whitespace, a non-word character,
/// multi-character punctuation, or a comma that is itself followed by one of
/// those), and finally any single non-whitespace character.
pub struct Words<'l, 't, L: ?Sized> {
    lang: &'l L,
    text: &'t str,
    pos: usize,
}

impl<'l, 't, L: LanguageVars + ?Sized> Words<'l, 't, L> {
    pub fn new(lang: &'l L, text: &'t str) -> Self {
        Self { lang, text, pos: 0 }
    }

    fn multi_char_at(&self, pos: usize) -> Option<usize> {
        if pos >= self.text.len() {
            return None;
        }
        self.lang
            .multi_char_punct_at(&self.text[pos..])
            .filter(|&len| len > 0)
    }

    fn comma_ends_word(&self, pos: usize) -> bool {
        match char_at(self.text, pos) {
            None => true,
            Some(ch) => {
                ch.is_whitespace()
                    || self.lang.is_non_word_char(ch)
                    || self.multi_char_at(pos).is_some()
            }
        }
    }

    fn word_ends_at(&self, pos: usize) -> bool {
        match char_at(self.text, pos) {
            None => true,
            Some(ch) => {
                ch.is_whitespace()
                    || self.lang.is_non_word_char(ch)
                    || self.multi_char_at(pos).is_some()
                    || (ch == ',' && self.comma_ends_word(pos + 1))
            }
        }
    }
}

impl<L: ?Sized> Clone for Words<'_, '_, L> {
    fn clone(&self) -> Self {
        Self {
            lang: self.lang,
            text: self.text,
            pos: self.pos,
        }
    }
}

impl<'t, L: LanguageVars + ?Sized> Iterator for Words<'_, 't, L> {
    type Item = (usize, &'t str);

    fn next(&mut self) -> Option<Self::Item> {
        let start = skip_whitespace(self.text, self.pos);
        let first = char_at(self.text, start)?;

        let end = if let Some(len) = self.multi_char_at(start) {
            start + len
        } else if self.lang.can_start_word(first) {
            let mut end = start + first.len_utf8();
            while !self.word_ends_at(end) {
                // word_ends_at returned false, so a character exists here
                end += char_at(self.text, end).map_or(1, char::len_utf8);
            }
            end
        } else {
            start + first.len_utf8()
        };

        self.pos = end;
        Some((start, &self.text[start..end]))
    }
}

/// Lazy scanner over candidate sentence ends
///
/// A candidate is the last sentence-end character of a whitespace-delimited
/// run that is followed either by a non-word character or by whitespace
/// and another token. Scanning resumes right after the sentence-end
/// character, so closing punctuation can carry further candidates.
pub struct PeriodContexts<'a, L: ?Sized> {
    lang: &'a L,
    text: &'a str,
    pos: usize,
}

impl<'a, L: LanguageVars + ?Sized> PeriodContexts<'a, L> {
    pub fn new(lang: &'a L, text: &'a str) -> Self {
        Self { lang, text, pos: 0 }
    }

    fn follow(&self, start: usize, end: usize) -> Option<PeriodContext> {
        let next = char_at(self.text, end)?;

        if self.lang.is_non_word_char(next) {
            return Some(PeriodContext {
                start,
                end,
                after_end: end + next.len_utf8(),
                next_token_start: None,
            });
        }

        if next.is_whitespace() {
            let token_start = skip_whitespace(self.text, end);
            if token_start < self.text.len() {
                return Some(PeriodContext {
                    start,
                    end,
                    after_end: skip_non_whitespace(self.text, token_start),
                    next_token_start: Some(token_start),
                });
            }
        }

        None
    }
}

impl<L: ?Sized> Clone for PeriodContexts<'_, L> {
    fn clone(&self) -> Self {
        Self {
            lang: self.lang,
            text: self.text,
            pos: self.pos,
        }
    }
}

impl<L: LanguageVars + ?Sized> Iterator for PeriodContexts<'_, L> {
    type Item = PeriodContext;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let run_start = skip_whitespace(self.text, self.pos);
            if run_start >= self.text.len() {
                self.pos = run_start;
                return None;
            }
            let run_end = skip_non_whitespace(self.text, run_start);

            // Prefer the rightmost candidate in the run
            let found = self.text[run_start..run_end]
                .char_indices()
                .rev()
                .filter(|&(_, ch)| self.lang.is_sent_end_char(ch))
                .find_map(|(i, ch)| self.follow(run_start, run_start + i + ch.len_utf8()));

            match found {
                Some(context) => {
                    self.pos = context.end;
                    return Some(context);
                }
                None => self.pos = run_end,
            }
        }
    }
}

/// Closing quotes/brackets at the start of `text` that belong to the
/// previous sentence
///
/// Returns `(closers_len, consumed_len)`: the closers must be followed by
/// whitespace (consumed), by `--`, or by the end of the text.
pub fn realignment<L: LanguageVars + ?Sized>(lang: &L, text: &str) -> Option<(usize, usize)> {
    let mut pos = 0;
    loop {
        let ch = char_at(text, pos)?;
        if !lang.is_boundary_closer(ch) {
            return None;
        }
        pos += ch.len_utf8();

        match char_at(text, pos) {
            None => return Some((pos, pos)),
            Some(next) if next.is_whitespace() => {
                return Some((pos, skip_whitespace(text, pos)));
            }
            Some(_) if text[pos..].starts_with("--") => return Some((pos, pos)),
            Some(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::language::english;

    fn words(text: &str) -> Vec<&str> {
        english().word_tokenize(text)
    }

    #[test]
    fn test_trailing_period_stays_attached() {
        assert_eq!(
            words("Dr. Smith went to Washington."),
            vec!["Dr.", "Smith", "went", "to", "Washington."]
        );
    }

    #[test]
    fn test_multi_char_punctuation_is_one_token() {
        assert_eq!(words("Wait... what"), vec!["Wait", "...", "what"]);
        assert_eq!(words("so--then"), vec!["so", "--", "then"]);
        assert_eq!(words("end. . . more"), vec!["end", ". . .", "more"]);
    }

    #[test]
    fn test_non_word_characters_split() {
        assert_eq!(words("(Sent1.) Sent2."), vec!["(", "Sent1.", ")", "Sent2."]);
        assert_eq!(words("\"Hi!\" she said"), vec!["\"", "Hi", "!", "\"", "she", "said"]);
        assert_eq!(words("don't"), vec!["don", "'t"]);
    }

    #[test]
    fn test_comma_handling() {
        assert_eq!(words("one, two"), vec!["one", ",", "two"]);
        assert_eq!(words("1,000 dollars"), vec!["1,000", "dollars"]);
        assert_eq!(words("end,"), vec!["end", ","]);
    }

    #[test]
    fn test_offsets_point_into_text() {
        let text = "  Héllo wörld.  Next";
        let lang = english();
        for (offset, word) in super::Words::new(&*lang, text) {
            assert_eq!(&text[offset..offset + word.len()], word);
        }
    }

    #[test]
    fn test_period_context_with_following_token() {
        let text = "Hello world. Goodbye world!";
        let contexts = english().period_context_matches(text);
        assert_eq!(contexts.len(), 1);
        let ctx = contexts[0];
        assert_eq!(ctx.context(text), "world. Goodbye");
        assert_eq!(ctx.end, 12);
        assert_eq!(ctx.next_token_start, Some(13));
    }

    #[test]
    fn test_period_context_with_following_punctuation() {
        let text = "(Sent1.) Sent2.";
        let contexts = english().period_context_matches(text);
        assert_eq!(contexts.len(), 1);
        assert_eq!(contexts[0].context(text), "(Sent1.)");
        assert_eq!(contexts[0].next_token_start, None);
    }

    #[test]
    fn test_period_context_prefers_rightmost_candidate() {
        let text = "What?! Really";
        let contexts = english().period_context_matches(text);
        assert_eq!(contexts.len(), 1);
        assert_eq!(contexts[0].context(text), "What?! Really");
        assert_eq!(contexts[0].end, 6);

        let text = "Why?!) Because";
        let contexts = english().period_context_matches(text);
        assert_eq!(contexts.len(), 1);
        assert_eq!(contexts[0].context(text), "Why?!)");
    }

    #[test]
    fn test_no_context_at_end_of_text() {
        assert!(english().period_context_matches("No follower.").is_empty());
        assert!(english().period_context_matches("Trailing space.   ").is_empty());
    }

    #[test]
    fn test_realignment() {
        let lang = english();
        assert_eq!(lang.boundary_realignment(") Sent2."), Some((1, 2)));
        assert_eq!(lang.boundary_realignment("\")  Next"), Some((2, 4)));
        assert_eq!(lang.boundary_realignment(")"), Some((1, 1)));
        assert_eq!(lang.boundary_realignment(")--"), Some((1, 1)));
        assert_eq!(lang.boundary_realignment(")x"), None);
        assert_eq!(lang.boundary_realignment("Next"), None);
    }
}
