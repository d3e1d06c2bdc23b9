//! First- and second-pass token classification

use std::fmt;

use log::trace;
use serde::Serialize;

use crate::language::LanguageVars;
use crate::ortho::{OrthoContext, OrthoEvidence};
use crate::params::Parameters;
use crate::token::{strip_final_period, Token, NUMBER_TYPE};

/// Rule that decided a second-pass classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    /// The pair is a learned collocation
    KnownCollocation,
    /// Abbreviation or ellipsis followed by a word the orthographic
    /// heuristic marks as a sentence start
    AbbrWithOrthographicHeuristic,
    /// Abbreviation or ellipsis followed by a capitalized frequent sentence
    /// starter
    AbbrWithSentenceStarter,
    /// Initial followed by a word that never starts sentences
    InitialWithOrthographicHeuristic,
    /// Number followed by a word that never starts sentences
    NumberWithOrthographicHeuristic,
    /// Initial followed by a capitalized word never seen in lowercase
    InitialWithSpecialOrthographicHeuristic,
    /// Nothing in the second pass applied
    DefaultDecision,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Reason::KnownCollocation => "known collocation (both words)",
            Reason::AbbrWithOrthographicHeuristic => {
                "abbreviation + orthographic heuristic"
            }
            Reason::AbbrWithSentenceStarter => "abbreviation + frequent sentence starter",
            Reason::InitialWithOrthographicHeuristic => "initial + orthographic heuristic",
            Reason::NumberWithOrthographicHeuristic => "number + orthographic heuristic",
            Reason::InitialWithSpecialOrthographicHeuristic => {
                "initial + special orthographic heuristic"
            }
            Reason::DefaultDecision => "default decision",
        };
        f.write_str(text)
    }
}

/// Type-based classification of a single token
///
/// Only sets flags on sentence-end characters, ellipses and period-final
/// tokens; every other token is left untouched.
pub fn first_pass(token: &mut Token<'_>, params: &Parameters, lang: &dyn LanguageVars) {
    let text = token.text();
    let mut chars = text.chars();
    let single = match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    };

    if single.is_some_and(|ch| lang.is_sent_end_char(ch)) {
        token.set_sentbreak(true);
    } else if token.is_ellipsis() {
        token.set_ellipsis();
    } else if token.period_final() && !text.ends_with("..") {
        if is_known_abbreviation(text, params) {
            token.mark_abbreviation();
        } else {
            token.set_sentbreak(true);
        }
    }
}

/// Token-based reclassification of `tok1` given the token after it
///
/// Returns the rule that fired, or `None` when the first-pass decision
/// stands.
pub fn second_pass(
    tok1: &mut Token<'_>,
    tok2: &Token<'_>,
    params: &Parameters,
    lang: &dyn LanguageVars,
) -> Option<Reason> {
    if !tok1.period_final() {
        return None;
    }

    let next_typ = tok2.type_no_sentperiod();
    let is_initial = tok1.is_initial();
    // type_no_period borrows tok1, which is mutated below
    let typ = tok1.type_no_period().to_string();

    if params.is_collocation(&typ, next_typ) {
        tok1.mark_abbreviation();
        return Some(Reason::KnownCollocation);
    }

    if (tok1.abbr() || tok1.ellipsis()) && !is_initial {
        if ortho_heuristic(tok2, params, lang) == OrthoEvidence::SentenceStart {
            tok1.set_sentbreak(true);
            return Some(Reason::AbbrWithOrthographicHeuristic);
        }
        if tok2.first_upper() && params.is_sentence_starter(next_typ) {
            tok1.set_sentbreak(true);
            return Some(Reason::AbbrWithSentenceStarter);
        }
    }

    if is_initial || typ == NUMBER_TYPE {
        let evidence = ortho_heuristic(tok2, params, lang);
        if evidence == OrthoEvidence::NotSentenceStart {
            tok1.mark_abbreviation();
            return Some(if is_initial {
                Reason::InitialWithOrthographicHeuristic
            } else {
                Reason::NumberWithOrthographicHeuristic
            });
        }

        if evidence == OrthoEvidence::Unknown
            && is_initial
            && tok2.first_upper()
            && !params.ortho_context(next_typ).has_lowercase()
        {
            tok1.mark_abbreviation();
            return Some(Reason::InitialWithSpecialOrthographicHeuristic);
        }
    }

    None
}

/// Decide from orthographic evidence whether `token` starts a sentence
pub fn ortho_heuristic(
    token: &Token<'_>,
    params: &Parameters,
    lang: &dyn LanguageVars,
) -> OrthoEvidence {
    if lang.is_punctuation_token(token.text()) {
        return OrthoEvidence::NotSentenceStart;
    }

    let ctx = params.ortho_context(token.type_no_sentperiod());

    if token.first_upper() && ctx.has_lowercase() && !ctx.contains(OrthoContext::MID_UC) {
        return OrthoEvidence::SentenceStart;
    }

    if token.first_lower() && (ctx.has_uppercase() || !ctx.contains(OrthoContext::BEG_LC)) {
        return OrthoEvidence::NotSentenceStart;
    }

    OrthoEvidence::Unknown
}

/// Iterator adapter running the first and second pass over a token stream
///
/// Holds exactly one token of lookahead, so consumers can stop as soon as
/// they have seen enough.
pub struct Annotated<'p, I: Iterator> {
    inner: I,
    params: &'p Parameters,
    lang: &'p dyn LanguageVars,
    pending: Option<I::Item>,
}

impl<'p, 't, I> Annotated<'p, I>
where
    I: Iterator<Item = Token<'t>>,
{
    pub fn new(inner: I, params: &'p Parameters, lang: &'p dyn LanguageVars) -> Self {
        Self {
            inner,
            params,
            lang,
            pending: None,
        }
    }

    fn pull(&mut self) -> Option<Token<'t>> {
        let mut token = self.inner.next()?;
        first_pass(&mut token, self.params, self.lang);
        Some(token)
    }
}

impl<'t, I> Iterator for Annotated<'_, I>
where
    I: Iterator<Item = Token<'t>>,
{
    type Item = Token<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut current = match self.pending.take() {
            Some(token) => token,
            None => self.pull()?,
        };

        if let Some(next) = self.pull() {
            if let Some(reason) = second_pass(&mut current, &next, self.params, self.lang) {
                trace!(
                    "{:?} before {:?}: {} (sentbreak={})",
                    current.text(),
                    next.text(),
                    reason,
                    current.sentbreak()
                );
            }
            self.pending = Some(next);
        }

        Some(current)
    }
}

/// Whether the plain stem of a period-final word, or the part after its
/// last hyphen, is a known abbreviation
pub(crate) fn is_known_abbreviation(text: &str, params: &Parameters) -> bool {
    let stem = strip_final_period(text).to_lowercase();
    let last_part = stem.rsplit('-').next().unwrap_or(&stem);
    params.is_abbreviation(&stem) || params.is_abbreviation(last_part)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::english;

    fn annotate<'t>(text: &'t str, params: &Parameters) -> Vec<Token<'t>> {
        let lang = english();
        let tokens = crate::tokenizer::TokenStream::new(&*lang, text);
        Annotated::new(tokens, params, &*lang).collect()
    }

    fn first<'t>(text: &'t str, params: &Parameters) -> Token<'t> {
        let lang = english();
        let mut token = Token::new(text, 0);
        first_pass(&mut token, params, &*lang);
        token
    }

    #[test]
    fn test_first_pass() {
        let params = Parameters::new().with_abbreviations(["dr", "co"]);

        assert!(first("?", &params).sentbreak());
        assert!(first("...", &params).ellipsis());
        assert!(!first("...", &params).sentbreak());

        let dr = first("Dr.", &params);
        assert!(dr.abbr() && !dr.sentbreak());
        assert!(first("Smith-Co.", &params).abbr());
        assert!(first("Smith.", &params).sentbreak());

        let plain = first("Smith", &params);
        assert!(!plain.sentbreak() && !plain.abbr() && !plain.ellipsis());
        let dots = first("wait..", &params);
        assert!(!dots.sentbreak() && !dots.abbr());
    }

    #[test]
    fn test_collocation_overrides_break() {
        let params = Parameters::new().with_collocations([("dr", "smith")]);
        let tokens = annotate("Dr. Smith arrived.", &params);
        assert!(tokens[0].abbr());
        assert!(!tokens[0].sentbreak());
    }

    #[test]
    fn test_abbreviation_before_sentence_starter() {
        let params = Parameters::new()
            .with_abbreviations(["etc"])
            .with_sentence_starters(["however"]);
        let tokens = annotate("apples etc. However it rained", &params);
        assert!(tokens[1].abbr());
        assert!(tokens[1].sentbreak());

        let tokens = annotate("apples etc. Pears", &params);
        assert!(!tokens[1].sentbreak());
    }

    #[test]
    fn test_abbreviation_with_orthographic_evidence() {
        let params = Parameters::new()
            .with_abbreviations(["etc"])
            .with_ortho_context("the", OrthoContext::BEG_UC | OrthoContext::MID_LC);
        let tokens = annotate("apples etc. The end", &params);
        assert!(tokens[1].sentbreak());
    }

    #[test]
    fn test_initial_before_lowercase_word() {
        let params = Parameters::new()
            .with_ortho_context("was", OrthoContext::MID_LC);
        let tokens = annotate("Born in the year of J. was he", &params);
        let initial = &tokens[5];
        assert_eq!(initial.text(), "J.");
        assert!(initial.abbr());
        assert!(!initial.sentbreak());
    }

    #[test]
    fn test_number_before_lowercase_word() {
        let params = Parameters::new();
        let tokens = annotate("It was chapter 3. and then more", &params);
        assert!(tokens[3].abbr());
    }

    #[test]
    fn test_initial_special_heuristic() {
        let params = Parameters::new().with_ortho_context("smith", OrthoContext::MID_UC);
        let tokens = annotate("By J. Smith today", &params);
        assert!(tokens[1].abbr());
        assert!(!tokens[1].sentbreak());
    }

    #[test]
    fn test_last_token_keeps_first_pass() {
        let params = Parameters::new().with_collocations([("end", "x")]);
        let tokens = annotate("The end.", &params);
        assert!(tokens[1].sentbreak());
    }

    #[test]
    fn test_ortho_heuristic() {
        let lang = english();
        let params = Parameters::new()
            .with_ortho_context("the", OrthoContext::BEG_UC | OrthoContext::MID_LC)
            .with_ortho_context("paris", OrthoContext::MID_UC | OrthoContext::BEG_UC);

        let check = |text: &str| ortho_heuristic(&Token::new(text, 0), &params, &*lang);
        assert_eq!(check(";"), OrthoEvidence::NotSentenceStart);
        assert_eq!(check("The"), OrthoEvidence::SentenceStart);
        assert_eq!(check("Paris"), OrthoEvidence::Unknown);
        assert_eq!(check("the"), OrthoEvidence::NotSentenceStart);
        assert_eq!(check("unseen"), OrthoEvidence::NotSentenceStart);
        assert_eq!(check("123"), OrthoEvidence::Unknown);
    }

    #[test]
    fn test_known_abbreviation_helper() {
        let params = Parameters::new().with_abbreviations(["inc"]);
        assert!(is_known_abbreviation("Inc.", &params));
        assert!(is_known_abbreviation("Acme-Inc.", &params));
        assert!(!is_known_abbreviation("Ltd.", &params));
    }
}
