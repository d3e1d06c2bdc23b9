//! Sentence segmentation with trained parameters

use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::annotate::{first_pass, ortho_heuristic, second_pass, Annotated, Reason};
use crate::language::{english, scan::PeriodContexts, LanguageVars};
use crate::ortho::OrthoEvidence;
use crate::params::Parameters;
use crate::segment::{realign_boundaries, trimmed_bounds};
use crate::token::Token;
use crate::tokenizer::{tokens_from_words, TokenStream};

/// Segmentation options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Move closing quotes and brackets after a break into the sentence
    /// they close
    pub realign_boundaries: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            realign_boundaries: true,
        }
    }
}

/// How one candidate boundary was classified, as reported by
/// [`SentenceTokenizer::debug_decisions`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decision {
    /// Byte offset of the sentence-end character
    pub period_index: usize,
    /// The candidate and the text after it
    pub text: String,
    pub type1: String,
    pub type2: String,
    pub type1_in_abbrs: bool,
    pub type1_is_initial: bool,
    pub type2_is_sent_starter: bool,
    pub type2_ortho_heuristic: OrthoEvidence,
    pub type2_ortho_contexts: Vec<&'static str>,
    pub collocation: bool,
    pub reason: Reason,
    pub break_decision: bool,
}

/// Punkt sentence tokenizer
///
/// Parameters are shared behind an `Arc`, so any number of tokenizers can
/// use one trained model concurrently.
///
/// ```
/// use punkt_core::{Parameters, SentenceTokenizer};
///
/// let tokenizer = SentenceTokenizer::new(Parameters::new().with_abbreviations(["dr"]));
/// let sentences = tokenizer.tokenize("Dr. Smith arrived. He sat down.");
/// assert_eq!(sentences, vec!["Dr. Smith arrived.", "He sat down."]);
/// ```
#[derive(Debug, Clone)]
pub struct SentenceTokenizer {
    params: Arc<Parameters>,
    lang: Arc<dyn LanguageVars>,
    config: ClassifierConfig,
}

impl Default for SentenceTokenizer {
    fn default() -> Self {
        Self::untrained()
    }
}

impl SentenceTokenizer {
    pub fn new(params: impl Into<Arc<Parameters>>) -> Self {
        let params = params.into();
        debug!(
            "sentence tokenizer with {} abbreviations, {} collocations, {} sentence starters",
            params.abbreviation_count(),
            params.collocation_count(),
            params.sentence_starter_count()
        );
        Self {
            params,
            lang: english(),
            config: ClassifierConfig::default(),
        }
    }

    /// Tokenizer with empty parameters: splits on punctuation only
    pub fn untrained() -> Self {
        Self::new(Parameters::new())
    }

    pub fn with_language(mut self, lang: Arc<dyn LanguageVars>) -> Self {
        self.lang = lang;
        self
    }

    pub fn with_config(mut self, config: ClassifierConfig) -> Self {
        self.config = config;
        self
    }

    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    pub fn language(&self) -> &Arc<dyn LanguageVars> {
        &self.lang
    }

    pub fn config(&self) -> ClassifierConfig {
        self.config
    }

    /// Split `text` into sentences
    pub fn tokenize<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.span_tokenize(text)
            .into_iter()
            .map(|(start, end)| &text[start..end])
            .collect()
    }

    /// Byte spans of the sentences in `text`
    ///
    /// Spans are sorted and non-overlapping; only whitespace lies outside
    /// them.
    pub fn span_tokenize(&self, text: &str) -> Vec<(usize, usize)> {
        let spans = self.slices_from_text(text);
        if self.config.realign_boundaries {
            realign_boundaries(&*self.lang, text, &spans)
        } else {
            spans
        }
    }

    fn slices_from_text(&self, text: &str) -> Vec<(usize, usize)> {
        let (mut last_break, end) = trimmed_bounds(text);
        let mut spans = Vec::new();

        for ctx in PeriodContexts::new(&*self.lang, text) {
            if ctx.end <= last_break {
                continue;
            }
            if self.text_contains_sentbreak(ctx.context(text)) {
                spans.push((last_break, ctx.end));
                last_break = ctx.next_token_start.unwrap_or(ctx.end);
            }
        }

        if last_break < end {
            spans.push((last_break, end));
        }
        spans
    }

    /// Whether `text` contains a sentence break followed by more text
    ///
    /// Classification stops at the first token after a break.
    pub fn text_contains_sentbreak(&self, text: &str) -> bool {
        let mut found = false;
        for token in self.annotate(text) {
            if found {
                return true;
            }
            found = token.sentbreak();
        }
        false
    }

    /// Group pre-tokenized words into sentences
    pub fn sentences_from_tokens<'t, I>(&self, words: I) -> Vec<Vec<&'t str>>
    where
        I: IntoIterator<Item = &'t str>,
    {
        let mut sentences = Vec::new();
        let mut sentence = Vec::new();

        let tokens = Annotated::new(tokens_from_words(words), &self.params, &*self.lang);
        for token in tokens {
            sentence.push(token.text());
            if token.sentbreak() {
                sentences.push(std::mem::take(&mut sentence));
            }
        }
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        sentences
    }

    /// Fully classified tokens of `text`
    pub fn annotate<'s, 't>(&'s self, text: &'t str) -> Annotated<'s, TokenStream<'s, 't>> {
        Annotated::new(
            TokenStream::new(&*self.lang, text),
            &self.params,
            &*self.lang,
        )
    }

    /// Explain the decision taken at every candidate boundary
    pub fn debug_decisions(&self, text: &str) -> Vec<Decision> {
        PeriodContexts::new(&*self.lang, text)
            .filter_map(|ctx| {
                let context = ctx.context(text);
                let period_index = text[..ctx.end]
                    .char_indices()
                    .next_back()
                    .map_or(ctx.end, |(i, _)| i);

                let mut tokens = TokenStream::new(&*self.lang, context)
                    .map(|mut token| {
                        first_pass(&mut token, &self.params, &*self.lang);
                        token
                    })
                    .skip_while(|token| !self.ends_with_sent_end(token));

                let mut tok1 = tokens.next()?;
                let tok2 = tokens.next()?;
                Some(self.decide(period_index, context, &mut tok1, &tok2))
            })
            .collect()
    }

    fn ends_with_sent_end(&self, token: &Token<'_>) -> bool {
        token
            .text()
            .chars()
            .next_back()
            .is_some_and(|ch| self.lang.is_sent_end_char(ch))
    }

    fn decide(
        &self,
        period_index: usize,
        context: &str,
        tok1: &mut Token<'_>,
        tok2: &Token<'_>,
    ) -> Decision {
        let next_typ = tok2.type_no_sentperiod();
        let mut decision = Decision {
            period_index,
            text: context.to_string(),
            type1: tok1.typ().to_string(),
            type2: tok2.typ().to_string(),
            type1_in_abbrs: tok1.abbr(),
            type1_is_initial: tok1.is_initial(),
            type2_is_sent_starter: self.params.is_sentence_starter(next_typ),
            type2_ortho_heuristic: ortho_heuristic(tok2, &self.params, &*self.lang),
            type2_ortho_contexts: self.params.ortho_context(next_typ).labels(),
            collocation: self
                .params
                .is_collocation(tok1.type_no_period(), next_typ),
            reason: Reason::DefaultDecision,
            break_decision: false,
        };

        decision.reason =
            second_pass(tok1, tok2, &self.params, &*self.lang).unwrap_or(Reason::DefaultDecision);
        decision.break_decision = tok1.sentbreak();
        decision
    }
}
