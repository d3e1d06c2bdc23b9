//! Unsupervised Punkt training
//!
//! A [`Trainer`] accumulates frequency statistics over any number of text
//! batches and derives [`Parameters`] from them:
//!
//! 1. every batch updates the type distribution and re-scores abbreviation
//!    candidates with the modified Dunning log-likelihood,
//! 2. the batch is classified with the first pass and its orthographic
//!    contexts are recorded,
//! 3. rare abbreviations, collocation candidates and sentence-starter
//!    candidates are counted pairwise,
//! 4. [`Trainer::finalize`] derives collocations and sentence starters from
//!    the counts.

mod config;
mod likelihood;
mod state;

pub use config::TrainerConfig;
pub use likelihood::{abbreviation_score, col_log_likelihood, dunning_log_likelihood};
pub use state::TrainerState;

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use log::{debug, info, warn};

use crate::annotate::first_pass;
use crate::error::PunktError;
use crate::language::{english, LanguageVars};
use crate::ortho::{OrthoContext, Position};
use crate::params::Parameters;
use crate::token::{is_letter, Token, NUMBER_TYPE};
use crate::tokenizer::{tokens_from_words, TokenStream};

/// What one training batch contributed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub tokens: u64,
    pub period_tokens: u64,
    pub sentence_breaks: u64,
    pub abbreviations_added: usize,
    pub abbreviations_removed: usize,
    pub rare_abbreviations: usize,
}

impl BatchStats {
    /// A non-fatal problem with the batch, if any
    pub fn warning(&self) -> Option<PunktError> {
        if self.tokens == 0 {
            Some(PunktError::InvalidInput {
                reason: "text produced no tokens".to_string(),
            })
        } else if self.period_tokens == 0 {
            Some(PunktError::InsufficientTrainingData {
                tokens: self.tokens,
                period_tokens: 0,
            })
        } else {
            None
        }
    }
}

/// Number of entries removed by [`Trainer::freq_threshold`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneStats {
    pub ortho_contexts: usize,
    pub types: usize,
    pub collocations: usize,
    pub sentence_starters: usize,
}

/// Learns Punkt parameters from raw text
///
/// A trainer is a single-writer object. To train in parallel, use one
/// trainer per worker and [`merge`](Trainer::merge) them.
#[derive(Debug, Clone)]
pub struct Trainer {
    config: TrainerConfig,
    lang: Arc<dyn LanguageVars>,
    state: TrainerState,
}

impl Default for Trainer {
    fn default() -> Self {
        Self::new()
    }
}

impl Trainer {
    /// English trainer with default thresholds
    pub fn new() -> Self {
        Self {
            config: TrainerConfig::default(),
            lang: english(),
            state: TrainerState::new(),
        }
    }

    /// Continue training from existing parameters
    ///
    /// Abbreviations and orthographic contexts are kept and extended;
    /// collocations and sentence starters are kept through finalize.
    pub fn from_parameters(params: Parameters) -> Self {
        Self::from_state(TrainerState::from_parameters(params))
    }

    pub fn from_state(state: TrainerState) -> Self {
        Self {
            state,
            ..Self::new()
        }
    }

    pub fn with_language(mut self, lang: Arc<dyn LanguageVars>) -> Self {
        self.lang = lang;
        self
    }

    pub fn with_config(mut self, config: TrainerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    pub fn language(&self) -> &Arc<dyn LanguageVars> {
        &self.lang
    }

    pub fn state(&self) -> &TrainerState {
        &self.state
    }

    pub fn into_state(self) -> TrainerState {
        self.state
    }

    /// Current parameters; collocations and sentence starters are only
    /// up to date after [`finalize`](Trainer::finalize)
    pub fn parameters(&self) -> &Parameters {
        &self.state.params
    }

    pub fn is_finalized(&self) -> bool {
        self.state.finalized
    }

    /// Finalize if needed and hand out the parameters
    pub fn into_parameters(mut self) -> Parameters {
        if !self.state.finalized {
            self.finalize();
        }
        self.state.params
    }

    /// Accumulate one batch and finalize
    pub fn train(&mut self, text: &str) -> &Parameters {
        self.accumulate(text);
        self.finalize()
    }

    /// Collect statistics from a batch of raw text
    pub fn accumulate(&mut self, text: &str) -> BatchStats {
        let lang = Arc::clone(&self.lang);
        let tokens: Vec<Token<'_>> = TokenStream::new(&*lang, text).collect();
        self.train_tokens(tokens)
    }

    /// Collect statistics from pre-tokenized words
    pub fn accumulate_tokens<'t, I>(&mut self, words: I) -> BatchStats
    where
        I: IntoIterator<Item = &'t str>,
    {
        let tokens: Vec<Token<'t>> = tokens_from_words(words).collect();
        self.train_tokens(tokens)
    }

    fn train_tokens(&mut self, mut tokens: Vec<Token<'_>>) -> BatchStats {
        let config = &self.config;
        let lang = &*self.lang;
        let state = &mut self.state;
        state.finalized = false;

        let mut stats = BatchStats {
            tokens: tokens.len() as u64,
            ..BatchStats::default()
        };

        for token in &tokens {
            state.type_fdist.inc(token.typ().to_string());
            if token.period_final() {
                state.num_period_toks += 1;
                stats.period_tokens += 1;
            }
        }

        let removed = reclassify_abbrev_types(state, config, &mut stats);

        for token in tokens.iter_mut() {
            first_pass(token, &state.params, lang);
        }
        record_orthography(&mut state.params, &tokens);

        stats.sentence_breaks = tokens.iter().filter(|t| t.sentbreak()).count() as u64;
        state.sentbreak_count += stats.sentence_breaks;

        for pair in tokens.windows(2) {
            let (tok1, tok2) = (&pair[0], &pair[1]);

            if is_potential_sent_starter(tok2, tok1) {
                state.sent_starter_fdist.inc(tok2.typ().to_string());
            }

            if !tok1.period_final() {
                continue;
            }

            if is_rare_abbrev_type(state, config, lang, tok1, tok2) {
                let typ = tok1.type_no_period();
                if removed.contains(typ) {
                    debug!("rare abbreviation {typ} skipped: removed in this batch");
                } else if state.params.add_abbreviation(typ) {
                    debug!("rare abbreviation {typ} added before {:?}", tok2.text());
                    stats.rare_abbreviations += 1;
                }
            }

            if is_potential_collocation(config, tok1, tok2) {
                state.collocation_fdist.inc((
                    tok1.type_no_period().to_string(),
                    tok2.type_no_sentperiod().to_string(),
                ));
            }
        }

        info!(
            "accumulated {} tokens ({} period-final, {} sentence breaks): +{} -{} abbreviations, {} rare",
            stats.tokens,
            stats.period_tokens,
            stats.sentence_breaks,
            stats.abbreviations_added,
            stats.abbreviations_removed,
            stats.rare_abbreviations
        );
        if let Some(warning) = stats.warning() {
            warn!("{warning}");
        }

        stats
    }

    /// Derive collocations and sentence starters from the counts collected
    /// so far
    ///
    /// Calling this again without new data leaves the parameters unchanged.
    pub fn finalize(&mut self) -> &Parameters {
        let config = &self.config;
        let state = &mut self.state;

        state.params.clear_sentence_starters();
        for (typ, ll) in find_sent_starters(state, config) {
            debug!("sentence starter {typ} (ll {ll:.2})");
            state.params.add_sentence_starter(typ);
        }
        for typ in state.seed.sentence_starters() {
            state.params.add_sentence_starter(typ);
        }

        state.params.clear_collocations();
        for ((typ1, typ2), ll) in find_collocations(state, config) {
            debug!("collocation {typ1} + {typ2} (ll {ll:.2})");
            state.params.add_collocation(typ1, typ2);
        }
        for (typ1, typ2) in state.seed.collocations() {
            state.params.add_collocation(typ1, typ2);
        }

        state.finalized = true;
        info!(
            "finalized: {} abbreviations, {} collocations, {} sentence starters",
            state.params.abbreviation_count(),
            state.params.collocation_count(),
            state.params.sentence_starter_count()
        );
        if let Some(problem) = self.diagnose() {
            warn!("{problem}");
        }

        &self.state.params
    }

    /// Report why the accumulated data cannot support a useful model
    pub fn diagnose(&self) -> Option<PunktError> {
        let tokens = self.state.total_tokens();
        let period_tokens = self.state.num_period_toks;
        if tokens == 0 {
            Some(PunktError::InvalidInput {
                reason: "no tokens accumulated".to_string(),
            })
        } else if period_tokens == 0 {
            Some(PunktError::InsufficientTrainingData {
                tokens,
                period_tokens,
            })
        } else {
            None
        }
    }

    /// Drop rare entries to bound memory on large corpora
    ///
    /// Orthographic contexts of types seen fewer than `ortho` times are
    /// dropped, and the type, collocation and sentence-starter
    /// distributions lose samples below their thresholds. The total token
    /// count is preserved. A threshold of 1 or less keeps everything.
    pub fn freq_threshold(
        &mut self,
        ortho: u64,
        types: u64,
        collocations: u64,
        sentence_starters: u64,
    ) -> PruneStats {
        let state = &mut self.state;
        let mut stats = PruneStats::default();

        if ortho > 1 {
            let before = state.params.ortho_context_count();
            let type_fdist = &state.type_fdist;
            state
                .params
                .retain_ortho_contexts(|typ| type_fdist.get(typ) >= ortho);
            stats.ortho_contexts = before - state.params.ortho_context_count();
        }
        stats.types = state.type_fdist.prune(types);
        stats.collocations = state.collocation_fdist.prune(collocations);
        stats.sentence_starters = state.sent_starter_fdist.prune(sentence_starters);

        info!(
            "pruned {} orthographic contexts, {} types, {} collocations, {} sentence starters",
            stats.ortho_contexts, stats.types, stats.collocations, stats.sentence_starters
        );
        stats
    }

    /// Rebuild the abbreviation set from the type distribution alone
    ///
    /// Rare abbreviations learned pairwise are lost. Returns the number of
    /// abbreviations found.
    pub fn find_abbrev_types(&mut self) -> usize {
        let state = &mut self.state;
        state.params.clear_abbreviations();

        let candidates: BTreeSet<String> = state
            .type_fdist
            .keys()
            .filter_map(|typ| candidate_stem(typ))
            .map(str::to_string)
            .collect();

        for typ in candidates {
            let score = score_type(state, &self.config, &typ);
            if score >= self.config.abbrev_threshold {
                debug!("abbreviation {typ} (score {score:.4})");
                state.params.add_abbreviation(typ);
            }
        }
        state.params.abbreviation_count()
    }

    /// Add the statistics of another trainer
    pub fn merge(&mut self, other: &Trainer) {
        self.state.merge(&other.state);
    }
}

/// The stem of a period-final type that could be an abbreviation
fn candidate_stem(typ: &str) -> Option<&str> {
    let stem = typ.strip_suffix('.')?;
    (stem.chars().any(is_letter) && stem != NUMBER_TYPE).then_some(stem)
}

fn score_type(state: &TrainerState, config: &TrainerConfig, typ: &str) -> f64 {
    let with_period = state.type_fdist.get(format!("{typ}.").as_str());
    let without_period = state.type_fdist.get(typ);
    abbreviation_score(
        typ,
        with_period,
        without_period,
        state.num_period_toks,
        state.type_fdist.total(),
        config.ignore_abbrev_penalty,
    )
}

/// Re-score every abbreviation candidate seen so far
///
/// Period-final types scoring at or above the threshold are added. A
/// current abbreviation scoring below it is removed only if it has been
/// seen without its period. Returns the types removed.
fn reclassify_abbrev_types(
    state: &mut TrainerState,
    config: &TrainerConfig,
    stats: &mut BatchStats,
) -> HashSet<String> {
    let mut candidates: BTreeSet<String> = state
        .type_fdist
        .keys()
        .filter_map(|typ| candidate_stem(typ))
        .map(str::to_string)
        .collect();
    candidates.extend(
        state
            .params
            .abbreviations()
            .filter(|typ| state.type_fdist.contains(*typ))
            .map(str::to_string),
    );

    let mut removed = HashSet::new();
    for typ in candidates {
        let score = score_type(state, config, &typ);
        if score >= config.abbrev_threshold {
            if state.params.add_abbreviation(typ.as_str()) {
                debug!("abbreviation {typ} added (score {score:.4})");
                stats.abbreviations_added += 1;
            }
        } else if state.params.is_abbreviation(&typ) && state.type_fdist.contains(typ.as_str()) {
            state.params.remove_abbreviation(&typ);
            debug!("abbreviation {typ} removed (score {score:.4})");
            stats.abbreviations_removed += 1;
            removed.insert(typ);
        }
    }
    removed
}

/// Record the (position, case) of every token in its type's orthographic
/// context
fn record_orthography(params: &mut Parameters, tokens: &[Token<'_>]) {
    let mut position = Position::Internal;

    for token in tokens {
        if token.parastart() && position != Position::Unknown {
            position = Position::Initial;
        }
        if token.linestart() && position == Position::Internal {
            position = Position::Unknown;
        }

        if let Some(flag) = OrthoContext::flag(position, token.first_case()) {
            params.add_ortho_context(token.type_no_sentperiod(), flag);
        }

        position = if token.sentbreak() {
            if token.is_number() || token.is_initial() {
                Position::Unknown
            } else {
                Position::Initial
            }
        } else if token.ellipsis() || token.abbr() {
            Position::Unknown
        } else {
            Position::Internal
        };
    }
}

/// Mikheev's rare-abbreviation heuristic for a sentence-breaking token
fn is_rare_abbrev_type(
    state: &TrainerState,
    config: &TrainerConfig,
    lang: &dyn LanguageVars,
    cur: &Token<'_>,
    next: &Token<'_>,
) -> bool {
    if cur.abbr() || !cur.sentbreak() || !cur.is_non_punct() || cur.is_number() {
        return false;
    }

    let typ = cur.type_no_sentperiod();
    if state.params.is_abbreviation(typ) || state.combined_count(typ) >= config.abbrev_backoff {
        return false;
    }

    // A following comma, colon or semicolon means the period was not final
    if next
        .text()
        .chars()
        .next()
        .is_some_and(|ch| lang.is_internal_punctuation(ch))
    {
        return true;
    }

    // A lowercase word that is capitalized at sentence starts but never
    // mid-sentence
    if next.first_lower() {
        let ctx = state.params.ortho_context(next.type_no_sentperiod());
        return ctx.contains(OrthoContext::BEG_UC) && !ctx.contains(OrthoContext::MID_UC);
    }

    false
}

fn is_potential_sent_starter(cur: &Token<'_>, prev: &Token<'_>) -> bool {
    prev.sentbreak() && !(prev.is_number() || prev.is_initial()) && cur.is_alpha()
}

fn is_potential_collocation(config: &TrainerConfig, tok1: &Token<'_>, tok2: &Token<'_>) -> bool {
    (config.include_all_collocations
        || (config.include_abbrev_collocations && tok1.abbr())
        || (tok1.sentbreak() && (tok1.is_number() || tok1.is_initial())))
        && tok1.is_non_punct()
        && tok2.is_non_punct()
}

fn find_sent_starters(state: &TrainerState, config: &TrainerConfig) -> Vec<(String, f64)> {
    let total = state.type_fdist.total();
    let sentbreaks = state.sentbreak_count;
    if sentbreaks == 0 || total == 0 {
        return Vec::new();
    }

    let mut starters: Vec<(String, f64)> = state
        .sent_starter_fdist
        .iter()
        .filter(|(typ, _)| !typ.is_empty())
        .filter_map(|(typ, at_break)| {
            let typ_count = state.combined_count(typ);
            if typ_count < at_break {
                return None;
            }

            let ll = col_log_likelihood(sentbreaks, typ_count, at_break, total);
            let ratio_ok = total as f64 / sentbreaks as f64 > typ_count as f64 / at_break as f64;
            (ll >= config.sent_starter_threshold && ratio_ok).then(|| (typ.clone(), ll))
        })
        .collect();
    starters.sort_by(|a, b| a.0.cmp(&b.0));
    starters
}

fn find_collocations(
    state: &TrainerState,
    config: &TrainerConfig,
) -> Vec<((String, String), f64)> {
    let total = state.type_fdist.total();

    let mut collocations: Vec<((String, String), f64)> = state
        .collocation_fdist
        .iter()
        .filter(|((_, typ2), _)| !state.params.is_sentence_starter(typ2))
        .filter_map(|((typ1, typ2), col_count)| {
            let typ1_count = state.combined_count(typ1);
            let typ2_count = state.combined_count(typ2);

            if typ1_count <= 1
                || typ2_count <= 1
                || col_count <= config.min_colloc_freq
                || col_count > typ1_count.min(typ2_count)
            {
                return None;
            }

            let ll = col_log_likelihood(typ1_count, typ2_count, col_count, total);
            let ratio_ok = total as f64 / typ1_count as f64 > typ2_count as f64 / col_count as f64;
            (ll >= config.collocation_threshold && ratio_ok)
                .then(|| ((typ1.clone(), typ2.clone()), ll))
        })
        .collect();
    collocations.sort_by(|a, b| a.0.cmp(&b.0));
    collocations
}
