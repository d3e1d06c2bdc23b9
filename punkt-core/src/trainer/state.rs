//! Everything a trainer has accumulated

use crate::freqdist::FreqDist;
use crate::params::Parameters;

/// Frequency distributions and parameters owned by one trainer
///
/// Distributions are plain counts, so two states built over disjoint
/// corpora can be merged by summing them.
#[derive(Debug, Clone, Default)]
pub struct TrainerState {
    pub(crate) params: Parameters,
    /// Collocations and sentence starters supplied up front, kept through
    /// every finalize
    pub(crate) seed: Parameters,
    pub(crate) type_fdist: FreqDist<String>,
    pub(crate) num_period_toks: u64,
    pub(crate) collocation_fdist: FreqDist<(String, String)>,
    pub(crate) sent_starter_fdist: FreqDist<String>,
    pub(crate) sentbreak_count: u64,
    pub(crate) finalized: bool,
}

impl TrainerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing parameters
    pub fn from_parameters(params: Parameters) -> Self {
        let seed = Parameters::new()
            .with_collocations(params.collocations().map(|(a, b)| (a.to_string(), b.to_string())))
            .with_sentence_starters(params.sentence_starters().map(str::to_string));
        Self {
            params,
            seed,
            finalized: true,
            ..Self::default()
        }
    }

    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    /// Total tokens seen, including pruned types
    pub fn total_tokens(&self) -> u64 {
        self.type_fdist.total()
    }

    pub fn period_tokens(&self) -> u64 {
        self.num_period_toks
    }

    /// First-pass sentence breaks seen
    pub fn sentence_breaks(&self) -> u64 {
        self.sentbreak_count
    }

    pub fn type_count(&self, typ: &str) -> u64 {
        self.type_fdist.get(typ)
    }

    /// Occurrences of `typ` with and without a final period
    pub fn combined_count(&self, typ: &str) -> u64 {
        self.type_fdist.get(typ) + self.type_fdist.get(format!("{typ}.").as_str())
    }

    pub fn distinct_types(&self) -> usize {
        self.type_fdist.len()
    }

    pub fn collocation_count(&self, first: &str, second: &str) -> u64 {
        self.collocation_fdist
            .get(&(first.to_string(), second.to_string()))
    }

    pub fn sentence_starter_count(&self, typ: &str) -> u64 {
        self.sent_starter_fdist.get(typ)
    }

    /// Whether derived sets reflect every accumulated batch
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Sum another state into this one
    ///
    /// Abbreviations and orthographic contexts are unioned; collocations
    /// and sentence starters are re-derived on the next finalize.
    pub fn merge(&mut self, other: &TrainerState) {
        self.type_fdist.merge(&other.type_fdist);
        self.collocation_fdist.merge(&other.collocation_fdist);
        self.sent_starter_fdist.merge(&other.sent_starter_fdist);
        self.num_period_toks += other.num_period_toks;
        self.sentbreak_count += other.sentbreak_count;

        for abbrev in other.params.abbreviations() {
            self.params.add_abbreviation(abbrev);
        }
        for (typ, ctx) in other.params.ortho_contexts() {
            self.params.add_ortho_context(typ, ctx.bits());
        }
        self.seed.merge(&other.seed);
        self.finalized = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ortho::OrthoContext;

    #[test]
    fn test_merge_sums_counts() {
        let mut left = TrainerState::new();
        left.type_fdist.inc("dr.".to_string());
        left.num_period_toks = 1;
        left.params.add_abbreviation("dr");

        let mut right = TrainerState::new();
        right.type_fdist.inc("dr.".to_string());
        right.type_fdist.inc("dr".to_string());
        right.num_period_toks = 1;
        right.sentbreak_count = 3;
        right.params.add_ortho_context("smith", OrthoContext::BEG_UC);

        left.merge(&right);
        assert_eq!(left.combined_count("dr"), 3);
        assert_eq!(left.period_tokens(), 2);
        assert_eq!(left.sentence_breaks(), 3);
        assert_eq!(left.total_tokens(), 3);
        assert!(left.parameters().is_abbreviation("dr"));
        assert!(!left.parameters().ortho_context("smith").is_empty());
        assert!(!left.is_finalized());
    }

    #[test]
    fn test_seed_from_parameters() {
        let params = Parameters::new()
            .with_abbreviations(["etc"])
            .with_collocations([("##number##", "jan")])
            .with_sentence_starters(["however"]);
        let state = TrainerState::from_parameters(params);
        assert!(state.seed.is_collocation("##number##", "jan"));
        assert!(state.seed.is_sentence_starter("however"));
        assert_eq!(state.seed.abbreviation_count(), 0);
        assert!(state.parameters().is_abbreviation("etc"));
    }
}
