//! Frequency distributions

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Counts of observed samples
///
/// Pruning removes rare samples but keeps their mass in [`FreqDist::total`],
/// so likelihood computations still see the true number of outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreqDist<K: Eq + Hash> {
    counts: HashMap<K, u64>,
    total: u64,
}

impl<K: Eq + Hash> Default for FreqDist<K> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
            total: 0,
        }
    }
}

impl<K: Eq + Hash> FreqDist<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inc(&mut self, sample: K) {
        self.add(sample, 1);
    }

    pub fn add(&mut self, sample: K, count: u64) {
        if count == 0 {
            return;
        }
        *self.counts.entry(sample).or_insert(0) += count;
        self.total += count;
    }

    /// Count of `sample`, zero if never seen
    pub fn get<Q>(&self, sample: &Q) -> u64
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.counts.get(sample).copied().unwrap_or(0)
    }

    pub fn contains<Q>(&self, sample: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.counts.contains_key(sample)
    }

    /// Total number of outcomes, including pruned ones
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct samples
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.counts.iter().map(|(k, &v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.counts.keys()
    }

    /// Add every count of `other` into this distribution
    pub fn merge(&mut self, other: &Self)
    where
        K: Clone,
    {
        for (sample, &count) in &other.counts {
            *self.counts.entry(sample.clone()).or_insert(0) += count;
        }
        self.total += other.total;
    }

    /// Drop samples seen fewer than `threshold` times; returns how many
    /// samples were removed
    pub fn prune(&mut self, threshold: u64) -> usize {
        let before = self.counts.len();
        self.counts.retain(|_, count| *count >= threshold);
        before - self.counts.len()
    }

    pub fn clear(&mut self) {
        self.counts.clear();
        self.total = 0;
    }
}

impl<K: Eq + Hash> FromIterator<K> for FreqDist<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut dist = Self::new();
        for sample in iter {
            dist.inc(sample);
        }
        dist
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting() {
        let dist: FreqDist<String> = ["a", "b", "a"].iter().map(|s| s.to_string()).collect();
        assert_eq!(dist.get("a"), 2);
        assert_eq!(dist.get("b"), 1);
        assert_eq!(dist.get("c"), 0);
        assert_eq!(dist.total(), 3);
        assert_eq!(dist.len(), 2);
    }

    #[test]
    fn test_tuple_keys() {
        let mut dist = FreqDist::new();
        dist.inc(("dr".to_string(), "smith".to_string()));
        dist.inc(("dr".to_string(), "smith".to_string()));
        assert_eq!(dist.get(&("dr".to_string(), "smith".to_string())), 2);
    }

    #[test]
    fn test_prune_keeps_total() {
        let mut dist: FreqDist<&str> = ["a", "a", "b", "c"].into_iter().collect();
        assert_eq!(dist.prune(2), 2);
        assert_eq!(dist.get(&"a"), 2);
        assert!(!dist.contains(&"b"));
        assert_eq!(dist.total(), 4);
    }

    #[test]
    fn test_merge_is_additive() {
        let mut left: FreqDist<&str> = ["a", "b"].into_iter().collect();
        let right: FreqDist<&str> = ["b", "c", "c"].into_iter().collect();
        left.merge(&right);
        assert_eq!(left.get(&"b"), 2);
        assert_eq!(left.get(&"c"), 2);
        assert_eq!(left.total(), 5);
    }

    #[test]
    fn test_zero_add_is_noop() {
        let mut dist = FreqDist::new();
        dist.add("a", 0);
        assert!(dist.is_empty());
        assert_eq!(dist.total(), 0);
    }
}
