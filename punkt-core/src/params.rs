//! Trained Punkt parameters and their persisted form
//!
//! [`Parameters`] holds everything a [`SentenceTokenizer`] needs. All sets
//! and maps are ordered so that identical training produces byte-identical
//! JSON.
//!
//! [`SentenceTokenizer`]: crate::SentenceTokenizer

use std::collections::{BTreeMap, BTreeSet};
use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::error::{PunktError, Result};
use crate::ortho::OrthoContext;

/// Version written into every persisted parameter bundle
pub const FORMAT_VERSION: u32 = 1;

/// Learned abbreviations, collocations, sentence starters and orthographic
/// contexts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Parameters {
    #[serde(default)]
    abbrev_types: BTreeSet<String>,
    #[serde(default)]
    collocations: BTreeSet<(String, String)>,
    #[serde(default)]
    sent_starters: BTreeSet<String>,
    #[serde(default)]
    ortho_context: BTreeMap<String, OrthoContext>,
}

#[derive(Serialize)]
struct BundleRef<'a> {
    format_version: u32,
    parameters: &'a Parameters,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBundle {
    format_version: u32,
    parameters: serde_json::Value,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// No abbreviations, collocations, starters or orthographic data
    pub fn is_empty(&self) -> bool {
        self.abbrev_types.is_empty()
            && self.collocations.is_empty()
            && self.sent_starters.is_empty()
            && self.ortho_context.is_empty()
    }

    // Abbreviations

    pub fn is_abbreviation(&self, typ: &str) -> bool {
        self.abbrev_types.contains(typ)
    }

    pub fn add_abbreviation(&mut self, typ: impl Into<String>) -> bool {
        self.abbrev_types.insert(typ.into())
    }

    pub fn remove_abbreviation(&mut self, typ: &str) -> bool {
        self.abbrev_types.remove(typ)
    }

    pub fn clear_abbreviations(&mut self) {
        self.abbrev_types.clear();
    }

    pub fn abbreviations(&self) -> impl Iterator<Item = &str> {
        self.abbrev_types.iter().map(String::as_str)
    }

    pub fn abbreviation_count(&self) -> usize {
        self.abbrev_types.len()
    }

    // Collocations

    pub fn is_collocation(&self, first: &str, second: &str) -> bool {
        // BTreeSet lookup needs an owned tuple
        self.collocations
            .contains(&(first.to_string(), second.to_string()))
    }

    pub fn add_collocation(&mut self, first: impl Into<String>, second: impl Into<String>) -> bool {
        self.collocations.insert((first.into(), second.into()))
    }

    pub fn clear_collocations(&mut self) {
        self.collocations.clear();
    }

    pub fn collocations(&self) -> impl Iterator<Item = (&str, &str)> {
        self.collocations
            .iter()
            .map(|(a, b)| (a.as_str(), b.as_str()))
    }

    pub fn collocation_count(&self) -> usize {
        self.collocations.len()
    }

    // Sentence starters

    pub fn is_sentence_starter(&self, typ: &str) -> bool {
        self.sent_starters.contains(typ)
    }

    pub fn add_sentence_starter(&mut self, typ: impl Into<String>) -> bool {
        self.sent_starters.insert(typ.into())
    }

    pub fn clear_sentence_starters(&mut self) {
        self.sent_starters.clear();
    }

    pub fn sentence_starters(&self) -> impl Iterator<Item = &str> {
        self.sent_starters.iter().map(String::as_str)
    }

    pub fn sentence_starter_count(&self) -> usize {
        self.sent_starters.len()
    }

    // Orthographic context

    /// Orthographic context of `typ`, empty if never observed
    pub fn ortho_context(&self, typ: &str) -> OrthoContext {
        self.ortho_context.get(typ).copied().unwrap_or_default()
    }

    /// Record observations for `typ`; contexts only ever grow
    pub fn add_ortho_context(&mut self, typ: &str, flags: u8) {
        if let Some(ctx) = self.ortho_context.get_mut(typ) {
            ctx.insert(flags);
        } else {
            let mut ctx = OrthoContext::empty();
            ctx.insert(flags);
            if !ctx.is_empty() {
                self.ortho_context.insert(typ.to_string(), ctx);
            }
        }
    }

    pub fn ortho_contexts(&self) -> impl Iterator<Item = (&str, OrthoContext)> {
        self.ortho_context.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn ortho_context_count(&self) -> usize {
        self.ortho_context.len()
    }

    pub(crate) fn retain_ortho_contexts(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.ortho_context.retain(|typ, _| keep(typ));
    }

    pub fn clear_ortho_contexts(&mut self) {
        self.ortho_context.clear();
    }

    /// Union another parameter set into this one
    pub fn merge(&mut self, other: &Parameters) {
        self.abbrev_types.extend(other.abbrev_types.iter().cloned());
        self.collocations.extend(other.collocations.iter().cloned());
        self.sent_starters.extend(other.sent_starters.iter().cloned());
        for (typ, ctx) in &other.ortho_context {
            self.add_ortho_context(typ, ctx.bits());
        }
    }

    // Builders for hand-made models

    pub fn with_abbreviations<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.abbrev_types.extend(types.into_iter().map(Into::into));
        self
    }

    pub fn with_collocations<I, A, B>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<String>,
        B: Into<String>,
    {
        self.collocations
            .extend(pairs.into_iter().map(|(a, b)| (a.into(), b.into())));
        self
    }

    pub fn with_sentence_starters<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sent_starters.extend(types.into_iter().map(Into::into));
        self
    }

    pub fn with_ortho_context(mut self, typ: &str, flags: u8) -> Self {
        self.add_ortho_context(typ, flags);
        self
    }

    // Persistence

    /// Serialize as a versioned JSON bundle
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.bundle())?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.bundle())?)
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        Ok(serde_json::to_writer_pretty(writer, &self.bundle())?)
    }

    /// Load a bundle written by [`Parameters::to_json`]
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_raw(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_raw(serde_json::from_reader(reader)?)
    }

    fn bundle(&self) -> BundleRef<'_> {
        BundleRef {
            format_version: FORMAT_VERSION,
            parameters: self,
        }
    }

    fn from_raw(raw: RawBundle) -> Result<Self> {
        if raw.format_version != FORMAT_VERSION {
            return Err(PunktError::UnsupportedFormat {
                found: raw.format_version,
                expected: FORMAT_VERSION,
            });
        }
        Ok(serde_json::from_value(raw.parameters)?)
    }
}
