//! Unsupervised sentence boundary detection with the Punkt algorithm
//!
//! Punkt (Kiss & Strunk, 2006) learns abbreviations, collocations and
//! frequent sentence starters from raw text, without any annotation, and
//! uses them to decide which periods end sentences.
//!
//! # Architecture
//!
//! - **Language variables** ([`language`]): character classes and
//!   punctuation patterns per language, loaded from TOML
//! - **Token model** ([`Token`]): word tokens with a normalized type and
//!   classification flags
//! - **Trainer** ([`Trainer`]): accumulates statistics and derives
//!   [`Parameters`]
//! - **Classifier** ([`SentenceTokenizer`]): two-pass classification and
//!   the segmentation API
//!
//! # Example
//!
//! ```rust
//! use punkt_core::{SentenceTokenizer, Trainer};
//!
//! let mut trainer = Trainer::new();
//! for _ in 0..4 {
//!     trainer.accumulate("Dr. Smith went to Washington. He arrived on Jan. 3.");
//! }
//! let params = trainer.into_parameters();
//! assert!(params.is_abbreviation("dr"));
//!
//! let tokenizer = SentenceTokenizer::new(params);
//! let sentences = tokenizer.tokenize("Dr. Jones called Dr. Smith yesterday. It rained.");
//! assert_eq!(sentences, vec!["Dr. Jones called Dr. Smith yesterday.", "It rained."]);
//! ```

pub mod annotate;
pub mod classifier;
pub mod error;
pub mod freqdist;
pub mod language;
pub mod ortho;
pub mod params;
mod segment;
pub mod token;
pub mod tokenizer;
pub mod trainer;

pub use annotate::Reason;
pub use classifier::{ClassifierConfig, Decision, SentenceTokenizer};
pub use error::{PunktError, Result};
pub use language::{
    get_language, list_languages, ConfigurableLanguageVars, LanguageConfig, LanguageVars,
};
pub use ortho::{OrthoContext, OrthoEvidence};
pub use params::{Parameters, FORMAT_VERSION};
pub use token::Token;
pub use tokenizer::TokenStream;
pub use trainer::{BatchStats, PruneStats, Trainer, TrainerConfig, TrainerState};
