//! Error types for training, classification and persistence

use thiserror::Error;

/// Errors reported by the Punkt trainer, classifier and parameter codec.
///
/// `InvalidInput` and `InsufficientTrainingData` are recoverable: the
/// operation that produced them still returns a (possibly empty) result.
/// Every other variant is fatal and is surfaced to the caller as `Err`.
#[derive(Error, Debug)]
pub enum PunktError {
    /// Input produced no tokens
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Why the input was rejected
        reason: String,
    },

    /// Too little data to learn anything beyond punctuation
    #[error(
        "insufficient training data: {tokens} tokens, {period_tokens} period-final tokens"
    )]
    InsufficientTrainingData {
        /// Total tokens seen by the trainer
        tokens: u64,
        /// Period-final tokens seen by the trainer
        period_tokens: u64,
    },

    /// Malformed persisted parameters
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Persisted parameters written by an incompatible format version
    #[error("unsupported parameter format version {found} (expected {expected})")]
    UnsupportedFormat {
        /// Version found in the bundle
        found: u32,
        /// Version this crate reads
        expected: u32,
    },

    /// No language variables registered under this code
    #[error("language '{0}' not supported")]
    UnsupportedLanguage(String),

    /// Invalid language or trainer configuration
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A configured pattern failed to compile
    #[error("invalid pattern: {0}")]
    Regex(#[from] regex::Error),
}

impl PunktError {
    /// Whether the error aborts the operation that raised it
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            PunktError::InvalidInput { .. } | PunktError::InsufficientTrainingData { .. }
        )
    }
}

/// Result type for Punkt operations
pub type Result<T> = std::result::Result<T, PunktError>;
