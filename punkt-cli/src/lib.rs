//! Punkt CLI library
//!
//! This library provides the command-line interface for training Punkt
//! models and segmenting text with them.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod language_source;
pub mod model;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
