//! translit-eval CLI library
//!
//! This library provides the command-line interface for scoring
//! transliteration outputs with `translit-eval-engine`.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
