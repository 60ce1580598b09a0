//! Error handling for the CLI application

use std::fmt;

/// Argument-level errors
#[derive(Debug)]
pub enum CliError {
    /// Required input paths were not given
    MissingInput(String),
    /// Aligned files and a combined table were both given
    ConflictingInput(String),
    /// Configuration file could not be used
    ConfigError(String),
    /// Refusing to overwrite an existing file
    OutputExists(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::MissingInput(msg) => write!(f, "Missing input: {msg}"),
            CliError::ConflictingInput(msg) => write!(f, "Conflicting input: {msg}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::OutputExists(path) => {
                write!(f, "Output file already exists: {path} (use --force)")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
