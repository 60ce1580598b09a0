//! Layered error types

use std::path::PathBuf;
use thiserror::Error;
use translit_eval_core::MetricError;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// A metric could not be computed for a group
    #[error("group '{group}': {source}")]
    Metric {
        /// Group label (`global` or a language code)
        group: String,
        /// Underlying metric failure
        #[source]
        source: MetricError,
    },

    /// Input files or table do not have the expected shape
    #[error("malformed input: {reason}")]
    MalformedInput {
        /// What is wrong with the input
        reason: String,
    },

    /// Reading an input file failed
    #[error("I/O error for '{}': {source}", path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Parsing the combined table failed
    #[error("table error: {0}")]
    Table(#[from] csv::Error),

    /// Parallel execution error
    #[cfg(feature = "parallel")]
    #[error("parallel execution failed: {0}")]
    ParallelError(String),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),
}

impl EngineError {
    /// Wrap a metric failure with the name of its group
    pub fn metric(group: impl Into<String>, source: MetricError) -> Self {
        EngineError::Metric {
            group: group.into(),
            source,
        }
    }

    /// Shorthand for [`EngineError::MalformedInput`]
    pub fn malformed(reason: impl Into<String>) -> Self {
        EngineError::MalformedInput {
            reason: reason.into(),
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
