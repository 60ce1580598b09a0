//! Core error types (deterministic only)

use std::fmt;
use thiserror::Error;

/// Metric identifier used in error messages and listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Character error rate
    Cer,
    /// Exact-match word accuracy
    WordAccuracy,
    /// Mean LCS-based F1
    MeanF1,
    /// Corpus BLEU
    Bleu,
}

impl Metric {
    /// All metrics in report order
    pub const ALL: [Metric; 4] = [
        Metric::WordAccuracy,
        Metric::MeanF1,
        Metric::Cer,
        Metric::Bleu,
    ];

    /// Short display name
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Cer => "CER",
            Metric::WordAccuracy => "word accuracy",
            Metric::MeanF1 => "mean F1",
            Metric::Bleu => "BLEU",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Metric computation errors (no I/O)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricError {
    /// The metric needs at least one item
    #[error("{metric} is undefined for an empty group")]
    EmptyGroup {
        /// Metric that received no items
        metric: Metric,
    },

    /// A zero-length string where the metric cannot accept one
    #[error("{metric} is undefined: {reason}")]
    DegenerateLength {
        /// Metric that rejected the input
        metric: Metric,
        /// What was degenerate
        reason: String,
    },
}

/// Result type for metric computations
pub type Result<T> = std::result::Result<T, MetricError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_group_display() {
        let err = MetricError::EmptyGroup {
            metric: Metric::WordAccuracy,
        };
        assert_eq!(err.to_string(), "word accuracy is undefined for an empty group");
    }

    #[test]
    fn test_degenerate_length_display() {
        let err = MetricError::DegenerateLength {
            metric: Metric::MeanF1,
            reason: "item 3 has an empty reference".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "mean F1 is undefined: item 3 has an empty reference"
        );
    }
}
