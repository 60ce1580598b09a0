//! Configuration types for the engine

use crate::error::{EngineError, Result};
use crate::executor::ExecutionMode;
use translit_eval_core::{LengthPolicy, ScoringConfig};

/// Default item count above which adaptive mode goes parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 10_000;

/// Highest accepted BLEU n-gram order
pub const MAX_NGRAM_ORDER: usize = 10;

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// How each group is scored
    pub scoring: ScoringConfig,
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Number of threads for parallel execution (None = all cores)
    pub threads: Option<usize>,
    /// Minimum item count for adaptive parallel execution
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl EngineConfig {
    /// Single-threaded configuration
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            ..Default::default()
        }
    }

    /// Always score groups on the thread pool
    pub fn parallel() -> Self {
        Self {
            execution_mode: ExecutionMode::Parallel,
            parallel_threshold: 0,
            ..Default::default()
        }
    }

    /// Set the scoring configuration
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }

    /// Set the F1 zero-length policy
    pub fn with_length_policy(mut self, policy: LengthPolicy) -> Self {
        self.scoring.length_policy = policy;
        self
    }

    /// Set the execution mode
    pub fn with_execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.execution_mode = mode;
        self
    }

    /// Set the worker thread count
    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.scoring.bleu.max_ngram_order == 0 {
            return Err(EngineError::ConfigError(
                "BLEU n-gram order must be greater than 0".to_string(),
            ));
        }

        if self.scoring.bleu.max_ngram_order > MAX_NGRAM_ORDER {
            return Err(EngineError::ConfigError(format!(
                "BLEU n-gram order {} exceeds the maximum of {MAX_NGRAM_ORDER}",
                self.scoring.bleu.max_ngram_order
            )));
        }

        if self.scoring.rounding > 15 {
            return Err(EngineError::ConfigError(format!(
                "rounding of {} digits exceeds f64 precision",
                self.scoring.rounding
            )));
        }

        if let Some(threads) = self.threads {
            if threads == 0 {
                return Err(EngineError::ConfigError(
                    "thread count must be greater than 0".to_string(),
                ));
            }
        }

        Ok(())
    }
}
