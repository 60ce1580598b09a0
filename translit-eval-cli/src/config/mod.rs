//! Configuration module
//!
//! An optional TOML file supplies defaults; command-line flags override it.

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use translit_eval_core::config::DEFAULT_ROUNDING;
use translit_eval_core::{BleuConfig, LengthPolicy, ScoringConfig};
use translit_eval_engine::config::DEFAULT_PARALLEL_THRESHOLD;
use translit_eval_engine::{EngineConfig, ExecutionMode};

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Scoring configuration
    #[serde(default)]
    pub scoring: ScoringSection,

    /// BLEU parameters
    #[serde(default)]
    pub bleu: BleuConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Scoring-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringSection {
    /// Fractional digits kept in each summary
    pub rounding: u32,

    /// F1 handling of empty strings
    pub length_policy: LengthPolicy,
}

impl Default for ScoringSection {
    fn default() -> Self {
        Self {
            rounding: DEFAULT_ROUNDING,
            length_policy: LengthPolicy::Lenient,
        }
    }
}

/// Execution mode names accepted in the file and on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Parallel for large multi-language inputs
    #[default]
    Adaptive,
    /// One group at a time
    Sequential,
    /// All groups on a thread pool
    Parallel,
}

impl From<Mode> for ExecutionMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Adaptive => ExecutionMode::Adaptive,
            Mode::Sequential => ExecutionMode::Sequential,
            Mode::Parallel => ExecutionMode::Parallel,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Execution mode
    pub mode: Mode,

    /// Number of worker threads (0 = auto)
    pub threads: usize,

    /// Item count from which adaptive mode goes parallel
    pub parallel_threshold: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Adaptive,
            threads: 0,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Engine configuration described by the file
    pub fn engine_config(&self) -> EngineConfig {
        let scoring = ScoringConfig::default()
            .with_rounding(self.scoring.rounding)
            .with_length_policy(self.scoring.length_policy)
            .with_bleu(self.bleu);

        EngineConfig {
            scoring,
            execution_mode: self.performance.mode.into(),
            threads: match self.performance.threads {
                0 => None,
                n => Some(n),
            },
            parallel_threshold: self.performance.parallel_threshold,
        }
    }
}
