//! Aggregation and reporting for transliteration evaluation
//!
//! This crate reads scored items from aligned line files or a combined table,
//! scores them globally and per language with the metrics of
//! `translit-eval-core`, and exposes the results as text or tabular reports.

#![warn(missing_docs)]

pub mod aggregator;
pub mod config;
pub mod error;
pub mod executor;
pub mod group;
pub mod ingest;
pub mod report;

// Re-export key types
pub use aggregator::{AggregatedResult, Aggregator};
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use executor::{ExecutionMode, Executor, NoProgress, ProgressObserver};
pub use group::GroupKey;
pub use ingest::{AlignedFiles, InputSource, TableLayout};
pub use report::{JsonReport, SummaryRow};

// Re-export from core for convenience
pub use translit_eval_core::{
    LengthPolicy, MetricError, MetricsSummary, ScoredItem, ScoringConfig, GLOBAL_LABEL,
};
