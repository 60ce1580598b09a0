//! Metrics for scoring word transliterations
//!
//! This crate holds the deterministic part of the evaluator: the edit-distance
//! primitive, the scored item record, the four metric families and the
//! rounded per-group summary. It performs no I/O.
//!
//! Words are stored as space-separated characters (`"c a t"`), so token-level
//! metrics work at character granularity while the F1 score looks at the
//! literal strings.
//!
//! # Example
//!
//! ```rust
//! use translit_eval_core::{MetricsSummary, ScoredItem, ScoringConfig};
//!
//! let items = vec![
//!     ScoredItem::new("ru", "k o t", "k o t"),
//!     ScoredItem::new("ru", "d o m", "t o m"),
//! ];
//! let group: Vec<&ScoredItem> = items.iter().collect();
//!
//! let summary = MetricsSummary::compute(&group, &ScoringConfig::default()).unwrap();
//! assert_eq!(summary.language, "ru");
//! assert_eq!(summary.word_accuracy, 50.0);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod edit_distance;
pub mod error;
pub mod metrics;
pub mod record;
pub mod summary;

// Re-export key types
pub use config::{BleuConfig, BleuTokenizer, LengthPolicy, ScoringConfig, Smoothing};
pub use edit_distance::{char_edit_distance, edit_distance, token_edit_distance};
pub use error::{Metric, MetricError, Result};
pub use metrics::{character_error_rate, corpus_bleu, item_f1, mean_f1, word_accuracy, BleuScore};
pub use record::ScoredItem;
pub use summary::{round_to, MetricsSummary, GLOBAL_LABEL};
