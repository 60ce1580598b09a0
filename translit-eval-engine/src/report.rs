//! Report model shared by the output formats

use crate::aggregator::AggregatedResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use translit_eval_core::{round_to, MetricsSummary};

/// Fractional digits kept in the summary table
pub const TABLE_PRECISION: u32 = 3;

/// One row of the flattened summary table
///
/// Word error and BLEU are left out of the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Language code, or `global`
    #[serde(rename = "Language")]
    pub language: String,
    /// Character error rate
    #[serde(rename = "CER")]
    pub cer: f64,
    /// Word accuracy
    #[serde(rename = "Accuracy")]
    pub accuracy: f64,
    /// Mean F1
    #[serde(rename = "F1")]
    pub f1: f64,
}

impl SummaryRow {
    /// Build a row, rounding values to [`TABLE_PRECISION`] digits
    pub fn from_summary(label: &str, summary: &MetricsSummary) -> Self {
        Self {
            language: label.to_string(),
            cer: round_to(summary.character_error_rate, TABLE_PRECISION),
            accuracy: round_to(summary.word_accuracy, TABLE_PRECISION),
            f1: round_to(summary.mean_f1, TABLE_PRECISION),
        }
    }
}

/// Serializable view of every summary
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport<'a> {
    /// Summary over every item
    pub global: &'a MetricsSummary,
    /// Summary per language code
    pub languages: &'a BTreeMap<String, MetricsSummary>,
}

impl<'a> From<&'a AggregatedResult> for JsonReport<'a> {
    fn from(result: &'a AggregatedResult) -> Self {
        Self {
            global: result.global(),
            languages: result.per_language(),
        }
    }
}
