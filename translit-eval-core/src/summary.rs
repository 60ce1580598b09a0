//! Per-group metrics summary

use crate::config::ScoringConfig;
use crate::error::Result;
use crate::metrics::{character_error_rate, corpus_bleu, mean_f1, word_accuracy};
use crate::record::ScoredItem;
use std::collections::BTreeSet;
use std::fmt;

/// Label of a summary that spans more than one language
pub const GLOBAL_LABEL: &str = "global";

/// Round `value` to `digits` fractional digits, ties to even
///
/// Applying it twice gives the same result as applying it once.
pub fn round_to(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(digits as i32);
    let rounded = (value * factor).round_ties_even() / factor;
    // -0.0 prints as "-0.0000"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// The five scores of one group, on a percentage scale
///
/// Fields are rounded once at construction and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricsSummary {
    /// Corpus-level character error rate
    pub character_error_rate: f64,
    /// Percentage of exact matches
    pub word_accuracy: f64,
    /// `100 - word_accuracy`
    pub word_error: f64,
    /// Mean LCS-based F1
    pub mean_f1: f64,
    /// Corpus BLEU
    pub bleu: f64,
    /// `"global"` for multi-language groups, else the language code
    pub language: String,
}

impl MetricsSummary {
    /// Build a summary from unrounded percentage values
    pub fn new(
        language: impl Into<String>,
        character_error_rate: f64,
        word_accuracy: f64,
        mean_f1: f64,
        bleu: f64,
        rounding: u32,
    ) -> Self {
        Self {
            character_error_rate: round_to(character_error_rate, rounding),
            word_accuracy: round_to(word_accuracy, rounding),
            word_error: round_to(100.0 - word_accuracy, rounding),
            mean_f1: round_to(mean_f1, rounding),
            bleu: round_to(bleu, rounding),
            language: language.into(),
        }
    }

    /// Score a group of items
    ///
    /// The group may hold one or many languages; the label follows from the
    /// distinct languages present.
    pub fn compute(items: &[&ScoredItem], config: &ScoringConfig) -> Result<Self> {
        let languages: BTreeSet<&str> = items.iter().map(|item| item.language()).collect();
        let language = match languages.len() {
            1 => languages.into_iter().next().unwrap_or(GLOBAL_LABEL),
            _ => GLOBAL_LABEL,
        };

        let items = items.iter().copied();
        let word_accuracy = 100.0 * word_accuracy(items.clone())?;
        let mean_f1 = 100.0 * mean_f1(items.clone(), config.length_policy)?;
        let character_error_rate = 100.0 * character_error_rate(items.clone())?;
        let bleu = 100.0 * corpus_bleu(items, &config.bleu)?.fraction();

        Ok(Self::new(
            language,
            character_error_rate,
            word_accuracy,
            mean_f1,
            bleu,
            config.rounding,
        ))
    }

    /// Label/value pairs in report order
    pub fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("Word Accuracy", self.word_accuracy),
            ("Mean F1", self.mean_f1),
            ("CER", self.character_error_rate),
            ("WER", self.word_error),
            ("BLEU", self.bleu),
        ]
    }
}

/// Five `label<TAB>value` lines with four fractional digits
impl fmt::Display for MetricsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.fields() {
            writeln!(f, "{label}\t{value:.4}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Metric, MetricError};

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(12.345678, 5), 12.34568);
        assert_eq!(round_to(66.666666666, 3), 66.667);
        assert_eq!(round_to(-0.000001, 3), 0.0);
        assert!(round_to(f64::NAN, 5).is_nan());
    }

    #[test]
    fn test_round_to_ties_to_even() {
        // 1/64 and 1/256 of 100 are exact binary ties
        assert_eq!(round_to(1.5625, 3), 1.562);
        assert_eq!(round_to(0.390625, 5), 0.39062);
        assert_eq!(round_to(4.6875, 3), 4.688);
        assert_eq!(round_to(2.5, 0), 2.0);
    }

    #[test]
    fn test_round_to_idempotent() {
        for value in [0.1 + 0.2, 2.0 / 3.0, 99.999995, 12.3456789] {
            let once = round_to(value, 5);
            assert_eq!(round_to(once, 5), once);
        }
    }

    #[test]
    fn test_new_rounds_fields() {
        let summary = MetricsSummary::new("en", 1.0 / 3.0, 200.0 / 3.0, 50.0, 0.0, 5);
        assert_eq!(summary.character_error_rate, 0.33333);
        assert_eq!(summary.word_accuracy, 66.66667);
        assert_eq!(summary.word_error, 33.33333);
        assert_eq!(summary.mean_f1, 50.0);
    }

    #[test]
    fn test_compute_exact_match() {
        let items = vec![
            ScoredItem::new("en", "c a t", "c a t"),
            ScoredItem::new("en", "h o u s e", "h o u s e"),
        ];
        let refs: Vec<&ScoredItem> = items.iter().collect();
        let summary = MetricsSummary::compute(&refs, &ScoringConfig::default()).unwrap();

        assert_eq!(summary.language, "en");
        assert_eq!(summary.word_accuracy, 100.0);
        assert_eq!(summary.word_error, 0.0);
        assert_eq!(summary.character_error_rate, 0.0);
        assert_eq!(summary.mean_f1, 100.0);
        assert_eq!(summary.bleu, 100.0);
    }

    #[test]
    fn test_compute_global_label() {
        let items = vec![
            ScoredItem::new("en", "c a t", "c a t"),
            ScoredItem::new("ru", "k o t", "k o d"),
        ];
        let refs: Vec<&ScoredItem> = items.iter().collect();
        let summary = MetricsSummary::compute(&refs, &ScoringConfig::default()).unwrap();

        assert_eq!(summary.language, GLOBAL_LABEL);
        assert_eq!(summary.word_accuracy, 50.0);
        assert_eq!(summary.word_error, 50.0);
    }

    #[test]
    fn test_compute_empty_group() {
        let err = MetricsSummary::compute(&[], &ScoringConfig::default()).unwrap_err();
        assert_eq!(
            err,
            MetricError::EmptyGroup {
                metric: Metric::WordAccuracy
            }
        );
    }

    #[test]
    fn test_display_format() {
        let summary = MetricsSummary::new("en", 12.5, 66.666666, 90.0, 0.0, 5);
        assert_eq!(
            summary.to_string(),
            "Word Accuracy\t66.6667\nMean F1\t90.0000\nCER\t12.5000\nWER\t33.3333\nBLEU\t0.0000\n"
        );
    }
}
