//! Corpus-level BLEU
//!
//! Sufficient statistics (clipped n-gram matches, n-gram totals, hypothesis
//! and reference lengths) are summed over every segment of the group and the
//! score is computed once from the sums. Averaging per-segment BLEU would give
//! a different, and wrong, number.

pub mod tokenizer;

use crate::config::{BleuConfig, Smoothing};
use crate::error::{Metric, MetricError, Result};
use crate::record::ScoredItem;
use std::collections::HashMap;

/// Stand-in for `ln(0)` so that a zero precision drives the score to zero
const LOG_ZERO: f64 = -9_999_999_999.0;

/// Corpus BLEU result with its components
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BleuScore {
    /// Score on the 0–100 scale
    pub score: f64,
    /// Per-order precisions on the 0–100 scale
    pub precisions: Vec<f64>,
    /// Brevity penalty in `[0, 1]`
    pub brevity_penalty: f64,
    /// Total hypothesis length in tokens
    pub sys_len: usize,
    /// Total reference length in tokens
    pub ref_len: usize,
}

impl BleuScore {
    /// Score rescaled to `[0, 1]`
    pub fn fraction(&self) -> f64 {
        self.score / 100.0
    }
}

/// Accumulated n-gram statistics for a corpus
#[derive(Debug, Clone, PartialEq)]
struct CorpusStats {
    correct: Vec<usize>,
    totals: Vec<usize>,
    sys_len: usize,
    ref_len: usize,
}

impl CorpusStats {
    fn new(order: usize) -> Self {
        Self {
            correct: vec![0; order],
            totals: vec![0; order],
            sys_len: 0,
            ref_len: 0,
        }
    }

    fn add_segment(&mut self, hypothesis: &[String], reference: &[String]) {
        self.sys_len += hypothesis.len();
        self.ref_len += reference.len();

        for (index, (correct, total)) in self
            .correct
            .iter_mut()
            .zip(self.totals.iter_mut())
            .enumerate()
        {
            let n = index + 1;
            let reference_counts = ngram_counts(reference, n);
            for (ngram, count) in ngram_counts(hypothesis, n) {
                *correct += count.min(reference_counts.get(ngram).copied().unwrap_or(0));
            }
            *total += hypothesis.len().saturating_sub(n - 1);
        }
    }
}

fn ngram_counts(tokens: &[String], n: usize) -> HashMap<&[String], usize> {
    let mut counts = HashMap::new();
    if n > 0 && tokens.len() >= n {
        for window in tokens.windows(n) {
            *counts.entry(window).or_insert(0) += 1;
        }
    }
    counts
}

fn log_or_floor(value: f64) -> f64 {
    if value == 0.0 {
        LOG_ZERO
    } else {
        value.ln()
    }
}

fn compute_bleu(stats: &CorpusStats, config: &BleuConfig) -> BleuScore {
    let order = stats.correct.len();
    let mut precisions = vec![0.0; order];
    let mut smooth_mteval = 1.0;

    for n in 1..=order {
        let mut correct = stats.correct[n - 1] as f64;
        let mut total = stats.totals[n - 1] as f64;

        if let Smoothing::AddK(k) = config.smoothing {
            if n > 1 {
                correct += k;
                total += k;
            }
        }

        if total == 0.0 {
            break;
        }

        precisions[n - 1] = if correct == 0.0 {
            match config.smoothing {
                Smoothing::Exp => {
                    smooth_mteval *= 2.0;
                    100.0 / (smooth_mteval * total)
                }
                Smoothing::Floor(value) => 100.0 * value / total,
                Smoothing::None | Smoothing::AddK(_) => 0.0,
            }
        } else {
            100.0 * correct / total
        };
    }

    let brevity_penalty = if stats.sys_len < stats.ref_len {
        if stats.sys_len > 0 {
            (1.0 - stats.ref_len as f64 / stats.sys_len as f64).exp()
        } else {
            0.0
        }
    } else {
        1.0
    };

    let log_sum: f64 = precisions.iter().copied().map(log_or_floor).sum();
    let score = brevity_penalty * (log_sum / order as f64).exp();

    BleuScore {
        score,
        precisions,
        brevity_penalty,
        sys_len: stats.sys_len,
        ref_len: stats.ref_len,
    }
}

/// BLEU over a whole group, one reference per item
pub fn corpus_bleu<'a, I>(items: I, config: &BleuConfig) -> Result<BleuScore>
where
    I: IntoIterator<Item = &'a ScoredItem>,
{
    let order = config.max_ngram_order.max(1);
    let mut stats = CorpusStats::new(order);
    let mut count = 0usize;

    for item in items {
        let hypothesis = tokenizer::tokenize(item.hypothesis(), config.tokenizer, config.lowercase);
        let reference = tokenizer::tokenize(item.reference(), config.tokenizer, config.lowercase);
        stats.add_segment(&hypothesis, &reference);
        count += 1;
    }

    if count == 0 {
        return Err(MetricError::EmptyGroup {
            metric: Metric::Bleu,
        });
    }

    Ok(compute_bleu(&stats, config))
}
