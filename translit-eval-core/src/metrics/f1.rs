//! LCS-based F1
//!
//! The longest common subsequence is recovered from the Levenshtein distance
//! with `lcs = ((|R| + |H|) - d) / 2`. Recall divides by the hypothesis length
//! and precision by the reference length. Both operate on the literal strings,
//! separator spaces included.

use crate::config::LengthPolicy;
use crate::edit_distance::edit_distance;
use crate::error::{Metric, MetricError, Result};
use crate::record::ScoredItem;

/// F1 for a single reference/hypothesis pair
///
/// Zero-length strings are handled according to `policy`: under
/// [`LengthPolicy::Lenient`] two empty strings score 1 and a single empty
/// string scores 0; under [`LengthPolicy::Strict`] both cases are errors.
pub fn item_f1(reference: &str, hypothesis: &str, policy: LengthPolicy) -> Result<f64> {
    let reference: Vec<char> = reference.chars().collect();
    let hypothesis: Vec<char> = hypothesis.chars().collect();

    if reference.is_empty() || hypothesis.is_empty() {
        return match policy {
            LengthPolicy::Lenient => Ok(if reference.is_empty() && hypothesis.is_empty() {
                1.0
            } else {
                0.0
            }),
            LengthPolicy::Strict => Err(MetricError::DegenerateLength {
                metric: Metric::MeanF1,
                reason: empty_side(reference.is_empty(), hypothesis.is_empty()).to_string(),
            }),
        };
    }

    let distance = edit_distance(&reference, &hypothesis);
    let lcs = 0.5 * ((reference.len() + hypothesis.len()) as f64 - distance as f64);

    let recall = lcs / hypothesis.len() as f64;
    let precision = lcs / reference.len() as f64;

    if recall + precision > 0.0 {
        Ok(2.0 * (recall * precision) / (recall + precision))
    } else {
        Ok(0.0)
    }
}

fn empty_side(reference: bool, hypothesis: bool) -> &'static str {
    match (reference, hypothesis) {
        (true, true) => "empty reference and hypothesis",
        (true, false) => "empty reference",
        _ => "empty hypothesis",
    }
}

/// Arithmetic mean of [`item_f1`] over a group
pub fn mean_f1<'a, I>(items: I, policy: LengthPolicy) -> Result<f64>
where
    I: IntoIterator<Item = &'a ScoredItem>,
{
    let mut sum = 0.0;
    let mut count = 0usize;

    for (index, item) in items.into_iter().enumerate() {
        sum += item_f1(item.reference(), item.hypothesis(), policy).map_err(|err| match err {
            MetricError::DegenerateLength { metric, reason } => MetricError::DegenerateLength {
                metric,
                reason: format!("item {index} has an {reason}"),
            },
            other => other,
        })?;
        count += 1;
    }

    if count == 0 {
        return Err(MetricError::EmptyGroup {
            metric: Metric::MeanF1,
        });
    }

    Ok(sum / count as f64)
}
