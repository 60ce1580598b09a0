//! Exact-match word accuracy

use crate::error::{Metric, MetricError, Result};
use crate::record::ScoredItem;

/// Fraction of items whose hypothesis equals the reference exactly
pub fn word_accuracy<'a, I>(items: I) -> Result<f64>
where
    I: IntoIterator<Item = &'a ScoredItem>,
{
    let (matches, count) = items
        .into_iter()
        .fold((0usize, 0usize), |(matches, count), item| {
            (matches + usize::from(item.is_exact_match()), count + 1)
        });

    if count == 0 {
        return Err(MetricError::EmptyGroup {
            metric: Metric::WordAccuracy,
        });
    }

    Ok(matches as f64 / count as f64)
}
