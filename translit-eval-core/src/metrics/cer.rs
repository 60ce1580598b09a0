//! Character error rate

use crate::edit_distance::edit_distance;
use crate::error::{Metric, MetricError, Result};
use crate::record::ScoredItem;

/// Corpus-level character error rate
///
/// Words are stored as space-separated characters, so a word error rate over
/// whitespace tokens is a character error rate over the original words. Edit
/// distances are summed over all items and divided by the total number of
/// reference tokens; this is not a mean of per-item rates.
pub fn character_error_rate<'a, I>(items: I) -> Result<f64>
where
    I: IntoIterator<Item = &'a ScoredItem>,
{
    let mut total_edits = 0usize;
    let mut total_reference = 0usize;
    let mut count = 0usize;

    for item in items {
        let reference: Vec<&str> = item.reference().split_whitespace().collect();
        let hypothesis: Vec<&str> = item.hypothesis().split_whitespace().collect();

        total_edits += edit_distance(&reference, &hypothesis);
        total_reference += reference.len();
        count += 1;
    }

    if count == 0 {
        return Err(MetricError::EmptyGroup { metric: Metric::Cer });
    }
    if total_reference == 0 {
        return Err(MetricError::DegenerateLength {
            metric: Metric::Cer,
            reason: "all references are empty".to_string(),
        });
    }

    Ok(total_edits as f64 / total_reference as f64)
}
