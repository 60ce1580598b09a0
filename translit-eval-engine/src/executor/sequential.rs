//! Sequential execution strategy

use crate::{
    error::Result,
    executor::{ExecutionMode, Executor, ProgressObserver},
    group::{Group, GroupKey},
};
use translit_eval_core::{MetricsSummary, ScoringConfig};

/// Sequential single-threaded executor
#[derive(Debug, Clone)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn score_groups(
        &self,
        groups: &[Group<'_>],
        scoring: &ScoringConfig,
        observer: &dyn ProgressObserver,
    ) -> Result<Vec<(GroupKey, MetricsSummary)>> {
        let mut summaries = Vec::with_capacity(groups.len());

        for group in groups {
            log::debug!("scoring group '{}' ({} items)", group.key, group.items.len());
            let summary = group.score(scoring)?;
            observer.group_completed(&group.key);
            summaries.push((group.key.clone(), summary));
        }

        Ok(summaries)
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
