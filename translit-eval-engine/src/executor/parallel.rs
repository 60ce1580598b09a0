//! Parallel execution strategy

use crate::{
    error::{EngineError, Result},
    executor::{ExecutionMode, Executor, ProgressObserver},
    group::{Group, GroupKey},
};
use rayon::prelude::*;
use translit_eval_core::{MetricsSummary, ScoringConfig};

/// Multi-threaded executor scoring one group per task
#[derive(Debug, Clone)]
pub struct ParallelExecutor {
    threads: Option<usize>,
}

impl ParallelExecutor {
    /// Create a new parallel executor (None = one thread per core)
    pub fn new(threads: Option<usize>) -> Self {
        Self { threads }
    }

    /// Number of worker threads the pool will use
    pub fn thread_count(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get).max(1)
    }
}

impl Executor for ParallelExecutor {
    fn score_groups(
        &self,
        groups: &[Group<'_>],
        scoring: &ScoringConfig,
        observer: &dyn ProgressObserver,
    ) -> Result<Vec<(GroupKey, MetricsSummary)>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.thread_count())
            .build()
            .map_err(|e| EngineError::ParallelError(e.to_string()))?;

        log::debug!(
            "scoring {} groups on {} threads",
            groups.len(),
            self.thread_count()
        );

        // Groups share the item collection read-only; each task owns its summary
        pool.install(|| {
            groups
                .par_iter()
                .map(|group| {
                    let summary = group.score(scoring)?;
                    observer.group_completed(&group.key);
                    Ok((group.key.clone(), summary))
                })
                .collect::<Result<Vec<_>>>()
        })
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
