//! Execution strategies for scoring groups

use crate::error::Result;
use crate::group::{Group, GroupKey};
use translit_eval_core::{MetricsSummary, ScoringConfig};

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

// Re-export executors
#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Score groups one after another on the calling thread
    Sequential,
    /// Score groups on a worker pool
    Parallel,
    /// Pick one of the above from the input size
    Adaptive,
}

/// Notified after each group is scored
pub trait ProgressObserver: Sync {
    /// Called once per finished group, from any worker thread
    fn group_completed(&self, key: &GroupKey);
}

/// Observer that ignores progress
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn group_completed(&self, _key: &GroupKey) {}
}

/// Trait for execution strategies
pub trait Executor: Send + Sync {
    /// Score every group, returning summaries in group order
    fn score_groups(
        &self,
        groups: &[Group<'_>],
        scoring: &ScoringConfig,
        observer: &dyn ProgressObserver,
    ) -> Result<Vec<(GroupKey, MetricsSummary)>>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Choose sequential or parallel execution from the input shape
///
/// A single language means the global and language groups are the same
/// work, so the pool only pays off with several languages and many items.
pub fn auto_select(item_count: usize, language_count: usize, threshold: usize) -> ExecutionMode {
    if language_count < 2 || item_count < threshold {
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}

/// Build the executor for a resolved mode
///
/// `Adaptive` must be resolved with [`auto_select`] first; it falls back to
/// sequential here.
pub fn create_executor(mode: ExecutionMode, threads: Option<usize>) -> Box<dyn Executor> {
    match mode {
        #[cfg(feature = "parallel")]
        ExecutionMode::Parallel => Box::new(ParallelExecutor::new(threads)),
        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Parallel => {
            let _ = threads;
            log::warn!("built without the parallel feature, scoring sequentially");
            Box::new(SequentialExecutor)
        }
        ExecutionMode::Sequential | ExecutionMode::Adaptive => Box::new(SequentialExecutor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_select_small_input() {
        assert_eq!(auto_select(10, 5, 10_000), ExecutionMode::Sequential);
    }

    #[test]
    fn test_auto_select_single_language() {
        assert_eq!(auto_select(1_000_000, 1, 10_000), ExecutionMode::Sequential);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_auto_select_large_input() {
        assert_eq!(auto_select(50_000, 4, 10_000), ExecutionMode::Parallel);
    }

    #[test]
    fn test_create_sequential() {
        let executor = create_executor(ExecutionMode::Sequential, None);
        assert_eq!(executor.mode(), ExecutionMode::Sequential);
    }
}
