//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use translit_eval_engine::{GroupKey, ProgressObserver};

/// Progress reporter for group scoring
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize progress bar for the given number of groups
    pub fn init_groups(&mut self, total_groups: u64) {
        if self.quiet {
            return;
        }

        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} groups {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");

        let pb = ProgressBar::new(total_groups);
        pb.set_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message("Complete");
        }
    }
}

impl ProgressObserver for ProgressReporter {
    fn group_completed(&self, key: &GroupKey) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Scored: {key}"));
            pb.inc(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_has_no_bar() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init_groups(3);
        assert!(reporter.progress_bar.is_none());

        // Observing without a bar is a no-op
        reporter.group_completed(&GroupKey::Global);
        reporter.finish();
    }

    #[test]
    fn test_counts_groups() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_groups(2);
        reporter.group_completed(&GroupKey::Language("ru".to_string()));
        reporter.group_completed(&GroupKey::Global);

        let position = reporter.progress_bar.as_ref().map(|pb| pb.position());
        assert_eq!(position, Some(2));
        reporter.finish();
    }
}
