//! Per-language and global aggregation
//!
//! The aggregator scores the full collection as the `global` group and every
//! language on its own. Each summary is an independent full pass over its
//! subset; nothing is derived incrementally from another summary, which keeps
//! corpus-level metrics such as BLEU correct for every group.

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::executor::{auto_select, create_executor, ExecutionMode, NoProgress, ProgressObserver};
use crate::group::{languages_of, partition, GroupKey};
use crate::report::SummaryRow;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;
use translit_eval_core::{MetricsSummary, ScoredItem, GLOBAL_LABEL};

/// Scores collections of items
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    config: EngineConfig,
}

impl Aggregator {
    /// Create an aggregator with the given configuration
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Aggregate over the languages present in `items`
    pub fn aggregate(&self, items: Vec<ScoredItem>) -> Result<AggregatedResult> {
        let languages = languages_of(&items);
        self.aggregate_with_languages(items, languages, &NoProgress)
    }

    /// Aggregate with progress notifications
    pub fn aggregate_with_progress(
        &self,
        items: Vec<ScoredItem>,
        observer: &dyn ProgressObserver,
    ) -> Result<AggregatedResult> {
        let languages = languages_of(&items);
        self.aggregate_with_languages(items, languages, observer)
    }

    /// Aggregate over an explicit language set
    ///
    /// A language in `languages` without items fails with the empty-group
    /// error of its first metric.
    pub fn aggregate_with_languages(
        &self,
        items: Vec<ScoredItem>,
        languages: BTreeSet<String>,
        observer: &dyn ProgressObserver,
    ) -> Result<AggregatedResult> {
        validate_languages(&languages)?;

        let mode = match self.config.execution_mode {
            ExecutionMode::Adaptive => auto_select(
                items.len(),
                languages.len(),
                self.config.parallel_threshold,
            ),
            mode => mode,
        };
        let executor = create_executor(mode, self.config.threads);

        log::info!(
            "aggregating {} items over {} languages ({:?})",
            items.len(),
            languages.len(),
            executor.mode()
        );

        let groups = partition(&items, &languages);
        let scored = executor.score_groups(&groups, &self.config.scoring, observer)?;

        let mut global = None;
        let mut by_language = BTreeMap::new();
        for (key, summary) in scored {
            match key {
                GroupKey::Global => global = Some(summary),
                GroupKey::Language(code) => {
                    by_language.insert(code, summary);
                }
            }
        }

        let global = global.ok_or_else(|| {
            EngineError::ConfigError("executor returned no global summary".to_string())
        })?;

        Ok(AggregatedResult {
            items,
            languages,
            global,
            by_language,
        })
    }
}

fn validate_languages(languages: &BTreeSet<String>) -> Result<()> {
    if languages.contains(GLOBAL_LABEL) {
        return Err(EngineError::malformed(format!(
            "language code '{GLOBAL_LABEL}' is reserved for the merged summary"
        )));
    }
    if languages.iter().any(|code| code.trim().is_empty()) {
        return Err(EngineError::malformed("empty language code"));
    }
    Ok(())
}

/// Summaries for the whole collection and for each language
///
/// Built once by [`Aggregator`] and never mutated.
#[derive(Debug, Clone)]
pub struct AggregatedResult {
    items: Vec<ScoredItem>,
    languages: BTreeSet<String>,
    global: MetricsSummary,
    by_language: BTreeMap<String, MetricsSummary>,
}

impl AggregatedResult {
    /// Scored items
    pub fn items(&self) -> &[ScoredItem] {
        &self.items
    }

    /// Distinct languages, in lexicographic order
    pub fn languages(&self) -> &BTreeSet<String> {
        &self.languages
    }

    /// Summary over every item
    pub fn global(&self) -> &MetricsSummary {
        &self.global
    }

    /// Summary for one language
    pub fn language(&self, code: &str) -> Option<&MetricsSummary> {
        self.by_language.get(code)
    }

    /// Summary by key: `global` or a language code
    pub fn get(&self, key: &GroupKey) -> Option<&MetricsSummary> {
        match key {
            GroupKey::Global => Some(&self.global),
            GroupKey::Language(code) => self.language(code),
        }
    }

    /// Language summaries in language order
    pub fn per_language(&self) -> &BTreeMap<String, MetricsSummary> {
        &self.by_language
    }

    /// Every summary: languages first, `global` last
    pub fn summaries(&self) -> impl Iterator<Item = (GroupKey, &MetricsSummary)> {
        self.by_language
            .iter()
            .map(|(code, summary)| (GroupKey::Language(code.clone()), summary))
            .chain(std::iter::once((GroupKey::Global, &self.global)))
    }

    /// Plain-text report: one block per language, then `global`
    pub fn text_report(&self) -> String {
        let mut out = String::new();
        for (key, summary) in self.summaries() {
            // Writing to a String cannot fail
            let _ = write!(out, "{key}:\n{summary}\n");
        }
        out
    }

    /// Flattened table: one row per language plus a `global` row
    pub fn summary_table(&self) -> Vec<SummaryRow> {
        self.summaries()
            .map(|(key, summary)| SummaryRow::from_summary(key.label(), summary))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ScoredItem> {
        vec![
            ScoredItem::new("en", "c a t", "c a t"),
            ScoredItem::new("en", "d o g", "d o g"),
            ScoredItem::new("ru", "k o t", "k o d"),
        ]
    }

    #[test]
    fn test_aggregate_groups() {
        let result = Aggregator::default().aggregate(sample()).unwrap();

        assert_eq!(result.languages().len(), 2);
        assert_eq!(result.global().language, "global");
        assert_eq!(result.global().word_accuracy, 66.66667);
        assert_eq!(result.language("en").unwrap().word_accuracy, 100.0);
        assert_eq!(result.language("ru").unwrap().word_accuracy, 0.0);
        assert!(result.language("fr").is_none());
    }

    #[test]
    fn test_get_by_key() {
        let result = Aggregator::default().aggregate(sample()).unwrap();

        assert_eq!(result.get(&GroupKey::Global), Some(result.global()));
        assert_eq!(
            result.get(&GroupKey::Language("ru".to_string())),
            result.language("ru")
        );
        assert!(result.get(&GroupKey::Language("fr".to_string())).is_none());
    }

    #[test]
    fn test_single_language_identity() {
        let items = vec![
            ScoredItem::new("hi", "k a m a l", "k a m a l"),
            ScoredItem::new("hi", "r a m", "r a a m"),
        ];
        let result = Aggregator::default().aggregate(items).unwrap();

        assert_eq!(result.global(), result.language("hi").unwrap());
        assert_eq!(result.global().language, "hi");
    }

    #[test]
    fn test_reserved_language_rejected() {
        let items = vec![ScoredItem::new("global", "a", "a")];
        let err = Aggregator::default().aggregate(items).unwrap_err();
        assert!(matches!(err, EngineError::MalformedInput { .. }));
    }

    #[test]
    fn test_missing_language_fails_with_group_name() {
        let languages: BTreeSet<String> = ["en", "fr"].iter().map(|s| s.to_string()).collect();
        let err = Aggregator::default()
            .aggregate_with_languages(sample(), languages, &NoProgress)
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "group 'fr': word accuracy is undefined for an empty group"
        );
    }

    #[test]
    fn test_empty_collection_fails() {
        let err = Aggregator::default().aggregate(Vec::new()).unwrap_err();
        assert!(err.to_string().starts_with("group 'global':"));
    }

    #[test]
    fn test_text_report_layout() {
        let items = vec![ScoredItem::new("en", "c a t", "c a t")];
        let result = Aggregator::default().aggregate(items).unwrap();
        let block = "Word Accuracy\t100.0000\nMean F1\t100.0000\nCER\t0.0000\nWER\t0.0000\nBLEU\t0.0000\n\n";

        assert_eq!(
            result.text_report(),
            format!("en:\n{block}global:\n{block}")
        );
    }

    #[test]
    fn test_summary_table_rows() {
        let result = Aggregator::default().aggregate(sample()).unwrap();
        let rows = result.summary_table();
        let labels: Vec<&str> = rows.iter().map(|row| row.language.as_str()).collect();

        assert_eq!(labels, vec!["en", "ru", "global"]);
        assert_eq!(rows[2].accuracy, 66.667);
    }
}
