//! Basic tests for translit-eval-engine

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use translit_eval_engine::*;

fn mixed_items() -> Vec<ScoredItem> {
    vec![
        ScoredItem::new("ru", "k o t", "k o t"),
        ScoredItem::new("ru", "d o m", "t o m"),
        ScoredItem::new("hi", "k a m a l", "k a m a l"),
        ScoredItem::new("hi", "r a m", "r a a m"),
        ScoredItem::new("en", "c a t", "b a t"),
        ScoredItem::new("en", "d o g", "d o g"),
    ]
}

#[test]
fn test_engine_config_creation() {
    let config = EngineConfig::default();
    assert_eq!(config.parallel_threshold, 10_000);
    assert_eq!(config.execution_mode, ExecutionMode::Adaptive);

    let sequential = EngineConfig::sequential();
    assert_eq!(sequential.threads, Some(1));
}

#[test]
fn test_execution_mode_selection() {
    use translit_eval_engine::executor::auto_select;

    assert_eq!(auto_select(500, 3, 10_000), ExecutionMode::Sequential);
    assert_eq!(auto_select(50_000, 1, 10_000), ExecutionMode::Sequential);

    #[cfg(feature = "parallel")]
    assert_eq!(auto_select(50_000, 3, 10_000), ExecutionMode::Parallel);
}

#[test]
fn test_global_bleu_independent_of_partition() {
    let items = mixed_items();
    let result = Aggregator::default().aggregate(items.clone()).unwrap();

    // Relabelling every item to one language must not change the corpus score
    let merged: Vec<ScoredItem> = items
        .iter()
        .map(|item| ScoredItem::new("xx", item.reference(), item.hypothesis()))
        .collect();
    let single = Aggregator::default().aggregate(merged).unwrap();

    assert_eq!(result.global().bleu, single.global().bleu);
    assert_eq!(
        result.global().character_error_rate,
        single.global().character_error_rate
    );
}

#[test]
fn test_single_language_identity() {
    let items: Vec<ScoredItem> = mixed_items()
        .into_iter()
        .filter(|item| item.language() == "hi")
        .collect();
    let result = Aggregator::default().aggregate(items).unwrap();

    let global = result.global();
    let hindi = result.language("hi").unwrap();
    assert_eq!(global, hindi);
    assert_eq!(result.summary_table().len(), 2);
}

#[test]
fn test_language_order_is_lexicographic() {
    let result = Aggregator::default().aggregate(mixed_items()).unwrap();
    let labels: Vec<String> = result
        .summaries()
        .map(|(key, _)| key.label().to_string())
        .collect();

    assert_eq!(labels, vec!["en", "hi", "ru", "global"]);
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_matches_sequential() {
    let sequential = Aggregator::new(EngineConfig::sequential())
        .unwrap()
        .aggregate(mixed_items())
        .unwrap();
    let parallel = Aggregator::new(EngineConfig::parallel().with_threads(Some(2)))
        .unwrap()
        .aggregate(mixed_items())
        .unwrap();

    assert_eq!(sequential.global(), parallel.global());
    assert_eq!(sequential.per_language(), parallel.per_language());
    assert_eq!(sequential.text_report(), parallel.text_report());
}

#[test]
fn test_progress_observer_sees_every_group() {
    struct Counter(AtomicUsize);

    impl ProgressObserver for Counter {
        fn group_completed(&self, _key: &GroupKey) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    let counter = Counter(AtomicUsize::new(0));
    Aggregator::default()
        .aggregate_with_progress(mixed_items(), &counter)
        .unwrap();

    assert_eq!(counter.0.load(Ordering::SeqCst), 4);
}

#[test]
fn test_strict_lengths_report_group() {
    let items = vec![
        ScoredItem::new("en", "c a t", "c a t"),
        ScoredItem::new("ru", "k o t", ""),
    ];
    let config = EngineConfig::default().with_length_policy(LengthPolicy::Strict);
    let err = Aggregator::new(config)
        .unwrap()
        .aggregate(items)
        .unwrap_err();

    // The global group is scored first and already contains the empty item
    assert!(err.to_string().starts_with("group 'global': mean F1 is undefined"));
}

#[test]
fn test_explicit_language_set() {
    let languages: BTreeSet<String> = ["en".to_string()].into_iter().collect();
    let result = Aggregator::default()
        .aggregate_with_languages(mixed_items(), languages, &NoProgress)
        .unwrap();

    assert_eq!(result.per_language().len(), 1);
    assert_eq!(result.items().len(), 6);
    assert_eq!(result.global().language, GLOBAL_LABEL);
}

#[test]
fn test_invalid_config_rejected() {
    let config = EngineConfig::default().with_threads(Some(0));
    assert!(matches!(
        Aggregator::new(config),
        Err(EngineError::ConfigError(_))
    ));
}

#[test]
fn test_table_input_end_to_end() {
    let table = "k o t\tk o t\tкот\tru\nc a t\tb a t\tcat\ten\n";
    let items = ingest::read_table(table.as_bytes(), TableLayout::Positional).unwrap();
    let result = Aggregator::default().aggregate(items).unwrap();

    assert_eq!(result.global().word_accuracy, 50.0);
    assert_eq!(result.language("ru").unwrap().word_accuracy, 100.0);
    assert_eq!(result.language("en").unwrap().word_error, 100.0);
}
