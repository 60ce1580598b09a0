//! Grouping of items by language

use crate::error::{EngineError, Result};
use std::collections::BTreeSet;
use std::fmt;
use translit_eval_core::{MetricsSummary, ScoredItem, ScoringConfig, GLOBAL_LABEL};

/// Identifies one summary in an aggregated result
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GroupKey {
    /// Every item
    Global,
    /// Items of one language
    Language(String),
}

impl GroupKey {
    /// Label used in reports
    pub fn label(&self) -> &str {
        match self {
            GroupKey::Global => GLOBAL_LABEL,
            GroupKey::Language(code) => code,
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A borrowed subset of the item collection
#[derive(Debug, Clone)]
pub struct Group<'a> {
    /// Which summary this group produces
    pub key: GroupKey,
    /// Items in the group
    pub items: Vec<&'a ScoredItem>,
}

impl<'a> Group<'a> {
    /// Score the group, tagging failures with its label
    pub fn score(&self, config: &ScoringConfig) -> Result<MetricsSummary> {
        MetricsSummary::compute(&self.items, config)
            .map_err(|source| EngineError::metric(self.key.label(), source))
    }
}

/// Split items into the global group followed by one group per language
///
/// Languages are taken from `languages`, in its order. A language with no
/// items yields an empty group, which fails when scored.
pub fn partition<'a>(items: &'a [ScoredItem], languages: &BTreeSet<String>) -> Vec<Group<'a>> {
    let mut groups = Vec::with_capacity(languages.len() + 1);

    groups.push(Group {
        key: GroupKey::Global,
        items: items.iter().collect(),
    });

    for language in languages {
        groups.push(Group {
            key: GroupKey::Language(language.clone()),
            items: items
                .iter()
                .filter(|item| item.language() == language)
                .collect(),
        });
    }

    groups
}

/// Distinct language codes present in `items`
pub fn languages_of(items: &[ScoredItem]) -> BTreeSet<String> {
    items
        .iter()
        .map(|item| item.language().to_string())
        .collect()
}
