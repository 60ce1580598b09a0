//! Scored item record

/// One evaluated transliteration pair
///
/// `reference` and `hypothesis` hold words as space-separated characters
/// (`"c a t"`), so token-level metrics operate at character granularity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredItem {
    language: String,
    reference: String,
    hypothesis: String,
    #[cfg_attr(feature = "serde", serde(default))]
    source: String,
}

impl ScoredItem {
    /// Create an item without a source word
    pub fn new(
        language: impl Into<String>,
        reference: impl Into<String>,
        hypothesis: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            reference: reference.into(),
            hypothesis: hypothesis.into(),
            source: String::new(),
        }
    }

    /// Attach the original word
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Language code of this item
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Ground-truth transliteration
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// System output
    pub fn hypothesis(&self) -> &str {
        &self.hypothesis
    }

    /// Original word, empty when not supplied
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the hypothesis equals the reference exactly
    pub fn is_exact_match(&self) -> bool {
        self.hypothesis == self.reference
    }
}
