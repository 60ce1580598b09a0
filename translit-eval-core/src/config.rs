//! Scoring configuration

/// Default number of fractional digits kept in a summary
pub const DEFAULT_ROUNDING: u32 = 5;

/// How per-item F1 treats zero-length strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LengthPolicy {
    /// Two empty strings score 1, one empty string scores 0
    #[default]
    Lenient,
    /// Any empty reference or hypothesis is an error
    Strict,
}

/// Smoothing applied to zero n-gram matches in BLEU
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "method", content = "value", rename_all = "kebab-case")
)]
pub enum Smoothing {
    /// Zero matches give a zero precision
    None,
    /// Replace zero matches with a small constant
    Floor(f64),
    /// Add `k` to matches and totals for orders above one
    AddK(f64),
    /// Halve the pseudo-count for every successive zero-match order
    #[default]
    Exp,
}

impl Smoothing {
    /// Default floor constant
    pub const DEFAULT_FLOOR: f64 = 0.1;
    /// Default add-k constant
    pub const DEFAULT_ADD_K: f64 = 1.0;
}

/// Tokenization applied to each BLEU segment before n-gram counting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BleuTokenizer {
    /// mteval-v13a punctuation splitting
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "13a"))]
    Mteval13a,
    /// Whitespace splitting only
    #[cfg_attr(feature = "serde", serde(rename = "none"))]
    None,
}

/// Corpus BLEU parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BleuConfig {
    /// Highest n-gram order
    pub max_ngram_order: usize,
    /// Smoothing method
    pub smoothing: Smoothing,
    /// Segment tokenizer
    pub tokenizer: BleuTokenizer,
    /// Lowercase segments before tokenizing
    pub lowercase: bool,
}

impl Default for BleuConfig {
    fn default() -> Self {
        Self {
            max_ngram_order: 4,
            smoothing: Smoothing::Exp,
            tokenizer: BleuTokenizer::Mteval13a,
            lowercase: false,
        }
    }
}

/// Everything needed to turn a group of items into a summary
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoringConfig {
    /// Fractional digits kept in summary fields
    pub rounding: u32,
    /// Zero-length handling for F1
    pub length_policy: LengthPolicy,
    /// BLEU parameters
    pub bleu: BleuConfig,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            rounding: DEFAULT_ROUNDING,
            length_policy: LengthPolicy::Lenient,
            bleu: BleuConfig::default(),
        }
    }
}

impl ScoringConfig {
    /// Configuration that rejects empty strings in F1
    pub fn strict() -> Self {
        Self {
            length_policy: LengthPolicy::Strict,
            ..Default::default()
        }
    }

    /// Set the rounding precision
    pub fn with_rounding(mut self, rounding: u32) -> Self {
        self.rounding = rounding;
        self
    }

    /// Set the zero-length policy
    pub fn with_length_policy(mut self, policy: LengthPolicy) -> Self {
        self.length_policy = policy;
        self
    }

    /// Set BLEU parameters
    pub fn with_bleu(mut self, bleu: BleuConfig) -> Self {
        self.bleu = bleu;
        self
    }
}
