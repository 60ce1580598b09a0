//! Group-level metric functions
//!
//! Every function takes the items of one group and returns a fraction in
//! `[0, 1]` (CER may exceed 1 when hypotheses are much longer than
//! references). Scaling to percentages happens in [`crate::MetricsSummary`].

pub mod accuracy;
pub mod bleu;
pub mod cer;
pub mod f1;

pub use accuracy::word_accuracy;
pub use bleu::{corpus_bleu, BleuScore};
pub use cer::character_error_rate;
pub use f1::{item_f1, mean_f1};
