//! Output formatting module
//!
//! Formatters write a complete report for one [`AggregatedResult`]. Callers
//! render into memory first so a failure never leaves a partial file behind.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use translit_eval_engine::AggregatedResult;

pub mod json;
pub mod text;
pub mod tsv;

pub use json::JsonFormatter;
pub use text::TextFormatter;
pub use tsv::TsvFormatter;

/// Trait for report formatters
pub trait ReportFormatter {
    /// Write the full report
    fn write_report(&self, result: &AggregatedResult, writer: &mut dyn Write) -> Result<()>;

    /// Render the full report into memory
    fn render(&self, result: &AggregatedResult) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_report(result, &mut buffer)?;
        Ok(buffer)
    }
}

/// Supported output formats
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Per-language metric blocks followed by the global block
    #[default]
    Text,
    /// Tab-separated table of CER, accuracy and F1
    Tsv,
    /// JSON document with every summary
    Json,
}

impl OutputFormat {
    /// All formats in listing order
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Text, OutputFormat::Tsv, OutputFormat::Json];

    /// Name accepted by `--format`
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Metric blocks per language, then global",
            OutputFormat::Tsv => "Language/CER/Accuracy/F1 table, values rounded to 3 digits",
            OutputFormat::Json => "All summaries as a JSON document",
        }
    }
}

/// Create the formatter for a format
pub fn create_formatter(format: OutputFormat, pretty_json: bool) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Tsv => Box::new(TsvFormatter),
        OutputFormat::Json => Box::new(JsonFormatter::new(pretty_json)),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names() {
        let names: Vec<&str> = OutputFormat::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["text", "tsv", "json"]);
    }

    #[test]
    fn test_render_matches_write() {
        let result = test_support::sample_result();
        let formatter = create_formatter(OutputFormat::Text, true);

        let mut written = Vec::new();
        formatter.write_report(&result, &mut written).unwrap();
        assert_eq!(formatter.render(&result).unwrap(), written);
    }
}
