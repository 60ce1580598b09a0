//! Text output formatter

use super::ReportFormatter;
use anyhow::Result;
use std::io::Write;
use translit_eval_engine::AggregatedResult;

/// Text formatter - one metric block per language, then `global`
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn write_report(&self, result: &AggregatedResult, writer: &mut dyn Write) -> Result<()> {
        writer.write_all(result.text_report().as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
