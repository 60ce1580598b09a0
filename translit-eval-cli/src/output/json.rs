//! JSON output formatter

use super::ReportFormatter;
use anyhow::Result;
use std::io::Write;
use translit_eval_engine::{AggregatedResult, JsonReport};

/// JSON formatter - `{"global": ..., "languages": {...}}`
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl ReportFormatter for JsonFormatter {
    fn write_report(&self, result: &AggregatedResult, writer: &mut dyn Write) -> Result<()> {
        let report = JsonReport::from(result);
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, &report)?;
        } else {
            serde_json::to_writer(&mut *writer, &report)?;
        }
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
