//! TSV output formatter

use super::ReportFormatter;
use anyhow::Result;
use csv::WriterBuilder;
use std::io::Write;
use translit_eval_engine::AggregatedResult;

/// TSV formatter - summary table with a header row
pub struct TsvFormatter;

impl ReportFormatter for TsvFormatter {
    fn write_report(&self, result: &AggregatedResult, writer: &mut dyn Write) -> Result<()> {
        let mut table = WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .from_writer(writer);

        for row in result.summary_table() {
            table.serialize(row)?;
        }
        table.flush()?;
        Ok(())
    }
}
