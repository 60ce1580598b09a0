//! Combined tab-separated table input
//!
//! Quoting is disabled, so quote characters are ordinary text.

use crate::error::{EngineError, Result};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use translit_eval_core::ScoredItem;

/// Column names recognised in a header row
pub const COLUMN_NAMES: [&str; 4] = ["ref", "hyp", "src", "language"];

/// How columns are located
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableLayout {
    /// No header; columns are `ref, hyp, src, language` in order
    #[default]
    Positional,
    /// First row names the columns, in any order
    Header,
}

#[derive(Debug, Clone, Copy)]
struct Columns {
    reference: usize,
    hypothesis: usize,
    source: usize,
    language: usize,
}

impl Columns {
    const POSITIONAL: Columns = Columns {
        reference: 0,
        hypothesis: 1,
        source: 2,
        language: 3,
    };

    fn from_header(header: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            header
                .iter()
                .position(|field| field.trim() == name)
                .ok_or_else(|| EngineError::malformed(format!("table has no '{name}' column")))
        };

        Ok(Self {
            reference: find(COLUMN_NAMES[0])?,
            hypothesis: find(COLUMN_NAMES[1])?,
            source: find(COLUMN_NAMES[2])?,
            language: find(COLUMN_NAMES[3])?,
        })
    }

    fn width(&self) -> usize {
        [self.reference, self.hypothesis, self.source, self.language]
            .into_iter()
            .max()
            .unwrap_or(0)
            + 1
    }
}

/// Read items from a table file
pub fn read_table_file(path: &Path, layout: TableLayout) -> Result<Vec<ScoredItem>> {
    let file = File::open(path).map_err(|source| EngineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let items = read_table(file, layout)?;
    log::debug!("read {} rows from {}", items.len(), path.display());
    Ok(items)
}

/// Read items from any tab-separated source
pub fn read_table<R: Read>(reader: R, layout: TableLayout) -> Result<Vec<ScoredItem>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .has_headers(layout == TableLayout::Header)
        .flexible(true)
        .from_reader(reader);

    let columns = match layout {
        TableLayout::Positional => Columns::POSITIONAL,
        TableLayout::Header => Columns::from_header(reader.headers()?)?,
    };
    let width = columns.width();
    let first_row = if layout == TableLayout::Header { 2 } else { 1 };

    let mut items = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() < width {
            return Err(EngineError::malformed(format!(
                "table row {} has {} columns, expected {}",
                index + first_row,
                record.len(),
                width
            )));
        }

        let field = |column: usize| record.get(column).unwrap_or_default();
        let language = field(columns.language);
        if language.is_empty() {
            return Err(EngineError::malformed(format!(
                "empty language code in table row {}",
                index + first_row
            )));
        }

        items.push(
            ScoredItem::new(
                language,
                field(columns.reference),
                field(columns.hypothesis),
            )
            .with_source(field(columns.source)),
        );
    }

    Ok(items)
}
