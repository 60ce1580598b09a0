//! Input adapters producing [`ScoredItem`] collections

pub mod aligned;
pub mod table;

pub use aligned::{align, lines_from_reader, read_lines, AlignedFiles};
pub use table::{read_table, read_table_file, TableLayout};

use crate::error::Result;
use std::path::PathBuf;
use translit_eval_core::ScoredItem;

/// Where the items come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Line-aligned reference, hypothesis, source and language files
    Aligned(AlignedFiles),
    /// One tab-separated table
    Table {
        /// Table file
        path: PathBuf,
        /// Column layout
        layout: TableLayout,
    },
}

impl InputSource {
    /// Read every item
    pub fn load(&self) -> Result<Vec<ScoredItem>> {
        let items = match self {
            InputSource::Aligned(files) => files.read()?,
            InputSource::Table { path, layout } => read_table_file(path, *layout)?,
        };
        log::info!("loaded {} items", items.len());
        Ok(items)
    }
}
