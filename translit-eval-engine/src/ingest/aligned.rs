//! Line-aligned input files
//!
//! Line `i` of every file belongs to item `i`. Lines are trimmed of
//! surrounding whitespace before use.

use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use translit_eval_core::ScoredItem;

/// Paths of the aligned input files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedFiles {
    /// Reference transliterations
    pub references: PathBuf,
    /// System transliterations
    pub hypotheses: PathBuf,
    /// Source words, optional
    pub sources: Option<PathBuf>,
    /// Language codes
    pub languages: PathBuf,
}

impl AlignedFiles {
    /// Create without a sources file
    pub fn new(
        references: impl Into<PathBuf>,
        hypotheses: impl Into<PathBuf>,
        languages: impl Into<PathBuf>,
    ) -> Self {
        Self {
            references: references.into(),
            hypotheses: hypotheses.into(),
            sources: None,
            languages: languages.into(),
        }
    }

    /// Set the sources file
    pub fn with_sources(mut self, sources: impl Into<PathBuf>) -> Self {
        self.sources = Some(sources.into());
        self
    }

    /// Read and align all files
    pub fn read(&self) -> Result<Vec<ScoredItem>> {
        let references = read_lines(&self.references)?;
        let hypotheses = read_lines(&self.hypotheses)?;
        let sources = self.sources.as_deref().map(read_lines).transpose()?;
        let languages = read_lines(&self.languages)?;

        align(references, hypotheses, sources, languages)
    }
}

/// Read a UTF-8 file as trimmed lines
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let io_error = |source| EngineError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let lines = lines_from_reader(BufReader::new(file)).map_err(io_error)?;
    log::debug!("read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Collect trimmed lines from any reader
pub fn lines_from_reader<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader
        .lines()
        .map(|line| line.map(|line| line.trim().to_string()))
        .collect()
}

/// Zip aligned line sequences into items
///
/// All sequences must have the same length and every language line must be
/// non-empty.
pub fn align(
    references: Vec<String>,
    hypotheses: Vec<String>,
    sources: Option<Vec<String>>,
    languages: Vec<String>,
) -> Result<Vec<ScoredItem>> {
    let expected = references.len();
    let mut counts = vec![
        ("references", references.len()),
        ("hypotheses", hypotheses.len()),
        ("languages", languages.len()),
    ];
    if let Some(sources) = &sources {
        counts.push(("sources", sources.len()));
    }

    if counts.iter().any(|(_, count)| *count != expected) {
        let detail = counts
            .iter()
            .map(|(name, count)| format!("{name} has {count} lines"))
            .collect::<Vec<_>>()
            .join(", ");
        return Err(EngineError::malformed(format!(
            "input files are not aligned: {detail}"
        )));
    }

    let mut sources = sources.map(Vec::into_iter);
    let mut items = Vec::with_capacity(expected);

    for (index, ((reference, hypothesis), language)) in references
        .into_iter()
        .zip(hypotheses)
        .zip(languages)
        .enumerate()
    {
        if language.is_empty() {
            return Err(EngineError::malformed(format!(
                "empty language code on line {}",
                index + 1
            )));
        }

        let mut item = ScoredItem::new(language, reference, hypothesis);
        if let Some(source) = sources.as_mut().and_then(|sources| sources.next()) {
            item = item.with_source(source);
        }
        items.push(item);
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn lines(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_lines_trimmed() {
        let input = "  k o t \n\td o m\r\n";
        let result = lines_from_reader(input.as_bytes()).unwrap();
        assert_eq!(result, vec!["k o t", "d o m"]);
    }

    #[test]
    fn test_align_items() {
        let items = align(
            lines(&["k o t", "c a t"]),
            lines(&["k o d", "c a t"]),
            Some(lines(&["кот", "cat"])),
            lines(&["ru", "en"]),
        )
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].language(), "ru");
        assert_eq!(items[0].hypothesis(), "k o d");
        assert_eq!(items[0].source(), "кот");
        assert!(items[1].is_exact_match());
    }

    #[test]
    fn test_align_without_sources() {
        let items = align(lines(&["a"]), lines(&["a"]), None, lines(&["en"])).unwrap();
        assert_eq!(items[0].source(), "");
    }

    #[test]
    fn test_length_mismatch() {
        let err = align(
            lines(&["a", "b", "c"]),
            lines(&["a", "b", "c", "d"]),
            None,
            lines(&["en", "en", "en"]),
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "malformed input: input files are not aligned: references has 3 lines, \
             hypotheses has 4 lines, languages has 3 lines"
        );
    }

    #[test]
    fn test_source_length_mismatch() {
        let err = align(lines(&["a"]), lines(&["a"]), Some(Vec::new()), lines(&["en"]));
        assert!(matches!(err, Err(EngineError::MalformedInput { .. })));
    }

    #[test]
    fn test_empty_language_line() {
        let err = align(lines(&["a", "b"]), lines(&["a", "b"]), None, lines(&["en", ""]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed input: empty language code on line 2"
        );
    }

    #[test]
    fn test_read_files() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        fs::write(dir.join("refs.txt"), "k o t\nc a t\n").unwrap();
        fs::write(dir.join("hyps.txt"), "k o t\nc u t\n").unwrap();
        fs::write(dir.join("srcs.txt"), "кот\ncat\n").unwrap();
        fs::write(dir.join("langs.txt"), "ru\nen\n").unwrap();

        let files = AlignedFiles::new(
            dir.join("refs.txt"),
            dir.join("hyps.txt"),
            dir.join("langs.txt"),
        )
        .with_sources(dir.join("srcs.txt"));
        let items = files.read().unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].hypothesis(), "c u t");
        assert_eq!(items[1].source(), "cat");
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = read_lines(Path::new("/nonexistent/refs.txt")).unwrap_err();
        assert!(matches!(err, EngineError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/refs.txt"));
    }
}
