//! Input handling module
//!
//! Resolves the input flags into one [`InputSource`]: either the aligned
//! files or a combined table, never both.

use crate::error::CliError;
use clap::Args;
use std::path::PathBuf;
use translit_eval_engine::{AlignedFiles, InputSource, TableLayout};

/// Input arguments shared by evaluation commands
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Reference transliterations, one per line
    #[arg(
        long = "references-path",
        visible_aliases = ["gold-path", "ref", "gold"],
        value_name = "FILE"
    )]
    pub references: Option<PathBuf>,

    /// System transliterations, one per line
    #[arg(long = "hypotheses-path", visible_alias = "hyp", value_name = "FILE")]
    pub hypotheses: Option<PathBuf>,

    /// Source words, one per line (optional)
    #[arg(long = "source-path", visible_alias = "src", value_name = "FILE")]
    pub sources: Option<PathBuf>,

    /// Language codes, one per line
    #[arg(long = "languages-path", visible_alias = "langs", value_name = "FILE")]
    pub languages: Option<PathBuf>,

    /// Tab-separated table with ref, hyp, src and language columns
    #[arg(long = "combined-tsv-path", visible_alias = "tsv", value_name = "FILE")]
    pub table: Option<PathBuf>,

    /// The table starts with a header row naming its columns
    #[arg(long = "tsv-header")]
    pub table_header: bool,
}

impl InputArgs {
    /// Pick the input mode from the given flags
    pub fn resolve(&self) -> Result<InputSource, CliError> {
        if let Some(table) = &self.table {
            let aligned: Vec<&str> = [
                ("--references-path", self.references.is_some()),
                ("--hypotheses-path", self.hypotheses.is_some()),
                ("--source-path", self.sources.is_some()),
                ("--languages-path", self.languages.is_some()),
            ]
            .into_iter()
            .filter_map(|(flag, given)| given.then_some(flag))
            .collect();

            if !aligned.is_empty() {
                return Err(CliError::ConflictingInput(format!(
                    "--combined-tsv-path cannot be combined with {}",
                    aligned.join(", ")
                )));
            }

            let layout = if self.table_header {
                TableLayout::Header
            } else {
                TableLayout::Positional
            };
            return Ok(InputSource::Table {
                path: table.clone(),
                layout,
            });
        }

        if self.table_header {
            log::warn!("--tsv-header has no effect without --combined-tsv-path");
        }

        match (&self.references, &self.hypotheses, &self.languages) {
            (Some(references), Some(hypotheses), Some(languages)) => {
                let mut files = AlignedFiles::new(references, hypotheses, languages);
                if let Some(sources) = &self.sources {
                    files = files.with_sources(sources);
                }
                Ok(InputSource::Aligned(files))
            }
            _ => {
                let missing: Vec<&str> = [
                    ("--references-path", self.references.is_none()),
                    ("--hypotheses-path", self.hypotheses.is_none()),
                    ("--languages-path", self.languages.is_none()),
                ]
                .into_iter()
                .filter_map(|(flag, absent)| absent.then_some(flag))
                .collect();

                Err(CliError::MissingInput(format!(
                    "{} (or use --combined-tsv-path)",
                    missing.join(", ")
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aligned_args() -> InputArgs {
        InputArgs {
            references: Some("refs.txt".into()),
            hypotheses: Some("hyps.txt".into()),
            languages: Some("langs.txt".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_aligned() {
        let source = aligned_args().resolve().unwrap();
        match source {
            InputSource::Aligned(files) => {
                assert_eq!(files.references, PathBuf::from("refs.txt"));
                assert!(files.sources.is_none());
            }
            other => panic!("Expected aligned input, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_aligned_with_sources() {
        let args = InputArgs {
            sources: Some("srcs.txt".into()),
            ..aligned_args()
        };
        match args.resolve().unwrap() {
            InputSource::Aligned(files) => {
                assert_eq!(files.sources, Some(PathBuf::from("srcs.txt")));
            }
            other => panic!("Expected aligned input, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_table_with_header() {
        let args = InputArgs {
            table: Some("combined.tsv".into()),
            table_header: true,
            ..Default::default()
        };
        assert_eq!(
            args.resolve().unwrap(),
            InputSource::Table {
                path: PathBuf::from("combined.tsv"),
                layout: TableLayout::Header,
            }
        );
    }

    #[test]
    fn test_conflicting_modes() {
        let args = InputArgs {
            table: Some("combined.tsv".into()),
            ..aligned_args()
        };
        let err = args.resolve().unwrap_err();
        assert!(matches!(err, CliError::ConflictingInput(_)));
        assert!(err.to_string().contains("--references-path"));
    }

    #[test]
    fn test_missing_inputs_listed() {
        let args = InputArgs {
            hypotheses: Some("hyps.txt".into()),
            ..Default::default()
        };
        let err = args.resolve().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing input: --references-path, --languages-path (or use --combined-tsv-path)"
        );
    }
}
