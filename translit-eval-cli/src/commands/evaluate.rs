//! Evaluate command implementation

use crate::config::{CliConfig, Mode};
use crate::input::InputArgs;
use crate::output::{create_formatter, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use translit_eval_engine::group::languages_of;
use translit_eval_engine::{Aggregator, EngineConfig, LengthPolicy};

/// Arguments for the evaluate command
#[derive(Debug, Args)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output file (default: stdout)
    #[arg(long = "score-output-path", visible_alias = "score", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Fail on empty references or hypotheses instead of scoring them
    #[arg(long)]
    pub strict_lengths: bool,

    /// Execution mode [default: adaptive]
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Number of worker threads for parallel scoring
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl EvaluateArgs {
    /// Execute the evaluate command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting evaluation");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let engine_config = self.engine_config(&file_config);
        let format = self.format.unwrap_or(file_config.output.format);

        let source = self.input.resolve()?;
        let items = source.load()?;
        let languages = languages_of(&items);

        let aggregator = Aggregator::new(engine_config)?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_groups(languages.len() as u64 + 1);
        let result = aggregator.aggregate_with_languages(items, languages, &progress)?;
        progress.finish();

        let report = create_formatter(format, file_config.output.pretty_json).render(&result)?;
        self.write_output(&report)?;

        log::info!(
            "Scored {} items in {} languages",
            result.items().len(),
            result.languages().len()
        );
        Ok(())
    }

    /// Merge the file configuration with command-line overrides
    pub fn engine_config(&self, file_config: &CliConfig) -> EngineConfig {
        let mut config = file_config.engine_config();

        if self.strict_lengths {
            config = config.with_length_policy(LengthPolicy::Strict);
        }
        if let Some(mode) = self.mode {
            config = config.with_execution_mode(mode.into());
        }
        if self.threads.is_some() {
            config = config.with_threads(self.threads);
        }

        config
    }

    fn write_output(&self, report: &[u8]) -> Result<()> {
        match &self.output {
            Some(path) => fs::write(path, report)
                .with_context(|| format!("Failed to write report to {}", path.display())),
            None => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                out.write_all(report)?;
                out.flush()?;
                Ok(())
            }
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when run from tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
