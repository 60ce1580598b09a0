//! CLI command implementations

use crate::output::OutputFormat;
use anyhow::Result;
use clap::Subcommand;
use std::io::{self, Write};
use translit_eval_core::Metric;

pub mod evaluate;
pub mod generate_config;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score hypotheses against references, globally and per language
    Evaluate(evaluate::EvaluateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List the reported metrics
    Metrics,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Evaluate(args) => args.execute(),
            Commands::List { subcommand } => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                subcommand.write_listing(&mut out)?;
                out.flush()?;
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

fn metric_description(metric: Metric) -> &'static str {
    match metric {
        Metric::WordAccuracy => "Percentage of hypotheses identical to their reference",
        Metric::MeanF1 => "Mean LCS-based F1 over the literal strings",
        Metric::Cer => "Corpus character error rate over space-separated characters",
        Metric::Bleu => "Corpus BLEU (order 4, exp smoothing, 13a tokens by default)",
    }
}

impl ListCommands {
    /// Write the listing
    pub fn write_listing(&self, out: &mut dyn Write) -> io::Result<()> {
        match self {
            ListCommands::Formats => {
                writeln!(out, "Available output formats:")?;
                for format in OutputFormat::ALL {
                    writeln!(out, "  {:<6} {}", format.name(), format.description())?;
                }
            }
            ListCommands::Metrics => {
                writeln!(out, "Reported metrics:")?;
                for metric in Metric::ALL {
                    writeln!(out, "  {:<14} {}", metric.name(), metric_description(metric))?;
                }
                writeln!(
                    out,
                    "  {:<14} {}",
                    "word error", "100 minus word accuracy"
                )?;
            }
        }
        Ok(())
    }
}
