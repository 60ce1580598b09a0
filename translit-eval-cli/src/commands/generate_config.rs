//! Generate config command implementation

use crate::error::CliError;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Configuration template with every key at its default value
pub const CONFIG_TEMPLATE: &str = r#"# translit-eval configuration
# Every key is optional; command-line flags override these values.

[scoring]
# Fractional digits kept in each summary
rounding = 5
# F1 handling of empty strings: "lenient" scores them, "strict" fails
length_policy = "lenient"

[bleu]
# Highest n-gram order
max_ngram_order = 4
# Segment tokenizer: "13a" or "none"
tokenizer = "13a"
# Lowercase segments before tokenizing
lowercase = false
# Smoothing for orders without matches:
#   { method = "exp" }
#   { method = "floor", value = 0.1 }
#   { method = "add-k", value = 1.0 }
#   { method = "none" }
smoothing = { method = "exp" }

[performance]
# "adaptive", "sequential" or "parallel"
mode = "adaptive"
# Worker threads for parallel scoring (0 = one per core)
threads = 0
# Item count from which adaptive mode scores groups in parallel
parallel_threshold = 10000

[output]
# Default report format: "text", "tsv" or "json"
format = "text"
# Indent JSON reports
pretty_json = true
"#;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            return Err(CliError::OutputExists(self.output.display().to_string()).into());
        }

        fs::write(&self.output, CONFIG_TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("Configuration template written to {}", self.output.display());
        println!();
        println!("Use it with:");
        println!(
            "   translit-eval evaluate --tsv combined.tsv -c {}",
            self.output.display()
        );

        Ok(())
    }
}
