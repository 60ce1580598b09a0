//! translit-eval command-line entry point

use anyhow::Result;
use clap::Parser;
use translit_eval_cli::commands::Commands;

/// Score transliteration hypotheses against references, per language
#[derive(Debug, Parser)]
#[command(name = "translit-eval", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
