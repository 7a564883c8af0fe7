//! Sansoz command-line entry point

use clap::Parser;
use sansoz_cli::commands::Commands;
use sansoz_cli::CliResult;

/// Expand numerals in Kazakh text into words for speech synthesis
#[derive(Debug, Parser)]
#[command(name = "sansoz", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
