//! Print the filer profile of a filing document as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use filing_cli::Variant;

/// Extract the filer profile (name, auditor, directors, revenue, ...) from a filing
#[derive(Parser)]
#[command(name = "filing-profile")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Filing document (PDF or plain text)
    input: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = filing_cli::init_logging() {
        eprintln!("failed to initialize logging: {e}");
    }

    filing_cli::exit_code(filing_cli::execute(cli.input, Variant::Profile))
}
