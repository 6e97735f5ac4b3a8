//! Command-line front ends for filing metadata extraction.
//!
//! Two binaries share this library: `filing-profile` prints the filer
//! profile of a document and `filing-identity` prints its filer identity.

pub mod commands;

use std::process::ExitCode;

use console::style;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

pub use commands::extract::{execute, run, Variant};

/// Install the stderr log subscriber. Only warnings and errors are shown so
/// that stdout carries nothing but the JSON record.
pub fn init_logging() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Map a command outcome to the process exit status, reporting failures on
/// stderr.
pub fn exit_code(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", style("error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
