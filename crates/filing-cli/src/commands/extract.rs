//! Extract command - load one document, run a parser, print the record.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use filing_core::{
    DocumentLoader, FilingConfig, FilingParser, IdentityParser, ParseReport, ProfileParser, SourceText,
};

/// Which record the command prints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Filer profile of an annual-report style filing.
    Profile,
    /// Filer identity (name, address, jurisdiction, ownership).
    Identity,
}

/// Extract one document and print its record as pretty JSON on stdout.
pub async fn run(input: PathBuf, variant: Variant) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::config::load_config()?;
    let budget = config.extraction.document_timeout();

    let pb = spinner();
    pb.set_message(format!("Extracting {}...", input.display()));

    let job = tokio::task::spawn_blocking(move || extract(&input, variant, &config));
    let outcome = tokio::time::timeout(budget, job).await;
    pb.finish_and_clear();

    let output = match outcome {
        Ok(joined) => joined.context("extraction task panicked")??,
        Err(_) => anyhow::bail!("document not processed within {}s", budget.as_secs()),
    };

    println!("{}", output);

    debug!("Total processing time: {:?}", start.elapsed());
    Ok(())
}

/// Run [`run`] on a dedicated runtime. The runtime is abandoned rather than
/// drained on return: a timed-out extraction may still be blocked inside a
/// collaborator call and must not keep the process alive.
pub fn execute(input: PathBuf, variant: Variant) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let result = runtime.block_on(run(input, variant));
    runtime.shutdown_background();
    result
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn loader(config: &FilingConfig) -> DocumentLoader {
    DocumentLoader::from_config(&config.ocr).unwrap_or_else(|e| {
        warn!("OCR fallback disabled: {}", e);
        DocumentLoader::new()
    })
}

fn extract(input: &Path, variant: Variant, config: &FilingConfig) -> anyhow::Result<String> {
    let source: SourceText = loader(config).load_path(input)?;
    info!("Read {} ({:?})", input.display(), source.origin());

    let json = match variant {
        Variant::Profile => {
            let report = ProfileParser::with_config(config).parse(source.as_str());
            log_missing(&report);
            serde_json::to_string_pretty(&report.record)?
        }
        Variant::Identity => {
            let report = IdentityParser::with_config(config).parse(source.as_str());
            log_missing(&report);
            serde_json::to_string_pretty(&report.record)?
        }
    };
    Ok(json)
}

fn log_missing<T>(report: &ParseReport<T>) {
    let missing = report.missing_fields();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|f| f.as_str()).collect();
        info!("No value found for: {}", names.join(", "));
    }
    debug!("Parsed in {}ms", report.processing_time_ms);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filing.txt");
        std::fs::write(&path, "Commission File Number: 001-12345\n").unwrap();

        let json = extract(&path, Variant::Profile, &FilingConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["company_number"], "001-12345");
    }

    #[test]
    fn test_missing_document_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = extract(&dir.path().join("absent.txt"), Variant::Identity, &FilingConfig::default());
        assert!(result.is_err());
    }
}
