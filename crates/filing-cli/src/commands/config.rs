//! Configuration lookup.
//!
//! The binaries take no flags: collaborator endpoints and limits come from
//! a JSON file in the user's configuration directory, or the defaults when
//! there is none.

use std::path::PathBuf;

use tracing::debug;

use filing_core::FilingConfig;

/// Location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("filing-extract")
        .join("config.json")
}

/// Load the configuration, falling back to defaults when no file exists.
pub fn load_config() -> anyhow::Result<FilingConfig> {
    let config_path = default_config_path();

    if config_path.exists() {
        debug!("Loading configuration from {}", config_path.display());
        Ok(FilingConfig::from_file(&config_path)?)
    } else {
        Ok(FilingConfig::default())
    }
}
