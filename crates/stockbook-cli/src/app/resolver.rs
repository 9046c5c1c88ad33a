//! Path resolution for config and store directories.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, read_config};
use crate::errors::CliError;

/// Resolve the config file path, checking STOCKBOOK_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("STOCKBOOK_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the store directory from CLI args or config.
pub fn resolve_store_dir(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.store.clone() {
        return Ok(PathBuf::from(path));
    }

    let config_path = resolve_config_path()?;
    if !config_path.exists() {
        return Err(CliError::not_found(
            missing_store_message(&config_path),
            "stockbook init",
        )
        .into());
    }

    let config = read_config(&config_path)?;
    Ok(PathBuf::from(config.store.path))
}

/// Error message when no store has been set up.
pub fn missing_store_message(path: &Path) -> String {
    format!(
        "No store found at {}\n\nRun:\n  stockbook init\n\nOr specify a store directory:\n  STOCKBOOK_STORE=/path/to/store stockbook init",
        path.display()
    )
}
