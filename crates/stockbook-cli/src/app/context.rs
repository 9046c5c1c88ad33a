//! Application context for the Stockbook CLI.
//!
//! Bundles CLI arguments with the lazily-resolved store directory so
//! handlers do not each re-run path resolution.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use stockbook_core::storage::{self, JsonDirStore};
use stockbook_core::{Store, StockError};

use crate::cli::Cli;
use crate::errors::CliError;
use crate::ui::UiContext;

use super::resolver::resolve_store_dir;

/// Application context that bundles CLI args with resolved paths.
pub struct AppContext<'a> {
    cli: &'a Cli,
    store_dir: OnceCell<PathBuf>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            store_dir: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the store directory, resolving it lazily.
    pub fn store_dir(&self) -> anyhow::Result<&PathBuf> {
        self.store_dir.get_or_try_init(|| resolve_store_dir(self.cli))
    }

    /// Open the store: load all three collections, migrating legacy
    /// records and reporting any recovered-from corruption on stderr.
    pub fn open_store(&self) -> anyhow::Result<(Store, JsonDirStore)> {
        let dir = self.store_dir()?;
        let blob = match JsonDirStore::open(dir.clone()) {
            Ok(blob) => blob,
            Err(StockError::NotFound(_)) => {
                return Err(CliError::not_found(
                    format!("No store found at {}", dir.display()),
                    "stockbook init",
                )
                .into());
            }
            Err(err) => return Err(err.into()),
        };

        let (store, report) = storage::load(&blob)?;
        if report.inventory_recovered {
            eprintln!("warning: inventory data was unreadable; loaded the starter inventory");
        }
        if report.settings_recovered {
            eprintln!("warning: settings were unreadable; loaded defaults");
        }
        if report.audit_recovered {
            eprintln!("warning: audit log was unreadable; starting a fresh log");
        }
        Ok((store, blob))
    }

    /// Persist all three collections back to the store directory.
    pub fn persist(&self, store: &Store, blob: &mut JsonDirStore) -> anyhow::Result<()> {
        storage::persist(store, blob)?;
        Ok(())
    }

    /// Build a UI context for output rendering.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii)
    }
}
