//! Persistence boundary: a string-keyed JSON blob store.
//!
//! The store persists three independent blobs (inventory, settings, audit
//! log). Writes replace the whole blob; collections are small and writes
//! are human-paced. `JsonDirStore` keeps one `<key>.json` file per key
//! under a data directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::audit::{AuditLog, AuditLogEntry};
use crate::error::{Result, StockError};
use crate::migrate;
use crate::seed::seed_items;
use crate::settings::AppSettings;
use crate::store::Store;

/// Blob key for the inventory collection.
pub const INVENTORY_KEY: &str = "inventory";
/// Blob key for the settings record.
pub const SETTINGS_KEY: &str = "settings";
/// Blob key for the audit log.
pub const AUDIT_LOG_KEY: &str = "audit_log";

/// String-keyed JSON blob store.
///
/// Implementations persist whole blobs; there is no partial update. The
/// core treats this boundary as an external collaborator.
pub trait BlobStore {
    /// Read the blob stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the blob stored under `key`.
    fn write(&mut self, key: &str, payload: &str) -> Result<()>;
}

/// Blob store backed by one JSON file per key in a data directory.
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    dir: PathBuf,
}

impl JsonDirStore {
    /// Create the data directory (and parents) if needed.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Open an existing data directory.
    ///
    /// # Errors
    ///
    /// Returns `StockError::NotFound` when the directory does not exist.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(StockError::NotFound(format!(
                "no store directory at {}",
                dir.display()
            )));
        }
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl BlobStore for JsonDirStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write(&mut self, key: &str, payload: &str) -> Result<()> {
        fs::write(self.key_path(key), payload)?;
        Ok(())
    }
}

/// What the load boundary had to recover from.
///
/// Parse failures never surface as fatal errors; the caller reports these
/// on its diagnostic channel and the app stays usable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Inventory blob was corrupt; the seed collection was substituted
    pub inventory_recovered: bool,
    /// Settings blob was corrupt; defaults were substituted
    pub settings_recovered: bool,
    /// Audit blob was corrupt; an empty log was substituted
    pub audit_recovered: bool,
}

/// Load the three collections, migrating legacy inventory records and
/// recovering locally from corrupt blobs.
pub fn load(blob: &impl BlobStore) -> Result<(Store, LoadReport)> {
    let mut report = LoadReport::default();

    let items = match blob.read(INVENTORY_KEY)? {
        Some(payload) => match migrate::parse_inventory(&payload) {
            Ok(items) => items,
            Err(_) => {
                // Corrupt storage: fall back to the seed so an empty
                // inventory is never presented as intentional.
                report.inventory_recovered = true;
                seed_items()
            }
        },
        None => seed_items(),
    };

    let settings = match blob.read(SETTINGS_KEY)? {
        Some(payload) => match serde_json::from_str::<AppSettings>(&payload) {
            Ok(settings) => settings,
            Err(_) => {
                report.settings_recovered = true;
                AppSettings::default()
            }
        },
        None => AppSettings::default(),
    };

    let audit = match blob.read(AUDIT_LOG_KEY)? {
        Some(payload) => match serde_json::from_str::<Vec<AuditLogEntry>>(&payload) {
            Ok(entries) => AuditLog::new(entries),
            Err(_) => {
                report.audit_recovered = true;
                AuditLog::default()
            }
        },
        None => AuditLog::default(),
    };

    Ok((Store::new(items, settings, audit), report))
}

/// Write all three collections back, each as a whole blob.
pub fn persist(store: &Store, blob: &mut impl BlobStore) -> Result<()> {
    blob.write(
        INVENTORY_KEY,
        &serde_json::to_string_pretty(store.items())?,
    )?;
    blob.write(
        SETTINGS_KEY,
        &serde_json::to_string_pretty(store.settings())?,
    )?;
    blob.write(
        AUDIT_LOG_KEY,
        &serde_json::to_string_pretty(store.audit().entries())?,
    )?;
    Ok(())
}
