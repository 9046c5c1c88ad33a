//! Store initialization.

use std::path::PathBuf;

use stockbook_core::seed::seed_items;
use stockbook_core::storage::{self, BlobStore, JsonDirStore, INVENTORY_KEY};
use stockbook_core::{AppSettings, AuditLog, Store};

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_store_dir, write_config, StockConfig};
use crate::errors::CliError;
use crate::ui::{badge, hint, kv, print, Badge};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let target = match &args.path {
        Some(path) => PathBuf::from(path),
        None => match &ctx.cli().store {
            Some(path) => PathBuf::from(path),
            None => default_store_dir()?,
        },
    };

    let mut blob = JsonDirStore::create(target.clone())?;
    if blob.read(INVENTORY_KEY)?.is_some() {
        return Err(CliError::invalid_input(format!(
            "Store already initialized at {}",
            target.display()
        ))
        .into());
    }

    let items = if args.no_seed { Vec::new() } else { seed_items() };
    let item_count = items.len();
    let store = Store::new(items, AppSettings::default(), AuditLog::default());
    storage::persist(&store, &mut blob)?;

    // Remember the store location for future invocations
    let config_path = resolve_config_path()?;
    write_config(&config_path, &StockConfig::new(target.clone()))?;

    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None);
        print(
            &ui,
            &badge(
                &ui,
                Badge::Ok,
                &format!("Initialized new store at {}", target.display()),
            ),
        );
        print(&ui, &kv(&ui, "Items", &item_count.to_string()));
        print(&ui, &hint(&ui, "stockbook list  \u{00B7}  stockbook add"));
    }
    Ok(())
}
