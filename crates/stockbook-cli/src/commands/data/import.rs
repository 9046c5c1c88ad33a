//! Import command handler.
//!
//! Accepts a JSON array of items (current or legacy shape, run through the
//! migration layer) and wholesale-replaces the inventory after
//! confirmation. A non-array payload is rejected with no state change.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;

use stockbook_core::migrate;

use crate::app::AppContext;
use crate::cli::ImportArgs;
use crate::errors::CliError;
use crate::ui::{badge, print, Badge, OutputMode};

pub fn handle_import(ctx: &AppContext, args: &ImportArgs) -> anyhow::Result<()> {
    let payload = std::fs::read_to_string(&args.file)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", args.file, e))?;

    let items = migrate::parse_inventory(&payload).map_err(|_| {
        CliError::invalid_input("Invalid file format. Expected a list of items.")
    })?;

    let (mut store, mut blob) = ctx.open_store()?;
    let ui = ctx.ui_context(false, None);

    if !args.yes {
        if !ui.is_interactive() {
            return Err(CliError::invalid_input(
                "Import replaces all data; pass --yes in non-interactive use",
            )
            .into());
        }
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "Replace current inventory with {} items from backup?",
                items.len()
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            print(&ui, &badge(&ui, Badge::Warn, "Import cancelled"));
            return Ok(());
        }
    }

    let count = items.len();
    store.replace_all(items);
    ctx.persist(&store, &mut blob)?;

    if ctx.quiet() {
        return Ok(());
    }
    match ui.mode {
        OutputMode::Pretty => {
            print(
                &ui,
                &badge(
                    &ui,
                    Badge::Ok,
                    &format!("Inventory restored from backup ({} items)", count),
                ),
            );
        }
        OutputMode::Plain | OutputMode::Json => {
            println!("status=ok");
            println!("imported={}", count);
        }
    }
    Ok(())
}
