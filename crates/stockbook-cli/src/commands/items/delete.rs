//! Delete item command handler.
//!
//! Deletion is permanent; the confirmation prompt is the boundary the
//! core leaves to the caller.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;

use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::errors::CliError;
use crate::ui::{badge, print, Badge, OutputMode};

use super::require_item;

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let (mut store, mut blob) = ctx.open_store()?;

    let item = require_item(&store, &args.id)?;
    let id = item.id.clone();
    let name = item.name.clone();

    let ui = ctx.ui_context(false, None);
    if !args.yes {
        if !ui.is_interactive() {
            return Err(CliError::invalid_input(
                "Deletion needs confirmation; pass --yes in non-interactive use",
            )
            .into());
        }
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Remove \"{}\" from inventory record?", name))
            .default(false)
            .interact()?;
        if !confirmed {
            print(&ui, &badge(&ui, Badge::Warn, "Delete cancelled"));
            return Ok(());
        }
    }

    store.delete(&id);
    ctx.persist(&store, &mut blob)?;

    if ctx.quiet() {
        return Ok(());
    }
    match ui.mode {
        OutputMode::Pretty => {
            print(&ui, &badge(&ui, Badge::Ok, &format!("Deleted \"{}\"", name)));
        }
        OutputMode::Plain | OutputMode::Json => {
            println!("status=ok");
            println!("item_id={}", id);
        }
    }
    Ok(())
}
