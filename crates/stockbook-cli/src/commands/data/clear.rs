//! Destructive data reset handler.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;

use crate::app::AppContext;
use crate::cli::ClearArgs;
use crate::errors::CliError;
use crate::ui::{badge, print, Badge, OutputMode};

pub fn handle_clear(ctx: &AppContext, args: &ClearArgs) -> anyhow::Result<()> {
    let (mut store, mut blob) = ctx.open_store()?;
    let ui = ctx.ui_context(false, None);

    if !args.yes {
        if !ui.is_interactive() {
            return Err(CliError::invalid_input(
                "Clearing deletes all items; pass --yes in non-interactive use",
            )
            .into());
        }
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(
                "This will delete all inventory items permanently. This action cannot be undone. Continue?",
            )
            .default(false)
            .interact()?;
        if !confirmed {
            print(&ui, &badge(&ui, Badge::Warn, "Clear cancelled"));
            return Ok(());
        }
    }

    store.clear_items();
    if args.logs {
        store.clear_audit_log();
    }
    ctx.persist(&store, &mut blob)?;

    if ctx.quiet() {
        return Ok(());
    }
    match ui.mode {
        OutputMode::Pretty => {
            print(&ui, &badge(&ui, Badge::Ok, "Cleared all inventory data"));
        }
        OutputMode::Plain | OutputMode::Json => {
            println!("status=ok");
        }
    }
    Ok(())
}
