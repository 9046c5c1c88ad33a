//! Stock adjustment command handler.
//!
//! The core API replaces the quantity map wholesale; the CLI composes the
//! complete new map from the item's current quantities overlaid with the
//! `--set` pairs, the way the adjustment form pre-fills current values.

use crate::app::AppContext;
use crate::cli::AdjustArgs;
use crate::helpers::parse_location_pairs;
use crate::ui::{badge, print, Badge, OutputMode};

use super::require_item;

pub fn handle_adjust(ctx: &AppContext, args: &AdjustArgs) -> anyhow::Result<()> {
    let (mut store, mut blob) = ctx.open_store()?;

    let item = require_item(&store, &args.id)?;
    let id = item.id.clone();
    let name = item.name.clone();

    let mut new_quantities = item.quantities.clone();
    for (location, qty) in parse_location_pairs(&args.set)? {
        new_quantities.insert(location, qty);
    }
    let changed = new_quantities != item.quantities;

    store.adjust(&id, new_quantities);
    ctx.persist(&store, &mut blob)?;

    if ctx.quiet() {
        return Ok(());
    }
    let ui = ctx.ui_context(false, None);
    let total = store
        .item(&id)
        .map(|item| item.total_quantity())
        .unwrap_or(0);
    match ui.mode {
        OutputMode::Pretty => {
            if changed {
                print(
                    &ui,
                    &badge(&ui, Badge::Ok, &format!("Adjusted \"{}\"", name)),
                );
                // The freshest audit entry carries the per-location deltas
                if let Some(entry) = store.audit().entries().first() {
                    println!("{}", entry.details);
                }
            } else {
                print(&ui, &badge(&ui, Badge::Info, "No quantities changed"));
            }
            println!("Total Qty: {}", total);
        }
        OutputMode::Plain | OutputMode::Json => {
            println!("status=ok");
            println!("item_id={}", id);
            println!("changed={}", changed);
            println!("total_quantity={}", total);
        }
    }
    Ok(())
}
