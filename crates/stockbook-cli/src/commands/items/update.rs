//! Update item command handler.
//!
//! Composes the complete replacement record from the item's current
//! fields overlaid with whatever flags were given, then performs the
//! full-field update.

use stockbook_core::NewItem;

use crate::app::AppContext;
use crate::cli::UpdateArgs;
use crate::errors::CliError;
use crate::helpers::{coerce_price, coerce_quantity, parse_location_pairs};
use crate::ui::{badge, print, Badge, OutputMode};

use super::require_item;

pub fn handle_update(ctx: &AppContext, args: &UpdateArgs) -> anyhow::Result<()> {
    let (mut store, mut blob) = ctx.open_store()?;

    let current = require_item(&store, &args.id)?;
    let id = current.id.clone();

    let name = match &args.name {
        Some(name) if name.trim().is_empty() => {
            return Err(CliError::invalid_input("Item name cannot be empty").into());
        }
        Some(name) => name.trim().to_string(),
        None => current.name.clone(),
    };

    let mut quantities = current.quantities.clone();
    for (location, qty) in parse_location_pairs(&args.qty)? {
        quantities.insert(location, qty);
    }

    let data = NewItem {
        name,
        barcode: args.barcode.clone().or_else(|| current.barcode.clone()),
        description: args
            .description
            .clone()
            .unwrap_or_else(|| current.description.clone()),
        category: args
            .category
            .clone()
            .unwrap_or_else(|| current.category.clone()),
        quantities,
        min_stock: args
            .min_stock
            .as_deref()
            .map(coerce_quantity)
            .unwrap_or(current.min_stock),
        unit: args.unit.clone().unwrap_or_else(|| current.unit.clone()),
        price: args
            .price
            .as_deref()
            .map(coerce_price)
            .unwrap_or(current.price),
    };

    store.update(&id, data);
    ctx.persist(&store, &mut blob)?;

    if ctx.quiet() {
        return Ok(());
    }
    let ui = ctx.ui_context(false, None);
    let item = store
        .item(&id)
        .ok_or_else(|| anyhow::anyhow!("item missing after update"))?;
    match ui.mode {
        OutputMode::Pretty => {
            print(
                &ui,
                &badge(&ui, Badge::Ok, &format!("Updated \"{}\"", item.name)),
            );
            println!(
                "Total Qty: {} {}  \u{00B7}  Min: {}",
                item.total_quantity(),
                item.unit,
                item.min_stock
            );
        }
        OutputMode::Plain | OutputMode::Json => {
            println!("status=ok");
            println!("item_id={}", id);
            println!("total_quantity={}", item.total_quantity());
        }
    }
    Ok(())
}
