//! Add item command handler.

use stockbook_core::NewItem;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::errors::CliError;
use crate::helpers::{coerce_price, coerce_quantity, parse_location_pairs};
use crate::ui::{badge, blank_line, hint, print, short_id, Badge, OutputMode};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    if args.name.trim().is_empty() {
        return Err(CliError::invalid_input("Item name cannot be empty").into());
    }

    let (mut store, mut blob) = ctx.open_store()?;

    let quantities = parse_location_pairs(&args.qty)?;
    let min_stock = match &args.min_stock {
        Some(value) => coerce_quantity(value),
        None => store.settings().default_min_stock,
    };

    let mut data = NewItem::new(args.name.trim(), args.category.clone())
        .with_quantities(quantities)
        .with_min_stock(min_stock)
        .with_price(args.price.as_deref().map(coerce_price).unwrap_or(0.0));
    if let Some(ref barcode) = args.barcode {
        data = data.with_barcode(barcode.clone());
    }
    if let Some(ref description) = args.description {
        data = data.with_description(description.clone());
    }
    if let Some(ref unit) = args.unit {
        data = data.with_unit(unit.clone());
    }

    let id = store.create(data);
    ctx.persist(&store, &mut blob)?;

    if ctx.quiet() {
        return Ok(());
    }
    let ui = ctx.ui_context(false, None);
    let item = store
        .item(&id)
        .ok_or_else(|| anyhow::anyhow!("item missing after create"))?;
    match ui.mode {
        OutputMode::Pretty => {
            print(
                &ui,
                &badge(&ui, Badge::Ok, &format!("Added \"{}\"", item.name)),
            );
            println!(
                "ID: {}  \u{00B7}  {}  \u{00B7}  Qty: {} {}",
                short_id(&id),
                item.category,
                item.total_quantity(),
                item.unit
            );
            blank_line(&ui);
            print(
                &ui,
                &hint(
                    &ui,
                    &format!(
                        "stockbook show {}  \u{00B7}  stockbook adjust {} --set LOCATION=QTY",
                        short_id(&id),
                        short_id(&id)
                    ),
                ),
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
