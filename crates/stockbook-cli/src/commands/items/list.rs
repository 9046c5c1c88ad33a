//! List items command handler.

use stockbook_core::views::{all_categories, all_locations, filter_items, ItemFilter};

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::helpers::validate_format;
use crate::output::{items_json, print_item_list};
use crate::ui::{hint, print, render};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let (store, _blob) = ctx.open_store()?;

    let mut filter = ItemFilter::new();
    if let Some(ref term) = args.search {
        filter = filter.search(term.clone());
    }
    if let Some(ref category) = args.category {
        filter = filter.category(category.clone());
    }
    if let Some(ref location) = args.location {
        filter = filter.location(location.clone());
    }
    if args.low {
        filter = filter.low_stock_only();
    }

    let items = filter_items(store.items(), &filter);

    let format = validate_format(args.format.as_deref())?;
    if args.json && format.is_some() {
        return Err(anyhow::anyhow!("--format cannot be used with --json"));
    }
    if args.json {
        println!("{}", serde_json::to_string_pretty(&items_json(&items))?);
        return Ok(());
    }

    let ui = ctx.ui_context(false, format);
    if !ctx.quiet() {
        print(
            &ui,
            &render::header(&ui, "list", args.search.as_deref()),
        );
    }
    print_item_list(&ui, &items);

    // Filters select from the configured vocabulary plus whatever is
    // actually on items; point at the known values when a filter misses
    if items.is_empty() && !ctx.quiet() {
        if let Some(ref category) = args.category {
            let known = all_categories(store.items(), store.settings());
            if !known.contains(category) {
                print(
                    &ui,
                    &hint(&ui, &format!("known categories: {}", known.join(", "))),
                );
            }
        }
        if let Some(ref location) = args.location {
            let known = all_locations(store.items(), store.settings());
            if !known.contains(location) {
                print(
                    &ui,
                    &hint(&ui, &format!("known locations: {}", known.join(", "))),
                );
            }
        }
    }
    Ok(())
}
