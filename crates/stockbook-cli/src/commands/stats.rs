//! Dashboard stats command handler.

use stockbook_core::views;

use crate::app::AppContext;
use crate::cli::StatsArgs;
use crate::output::{print_stats, stats_json};
use crate::ui::{badge, print, Badge};

pub fn handle_stats(ctx: &AppContext, args: &StatsArgs) -> anyhow::Result<()> {
    let (store, _blob) = ctx.open_store()?;
    let stats = views::stats(store.items());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats_json(&stats))?);
        return Ok(());
    }

    let ui = ctx.ui_context(false, None);
    print_stats(&ui, &stats);
    if store.settings().low_stock_alerts && stats.low_stock_items > 0 {
        print(
            &ui,
            &badge(
                &ui,
                Badge::Warn,
                &format!(
                    "{} item{} below minimum. Restock required.",
                    stats.low_stock_items,
                    if stats.low_stock_items == 1 { "" } else { "s" }
                ),
            ),
        );
    }
    Ok(())
}
