//! Scan resolution command handler.
//!
//! The scanner is an external collaborator that yields one decoded string;
//! here that string arrives as an argument. A match by barcode or id
//! routes to the update flow, a miss routes to the create flow with the
//! code pre-filled as the new item's barcode.

use stockbook_core::ScanOutcome;

use crate::app::AppContext;
use crate::cli::ScanArgs;
use crate::output::{print_item_detail, scan_json};
use crate::ui::{badge, blank_line, hint, print, short_id, Badge};

pub fn handle_scan(ctx: &AppContext, args: &ScanArgs) -> anyhow::Result<()> {
    let (store, _blob) = ctx.open_store()?;

    let outcome = store.resolve_scan(&args.code);

    if args.json {
        let item = match &outcome {
            ScanOutcome::Existing(id) => store.item(id),
            ScanOutcome::Unknown { .. } => None,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&scan_json(&outcome, item))?
        );
        return Ok(());
    }

    let ui = ctx.ui_context(false, None);
    match outcome {
        ScanOutcome::Existing(id) => {
            let Some(item) = store.item(&id) else {
                return Ok(());
            };
            print(
                &ui,
                &badge(&ui, Badge::Ok, &format!("Matched \"{}\"", item.name)),
            );
            blank_line(&ui);
            print_item_detail(&ui, item, &store.settings().currency_symbol);
            blank_line(&ui);
            print(
                &ui,
                &hint(
                    &ui,
                    &format!(
                        "stockbook update {}  \u{00B7}  stockbook adjust {} --set LOCATION=QTY",
                        short_id(&id),
                        short_id(&id)
                    ),
                ),
            );
        }
        ScanOutcome::Unknown { barcode } => {
            print(&ui, &badge(&ui, Badge::Info, "No item matches this code"));
            print(
                &ui,
                &hint(
                    &ui,
                    &format!("stockbook add \"New Item\" --category CAT --barcode {}", barcode),
                ),
            );
        }
    }
    Ok(())
}
