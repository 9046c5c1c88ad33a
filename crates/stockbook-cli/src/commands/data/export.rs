//! Export command handler.
//!
//! Two surfaces: the full inventory export (JSON backup or CSV sheet,
//! both recorded in the audit log) and document extracts (report, labels,
//! invoice, quote) which are derived views and leave no audit trace.

use std::collections::BTreeMap;

use stockbook_core::export::{self, DocKind, InvoiceTotals};
use stockbook_core::InventoryItem;

use crate::app::AppContext;
use crate::cli::ExportArgs;
use crate::commands::items::require_item;
use crate::errors::CliError;
use crate::helpers::parse_line_items;
use crate::ui::{badge, kv, money, print, Badge};

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let (mut store, mut blob) = ctx.open_store()?;

    let mut audited = false;
    let mut totals: Option<InvoiceTotals> = None;

    let payload = match &args.doc {
        None => match args.format.as_str() {
            "json" => {
                let payload = export::export_json(store.items())?;
                store.record_export("Exported inventory to JSON");
                audited = true;
                payload
            }
            "csv" => {
                let payload = export::inventory_csv(store.items());
                store.record_export("Exported inventory to CSV");
                audited = true;
                payload
            }
            other => {
                return Err(CliError::invalid_input(format!(
                    "Unsupported export format: {} (use json or csv)",
                    other
                ))
                .into());
            }
        },
        Some(doc) => {
            let kind = parse_doc_kind(doc)?;
            let requested = parse_line_items(&args.item)?;

            // Resolve selections up front so a typo'd id is an error, not
            // a silently shorter document
            let mut line_qty = BTreeMap::new();
            let mut selected: Vec<&InventoryItem> = Vec::new();
            for (id, qty) in &requested {
                let item = require_item(&store, id)?;
                line_qty.insert(item.id.clone(), *qty);
                selected.push(item);
            }
            // A report with no selection covers the whole inventory;
            // labels and priced documents print only what was picked
            if selected.is_empty() && kind == DocKind::Report {
                selected = store.items().iter().collect();
            }

            if kind.is_priced() {
                totals = Some(export::invoice_totals(
                    &selected,
                    &line_qty,
                    store.settings().tax_rate,
                ));
                export::line_items_csv(&selected, &line_qty)
            } else {
                export::items_csv(&selected)
            }
        }
    };

    if audited {
        ctx.persist(&store, &mut blob)?;
    }

    match &args.output {
        Some(path) => {
            std::fs::write(path, &payload)
                .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path, e))?;
            if !ctx.quiet() {
                let ui = ctx.ui_context(false, None);
                print(
                    &ui,
                    &badge(&ui, Badge::Ok, &format!("Exported to {}", path)),
                );
                // Priced documents get the totals block the printed page
                // would carry
                if let Some(t) = totals {
                    let symbol = &store.settings().currency_symbol;
                    print(&ui, &kv(&ui, "Subtotal", &money(symbol, t.subtotal)));
                    print(
                        &ui,
                        &kv(
                            &ui,
                            "Tax",
                            &format!("{} ({}%)", money(symbol, t.tax), store.settings().tax_rate),
                        ),
                    );
                    print(&ui, &kv(&ui, "Total", &money(symbol, t.total)));
                }
            }
        }
        None => println!("{}", payload),
    }
    Ok(())
}

fn parse_doc_kind(value: &str) -> anyhow::Result<DocKind> {
    match value {
        "report" => Ok(DocKind::Report),
        "labels" => Ok(DocKind::Labels),
        "invoice" => Ok(DocKind::Invoice),
        "quote" => Ok(DocKind::Quote),
        other => Err(CliError::invalid_input(format!(
            "Unsupported document type: {} (use report, labels, invoice, or quote)",
            other
        ))
        .into()),
    }
}
