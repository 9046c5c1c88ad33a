//! Text and table output formatting.

use stockbook_core::views::Stats;
use stockbook_core::{AuditLogEntry, InventoryItem};

use crate::ui::{
    badge, divider, format_datetime, kv, money, print, short_id, table, truncate, Badge, Column,
    UiContext,
};

/// Summarize where an item's stock is, for one table cell.
fn locations_summary(item: &InventoryItem) -> String {
    let active = item.active_locations();
    if active.is_empty() {
        return "Out of stock".to_string();
    }
    active
        .iter()
        .map(|(loc, qty)| format!("{}: {}", loc, qty))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print the item list as a table (pretty) or rows (plain).
pub fn print_item_list(ui: &UiContext, items: &[&InventoryItem]) {
    if items.is_empty() {
        print(ui, "No items found.");
        return;
    }

    let columns = [
        Column::new("ID"),
        Column::new("Name"),
        Column::new("Category"),
        Column::new("Locations"),
        Column::new("Qty"),
        Column::new("Status"),
    ];
    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| {
            vec![
                short_id(&item.id),
                truncate(&item.name, 36),
                item.category.clone(),
                locations_summary(item),
                format!("{} {}", item.total_quantity(), item.unit),
                if item.is_low_stock() {
                    "LOW".to_string()
                } else {
                    "OK".to_string()
                },
            ]
        })
        .collect();

    print(ui, &table(ui, &columns, &rows));

    if ui.mode.is_pretty() {
        let total_stock: u32 = items.iter().map(|item| item.total_quantity()).sum();
        print(ui, &divider(ui));
        println!(
            "Showing {} items \u{00B7} Total Stock: {} units",
            items.len(),
            total_stock
        );
    }
}

/// Print one item in full.
pub fn print_item_detail(ui: &UiContext, item: &InventoryItem, currency: &str) {
    print(ui, &kv(ui, "ID", &item.id));
    print(ui, &kv(ui, "Name", &item.name));
    print(ui, &kv(ui, "Category", &item.category));
    if let Some(ref barcode) = item.barcode {
        print(ui, &kv(ui, "Barcode", barcode));
    }
    if !item.description.is_empty() {
        print(ui, &kv(ui, "Description", &item.description));
    }
    print(ui, &kv(ui, "Unit", &item.unit));
    print(ui, &kv(ui, "Price", &money(currency, item.price)));
    print(ui, &kv(ui, "Min Stock", &item.min_stock.to_string()));
    print(
        ui,
        &kv(ui, "Total Qty", &item.total_quantity().to_string()),
    );
    let status = if item.is_low_stock() {
        badge(ui, Badge::Warn, "Low Stock")
    } else {
        badge(ui, Badge::Ok, "In Stock")
    };
    print(ui, &kv(ui, "Status", &status));
    print(
        ui,
        &kv(
            ui,
            "Updated",
            &format_datetime(&item.last_updated, ui.mode.is_pretty()),
        ),
    );

    if item.quantities.is_empty() {
        print(ui, &kv(ui, "Locations", "none tracked"));
        return;
    }
    for (location, qty) in &item.quantities {
        print(ui, &kv(ui, &format!("  {}", location), &qty.to_string()));
    }
}

/// Print the audit log as a table.
pub fn print_audit_log(ui: &UiContext, entries: &[AuditLogEntry]) {
    if entries.is_empty() {
        print(ui, "No audit entries.");
        return;
    }

    let columns = [
        Column::new("Time"),
        Column::new("Action"),
        Column::new("Item"),
        Column::new("Details"),
    ];
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|entry| {
            vec![
                format_datetime(&entry.timestamp, ui.mode.is_pretty()),
                entry.action.as_str().to_string(),
                truncate(&entry.entity_name, 28),
                truncate(&entry.details, 56),
            ]
        })
        .collect();

    print(ui, &table(ui, &columns, &rows));
}

/// Print the dashboard stat cards.
pub fn print_stats(ui: &UiContext, stats: &Stats) {
    print(ui, &kv(ui, "Types", &stats.total_items.to_string()));
    print(ui, &kv(ui, "Alerts", &stats.low_stock_items.to_string()));
    print(
        ui,
        &kv(ui, "On Site", &stats.active_job_site_items.to_string()),
    );
    print(ui, &kv(ui, "Tools", &stats.total_tools.to_string()));
}
