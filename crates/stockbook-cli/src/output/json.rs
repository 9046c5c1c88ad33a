//! JSON output formatting.

use stockbook_core::views::Stats;
use stockbook_core::{AuditLogEntry, InventoryItem, ScanOutcome};

/// Convert an item to JSON for output, with the derived ledger fields
/// included alongside the stored record.
pub fn item_json(item: &InventoryItem) -> serde_json::Value {
    let mut value = serde_json::to_value(item).unwrap_or_default();
    if let Some(map) = value.as_object_mut() {
        map.insert(
            "totalQuantity".to_string(),
            serde_json::json!(item.total_quantity()),
        );
        map.insert("lowStock".to_string(), serde_json::json!(item.is_low_stock()));
    }
    value
}

/// Convert multiple items to a JSON array for output.
pub fn items_json(items: &[&InventoryItem]) -> Vec<serde_json::Value> {
    items.iter().map(|item| item_json(item)).collect()
}

/// Convert audit entries to a JSON array for output.
pub fn audit_entries_json(entries: &[AuditLogEntry]) -> serde_json::Value {
    serde_json::to_value(entries).unwrap_or_default()
}

/// Convert dashboard stats to JSON for output.
pub fn stats_json(stats: &Stats) -> serde_json::Value {
    serde_json::json!({
        "totalItems": stats.total_items,
        "lowStockItems": stats.low_stock_items,
        "activeJobSiteItems": stats.active_job_site_items,
        "totalTools": stats.total_tools,
    })
}

/// Convert a scan resolution to JSON for output.
pub fn scan_json(outcome: &ScanOutcome, item: Option<&InventoryItem>) -> serde_json::Value {
    match outcome {
        ScanOutcome::Existing(id) => serde_json::json!({
            "outcome": "existing",
            "itemId": id,
            "item": item.map(item_json),
        }),
        ScanOutcome::Unknown { barcode } => serde_json::json!({
            "outcome": "new",
            "barcode": barcode,
        }),
    }
}
