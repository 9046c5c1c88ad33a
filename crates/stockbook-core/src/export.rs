//! Export formats and document generation.
//!
//! JSON export is a full serialization of the inventory collection,
//! byte-for-byte re-importable. CSV exports come in two shapes: the full
//! inventory sheet, and per-document extracts (report/labels as an
//! item-per-row listing, invoice/quote as priced line items with a
//! trailing grand-total row).

use std::collections::BTreeMap;

use crate::error::Result;
use crate::item::InventoryItem;

/// Which document a CSV or print extract is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocKind {
    Report,
    Labels,
    Invoice,
    Quote,
}

impl DocKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Report => "report",
            Self::Labels => "labels",
            Self::Invoice => "invoice",
            Self::Quote => "quote",
        }
    }

    /// Invoice and quote share the priced line-item layout.
    pub fn is_priced(&self) -> bool {
        matches!(self, Self::Invoice | Self::Quote)
    }
}

/// Totals block for an invoice or quote.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvoiceTotals {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

/// Full JSON serialization of the inventory collection.
pub fn export_json(items: &[InventoryItem]) -> Result<String> {
    Ok(serde_json::to_string_pretty(items)?)
}

/// Full inventory sheet: one row per item with a locations breakdown.
pub fn inventory_csv(items: &[InventoryItem]) -> String {
    let headers = [
        "Name",
        "Category",
        "Locations Breakdown",
        "Total Quantity",
        "Unit",
        "Price",
        "Min Stock",
        "Barcode",
        "Description",
    ];

    let mut lines = vec![headers.join(",")];
    for item in items {
        let breakdown = item
            .quantities
            .iter()
            .map(|(loc, qty)| format!("{}: {}", loc, qty))
            .collect::<Vec<_>>()
            .join(" | ");
        let row = [
            csv_quote(&item.name),
            csv_quote(&item.category),
            csv_quote(&breakdown),
            item.total_quantity().to_string(),
            item.unit.clone(),
            item.price.to_string(),
            item.min_stock.to_string(),
            item.barcode
                .as_deref()
                .map(csv_quote)
                .unwrap_or_default(),
            csv_quote(&item.description),
        ];
        lines.push(row.join(","));
    }
    lines.join("\n")
}

/// Item-per-row extract for report and label documents.
pub fn items_csv(items: &[&InventoryItem]) -> String {
    let headers = ["Name", "Barcode", "Category", "Total Qty", "Location"];
    let mut lines = vec![headers.join(",")];
    for item in items {
        let locations = item
            .quantities
            .keys()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        let row = [
            csv_quote(&item.name),
            csv_quote(item.barcode.as_deref().unwrap_or("")),
            item.category.clone(),
            item.total_quantity().to_string(),
            csv_quote(&locations),
        ];
        lines.push(row.join(","));
    }
    lines.join("\n")
}

/// Priced line-item extract for invoices and quotes, with a trailing
/// grand-total row. Line quantities default to 1 when not overridden.
pub fn line_items_csv(items: &[&InventoryItem], line_qty: &BTreeMap<String, u32>) -> String {
    let headers = ["Item", "Description", "Qty", "Unit Price", "Total"];
    let mut lines = vec![headers.join(",")];
    let mut grand_total = 0.0;
    for item in items {
        let qty = line_qty.get(&item.id).copied().unwrap_or(1);
        let total = qty as f64 * item.price;
        grand_total += total;
        let row = [
            csv_quote(&item.name),
            csv_quote(&item.description),
            qty.to_string(),
            item.price.to_string(),
            format!("{:.2}", total),
        ];
        lines.push(row.join(","));
    }
    lines.push(format!(",,,GRAND TOTAL,{:.2}", grand_total));
    lines.join("\n")
}

/// Subtotal, tax, and total for an invoice or quote.
pub fn invoice_totals(
    items: &[&InventoryItem],
    line_qty: &BTreeMap<String, u32>,
    tax_rate_percent: f64,
) -> InvoiceTotals {
    let subtotal: f64 = items
        .iter()
        .map(|item| line_qty.get(&item.id).copied().unwrap_or(1) as f64 * item.price)
        .sum();
    let tax = subtotal * tax_rate_percent / 100.0;
    InvoiceTotals {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}

/// Quote a CSV field, doubling embedded quotes.
fn csv_quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
