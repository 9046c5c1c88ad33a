//! Inventory items and the per-location quantity ledger.
//!
//! An item's quantity is not a scalar but a map from location name to
//! count. Totals, low-stock checks, and the active-location view are
//! derived from that map on read.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One tracked product/SKU.
///
/// Serialized with camelCase field names so persisted stores and backups
/// from the original data files load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Opaque unique identifier, generated at creation, never reused.
    ///
    /// Kept as a string: migrated legacy records carry non-UUID ids.
    pub id: String,

    /// Display name
    pub name: String,

    /// Optional scan code / UPC / EAN; lookup is best-effort, not unique
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Category tag; any string is valid
    pub category: String,

    /// Location name -> quantity on hand.
    ///
    /// A key with value 0 means "tracked at this location, currently
    /// empty"; an absent key means "no stock record" (equivalent to 0 for
    /// totals, distinguished for display).
    pub quantities: BTreeMap<String, u32>,

    /// Low-stock threshold, compared against the summed total
    pub min_stock: u32,

    /// Unit-of-measure label (e.g., "pcs", "boxes", "ft")
    pub unit: String,

    /// Selling price or value per unit; 0 for legacy records
    #[serde(default)]
    pub price: f64,

    /// Timestamp of the last mutation to this record
    pub last_updated: DateTime<Utc>,
}

impl InventoryItem {
    /// Sum of the quantities across all locations. Empty map yields 0.
    pub fn total_quantity(&self) -> u32 {
        self.quantities.values().sum()
    }

    /// Whether the total is at or below the minimum stock threshold.
    pub fn is_low_stock(&self) -> bool {
        self.total_quantity() <= self.min_stock
    }

    /// Locations with stock actually on hand (quantity > 0).
    ///
    /// Distinguishes "has stock here" from "tracked but empty".
    pub fn active_locations(&self) -> Vec<(&str, u32)> {
        self.quantities
            .iter()
            .filter(|(_, qty)| **qty > 0)
            .map(|(loc, qty)| (loc.as_str(), *qty))
            .collect()
    }
}

/// Builder for item data entering the store through create or update.
///
/// Excludes `id` and `last_updated`; the store assigns both.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub barcode: Option<String>,
    pub description: String,
    pub category: String,
    pub quantities: BTreeMap<String, u32>,
    pub min_stock: u32,
    pub unit: String,
    pub price: f64,
}

impl NewItem {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            barcode: None,
            description: String::new(),
            category: category.into(),
            quantities: BTreeMap::new(),
            min_stock: 0,
            unit: "pcs".to_string(),
            price: 0.0,
        }
    }

    pub fn with_barcode(mut self, barcode: impl Into<String>) -> Self {
        self.barcode = Some(barcode.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_quantities(mut self, quantities: BTreeMap<String, u32>) -> Self {
        self.quantities = quantities;
        self
    }

    pub fn with_quantity(mut self, location: impl Into<String>, qty: u32) -> Self {
        self.quantities.insert(location.into(), qty);
        self
    }

    pub fn with_min_stock(mut self, min_stock: u32) -> Self {
        self.min_stock = min_stock;
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }
}
