//! Migration of persisted, possibly-legacy records into valid items.
//!
//! Persisted inventory payloads are heterogeneous: current records carry a
//! `quantities` map, legacy records carry a singular `location` plus a
//! scalar `quantity`, and some predate the `price` field entirely. This
//! module narrows loose `serde_json::Value` records into `InventoryItem`
//! values permissively: malformed fields default or coerce rather than
//! failing the whole load. Records that already carry `quantities` pass
//! through untouched, so the transform is idempotent.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::{Result, StockError};
use crate::item::InventoryItem;

/// Parse a persisted inventory payload, migrating each record.
///
/// # Errors
///
/// Returns `StockError::Parse` when the payload is not a JSON array at
/// all (corrupt storage). The load boundary substitutes the seed
/// collection in that case rather than presenting an empty inventory.
pub fn parse_inventory(payload: &str) -> Result<Vec<InventoryItem>> {
    let value: Value = serde_json::from_str(payload)?;
    let records = value
        .as_array()
        .ok_or_else(|| StockError::Parse("expected a JSON array of items".to_string()))?;
    Ok(records.iter().map(migrate_record).collect())
}

/// Narrow one loose record into an `InventoryItem`.
///
/// Legacy single-location records (`location` + `quantity`) are converted
/// to a one-entry quantities map; a missing `price` defaults to 0. All
/// other fields pass through with permissive defaults, so a malformed
/// record surfaces as a visibly odd row instead of failing the load.
pub fn migrate_record(record: &Value) -> InventoryItem {
    let quantities = match record.get("quantities").and_then(Value::as_object) {
        Some(map) => map
            .iter()
            .map(|(loc, qty)| (loc.clone(), coerce_quantity(qty)))
            .collect(),
        None => legacy_quantities(record),
    };

    InventoryItem {
        id: read_string(record, "id"),
        name: read_string(record, "name"),
        barcode: record
            .get("barcode")
            .and_then(Value::as_str)
            .map(|s| s.to_string()),
        description: read_string(record, "description"),
        category: read_string(record, "category"),
        quantities,
        min_stock: record.get("minStock").map(coerce_quantity).unwrap_or(0),
        unit: read_string(record, "unit"),
        price: record.get("price").map(coerce_price).unwrap_or(0.0),
        last_updated: read_timestamp(record, "lastUpdated"),
    }
}

/// Synthesize a quantities map from the legacy `location`/`quantity` pair.
fn legacy_quantities(record: &Value) -> BTreeMap<String, u32> {
    let mut map = BTreeMap::new();
    if let Some(location) = record.get("location").and_then(Value::as_str) {
        let qty = record.get("quantity").map(coerce_quantity).unwrap_or(0);
        map.insert(location.to_string(), qty);
    }
    map
}

fn read_string(record: &Value, key: &str) -> String {
    record
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Coerce a value to a non-negative integer count. Negative numbers clamp
/// to 0; numeric strings parse; anything else is 0.
fn coerce_quantity(value: &Value) -> u32 {
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                u.min(u32::MAX as u64) as u32
            } else {
                // Negative or fractional: clamp at zero, truncate
                n.as_f64().map(|f| f.max(0.0) as u32).unwrap_or(0)
            }
        }
        Value::String(s) => s.trim().parse::<u32>().unwrap_or(0),
        _ => 0,
    }
}

/// Coerce a value to a non-negative price.
fn coerce_price(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().map(|f| f.max(0.0)).unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().map(|f| f.max(0.0)).unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Read a timestamp stored either as epoch milliseconds (legacy) or as an
/// RFC 3339 string. Missing or unreadable values map to the Unix epoch so
/// repeated migration stays deterministic.
fn read_timestamp(record: &Value, key: &str) -> DateTime<Utc> {
    match record.get(key) {
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|ms| DateTime::from_timestamp_millis(ms))
            .unwrap_or(DateTime::UNIX_EPOCH),
        Some(Value::String(s)) => DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or(DateTime::UNIX_EPOCH),
        _ => DateTime::UNIX_EPOCH,
    }
}
