//! Parsing helpers for quantity pairs, prices, and output format.
//!
//! Numeric values from the command line are a form boundary: negative or
//! non-numeric input coerces to 0 rather than erroring, so the core
//! mutation API never sees invalid numbers. Structural mistakes (a pair
//! with no `=`) are still rejected.

use std::collections::BTreeMap;

use crate::errors::CliError;

/// Coerce a string to a non-negative count. Negative or unparseable
/// input yields 0.
pub fn coerce_quantity(value: &str) -> u32 {
    let trimmed = value.trim();
    if let Ok(qty) = trimmed.parse::<u32>() {
        return qty;
    }
    // Negative or fractional input clamps at zero
    trimmed
        .parse::<f64>()
        .map(|f| f.max(0.0) as u32)
        .unwrap_or(0)
}

/// Coerce a string to a non-negative price. Unparseable input yields 0.
pub fn coerce_price(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .map(|f| f.max(0.0))
        .unwrap_or(0.0)
}

/// Parse repeated `LOCATION=QTY` pairs into a quantity map.
pub fn parse_location_pairs(pairs: &[String]) -> anyhow::Result<BTreeMap<String, u32>> {
    let mut map = BTreeMap::new();
    for pair in pairs {
        let (location, qty) = split_pair(pair)?;
        map.insert(location.to_string(), coerce_quantity(qty));
    }
    Ok(map)
}

/// Parse repeated `ID[=QTY]` selections into a line-quantity map.
/// A bare ID selects the item with the default line quantity of 1.
pub fn parse_line_items(pairs: &[String]) -> anyhow::Result<BTreeMap<String, u32>> {
    let mut map = BTreeMap::new();
    for pair in pairs {
        match pair.split_once('=') {
            Some((id, qty)) => {
                map.insert(id.trim().to_string(), coerce_quantity(qty));
            }
            None => {
                map.insert(pair.trim().to_string(), 1);
            }
        }
    }
    Ok(map)
}

/// Validate a `--format` value (table or plain).
pub fn validate_format(value: Option<&str>) -> anyhow::Result<Option<&str>> {
    match value {
        None | Some("table") | Some("plain") => Ok(value),
        Some(other) => Err(CliError::invalid_input(format!(
            "Unsupported format: {} (use table or plain)",
            other
        ))
        .into()),
    }
}

fn split_pair(pair: &str) -> anyhow::Result<(&str, &str)> {
    let Some((location, qty)) = pair.split_once('=') else {
        return Err(CliError::invalid_input(format!(
            "Invalid pair: {} (expected LOCATION=QTY)",
            pair
        ))
        .into());
    };
    let location = location.trim();
    if location.is_empty() {
        return Err(
            CliError::invalid_input(format!("Invalid pair: {} (empty location)", pair)).into(),
        );
    }
    Ok((location, qty))
}
