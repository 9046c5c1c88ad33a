//! Application settings and printer profiles.
//!
//! Settings are loaded once at startup and replaced wholesale on change.
//! Every field carries a serde default so a partially-persisted blob is
//! merged over the defaults on load.

use serde::{Deserialize, Serialize};

/// Process-wide configuration: vocabularies, thresholds, document text,
/// and printer profiles.
///
/// The category/location/unit lists are informational vocabularies, not
/// enforced constraints; items may reference values outside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    #[serde(default = "default_company_name")]
    pub company_name: String,

    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    #[serde(default = "default_locations")]
    pub locations: Vec<String>,

    #[serde(default = "default_units")]
    pub units: Vec<String>,

    /// Minimum stock suggested for newly created items
    #[serde(default = "default_min_stock")]
    pub default_min_stock: u32,

    #[serde(default = "default_true")]
    pub low_stock_alerts: bool,

    /// Tax rate as a percentage (e.g., 8.0 for 8%)
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    #[serde(default = "default_invoice_terms")]
    pub invoice_terms: String,

    #[serde(default = "default_invoice_notes")]
    pub invoice_notes: String,

    #[serde(default = "default_printers")]
    pub printers: Vec<PrinterProfile>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            company_name: default_company_name(),
            categories: default_categories(),
            locations: default_locations(),
            units: default_units(),
            default_min_stock: default_min_stock(),
            low_stock_alerts: true,
            tax_rate: default_tax_rate(),
            currency_symbol: default_currency_symbol(),
            invoice_terms: default_invoice_terms(),
            invoice_notes: default_invoice_notes(),
            printers: default_printers(),
        }
    }
}

/// A configured printer. Configuration data only; actual transport is an
/// external capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrinterProfile {
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(rename = "type")]
    pub printer_type: PrinterType,
    pub connection: PrinterConnection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrinterType {
    Standard,
    Label,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrinterConnection {
    Browser,
    Network,
}

fn default_company_name() -> String {
    "All Aspects".to_string()
}

fn default_categories() -> Vec<String> {
    [
        "Power Tools",
        "Hand Tools",
        "Materials",
        "Safety",
        "Electrical",
        "Plumbing",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_locations() -> Vec<String> {
    ["Warehouse", "Job Site", "Van 1", "Van 2", "Office"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_units() -> Vec<String> {
    [
        "pcs", "box", "sets", "pairs", "ft", "m", "lbs", "kg", "sheets", "rolls", "bags", "tubes",
        "units",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_min_stock() -> u32 {
    5
}

fn default_true() -> bool {
    true
}

fn default_tax_rate() -> f64 {
    8.0
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_invoice_terms() -> String {
    "Payment is due within 30 days. Please make checks payable to the company name listed above."
        .to_string()
}

fn default_invoice_notes() -> String {
    "Thank you for your business!".to_string()
}

fn default_printers() -> Vec<PrinterProfile> {
    vec![
        PrinterProfile {
            id: "p1".to_string(),
            name: "Office Main".to_string(),
            location: "Front Desk".to_string(),
            printer_type: PrinterType::Standard,
            connection: PrinterConnection::Browser,
            ip_address: None,
            port: None,
        },
        PrinterProfile {
            id: "p2".to_string(),
            name: "Warehouse Zebra".to_string(),
            location: "Shipping Dock".to_string(),
            printer_type: PrinterType::Label,
            connection: PrinterConnection::Network,
            ip_address: Some("192.168.1.200".to_string()),
            port: Some("9100".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_merge_over_defaults() {
        let parsed: AppSettings =
            serde_json::from_str(r#"{"companyName": "Acme Contracting"}"#).unwrap();
        assert_eq!(parsed.company_name, "Acme Contracting");
        assert_eq!(parsed.default_min_stock, 5);
        assert!(parsed.categories.contains(&"Power Tools".to_string()));
        assert_eq!(parsed.printers.len(), 2);
    }

    #[test]
    fn test_printer_type_field_renamed() {
        let settings = AppSettings::default();
        let value = serde_json::to_value(&settings).unwrap();
        let printer = &value["printers"][0];
        assert_eq!(printer["type"], "Standard");
        assert_eq!(printer["connection"], "Browser");
    }

    #[test]
    fn test_settings_round_trip() {
        let settings = AppSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let parsed: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, settings);
    }
}
