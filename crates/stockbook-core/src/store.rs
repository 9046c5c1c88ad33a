//! The root state container and exclusive write path.
//!
//! `Store` owns the three sibling top-level collections: the inventory,
//! the settings, and the audit log. Every inventory mutation goes through
//! the methods here so the audit-pairing invariant cannot be bypassed:
//! each state change appends exactly one audit entry, or zero only when
//! the mutation is a no-op (unknown id, or an adjustment to identical
//! values).

use std::collections::{BTreeMap, BTreeSet};

use chrono::Utc;
use uuid::Uuid;

use crate::audit::{AuditAction, AuditLog};
use crate::item::{InventoryItem, NewItem};
use crate::settings::AppSettings;

/// Attribution recorded on every audit entry. Single-user system.
pub const AUDIT_USER: &str = "Admin";

/// Entity name used for data-management audit entries.
const SYSTEM_ENTITY: &str = "System";

/// Outcome of resolving a scanned code against the inventory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// A tracked item matched by barcode or by its own id (labels encode
    /// the id for items without a barcode). Routes to the update flow.
    Existing(String),
    /// No match; routes to the create flow with the code pre-filled as
    /// the new item's barcode.
    Unknown { barcode: String },
}

/// Root state container: inventory, settings, and audit log.
#[derive(Debug, Clone, Default)]
pub struct Store {
    items: Vec<InventoryItem>,
    settings: AppSettings,
    audit: AuditLog,
}

impl Store {
    pub fn new(items: Vec<InventoryItem>, settings: AppSettings, audit: AuditLog) -> Self {
        Self {
            items,
            settings,
            audit,
        }
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }

    /// Look up an item by id.
    pub fn item(&self, id: &str) -> Option<&InventoryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    // --- Mutation API ---

    /// Create a new item from the given data.
    ///
    /// Assigns a fresh id, stamps `last_updated`, and prepends the item so
    /// new records sort first. Returns the id of the created item.
    pub fn create(&mut self, data: NewItem) -> String {
        let id = Uuid::new_v4().to_string();
        let item = InventoryItem {
            id: id.clone(),
            name: data.name,
            barcode: data.barcode,
            description: data.description,
            category: data.category,
            quantities: data.quantities,
            min_stock: data.min_stock,
            unit: data.unit,
            price: data.price,
            last_updated: Utc::now(),
        };
        let details = format!(
            "Created new item in {}. Initial Qty: {}",
            item.category,
            item.total_quantity()
        );
        self.audit.record(
            AuditAction::Create,
            item.name.clone(),
            details,
            Some(id.clone()),
            AUDIT_USER,
        );
        self.items.insert(0, item);
        id
    }

    /// Replace all fields of an existing item except its id.
    ///
    /// Silent no-op when the id does not match any item: a miss indicates
    /// a stale reference, not a runtime error worth raising.
    pub fn update(&mut self, id: &str, data: NewItem) {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return;
        };
        item.name = data.name;
        item.barcode = data.barcode;
        item.description = data.description;
        item.category = data.category;
        item.quantities = data.quantities;
        item.min_stock = data.min_stock;
        item.unit = data.unit;
        item.price = data.price;
        item.last_updated = Utc::now();

        let details = format!("Updated item details. Total Qty: {}", item.total_quantity());
        let name = item.name.clone();
        self.audit.record(
            AuditAction::Update,
            name,
            details,
            Some(id.to_string()),
            AUDIT_USER,
        );
    }

    /// Remove an item permanently. No soft delete: the only trace left is
    /// the audit entry, which snapshots the name. Silent no-op on a miss.
    pub fn delete(&mut self, id: &str) {
        let Some(pos) = self.items.iter().position(|item| item.id == id) else {
            return;
        };
        let removed = self.items.remove(pos);
        self.audit.record(
            AuditAction::Delete,
            removed.name,
            "Deleted item permanently",
            Some(id.to_string()),
            AUDIT_USER,
        );
    }

    /// Replace an item's quantity map wholesale.
    ///
    /// Callers supply the complete new map. The audit details diff the old
    /// and new maps across the union of their location keys; if no
    /// location's value changed, no audit entry is appended. Silent no-op
    /// on an unknown id.
    pub fn adjust(&mut self, id: &str, new_quantities: BTreeMap<String, u32>) {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return;
        };

        let changes = diff_quantities(&item.quantities, &new_quantities);
        item.quantities = new_quantities;
        item.last_updated = Utc::now();

        if changes.is_empty() {
            return;
        }
        let details = format!("Stock adjustment: {}", changes.join(", "));
        let name = item.name.clone();
        self.audit.record(
            AuditAction::Adjust,
            name,
            details,
            Some(id.to_string()),
            AUDIT_USER,
        );
    }

    // --- Data management ---

    /// Wholesale-replace the inventory with an imported collection.
    pub fn replace_all(&mut self, items: Vec<InventoryItem>) {
        let count = items.len();
        self.items = items;
        self.audit.record(
            AuditAction::Settings,
            SYSTEM_ENTITY,
            format!("Imported {} items from backup file", count),
            None,
            AUDIT_USER,
        );
    }

    /// Delete every inventory item (destructive reset). The audit log
    /// itself is kept so the reset remains visible.
    pub fn clear_items(&mut self) {
        self.items.clear();
        self.audit.record(
            AuditAction::Settings,
            SYSTEM_ENTITY,
            "Cleared all inventory data",
            None,
            AUDIT_USER,
        );
    }

    /// Clear the audit trail. Part of the destructive reset path only;
    /// the reset that wiped the log is the one event it cannot show.
    pub fn clear_audit_log(&mut self) {
        self.audit.clear();
    }

    /// Record an export event (e.g., "Exported inventory to JSON").
    pub fn record_export(&mut self, details: impl Into<String>) {
        self.audit.record(
            AuditAction::Settings,
            SYSTEM_ENTITY,
            details,
            None,
            AUDIT_USER,
        );
    }

    /// Replace the settings wholesale. Settings edits are not audited;
    /// only data-management events carry the SETTINGS action.
    pub fn update_settings(&mut self, settings: AppSettings) {
        self.settings = settings;
    }

    // --- Lookups ---

    /// Resolve a scanned code: an item whose barcode or id equals the
    /// code routes to the update flow; otherwise route to the create flow
    /// with the code pre-filled as a barcode.
    pub fn resolve_scan(&self, code: &str) -> ScanOutcome {
        match self
            .items
            .iter()
            .find(|item| item.barcode.as_deref() == Some(code) || item.id == code)
        {
            Some(item) => ScanOutcome::Existing(item.id.clone()),
            None => ScanOutcome::Unknown {
                barcode: code.to_string(),
            },
        }
    }
}

/// Signed per-location delta strings for every location whose value
/// changed, across the union of keys in either map. Absent keys count
/// as 0.
fn diff_quantities(old: &BTreeMap<String, u32>, new: &BTreeMap<String, u32>) -> Vec<String> {
    let locations: BTreeSet<&String> = old.keys().chain(new.keys()).collect();
    let mut changes = Vec::new();
    for loc in locations {
        let old_qty = *old.get(loc.as_str()).unwrap_or(&0) as i64;
        let new_qty = *new.get(loc.as_str()).unwrap_or(&0) as i64;
        if old_qty != new_qty {
            changes.push(format!("{}: {:+}", loc, new_qty - old_qty));
        }
    }
    changes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_one_item() -> (Store, String) {
        let mut store = Store::default();
        let id = store.create(
            NewItem::new("Milwaukee M18 Impact Driver", "Power Tools")
                .with_barcode("045242048572")
                .with_quantity("Warehouse", 10)
                .with_min_stock(2)
                .with_price(149.0),
        );
        (store, id)
    }

    #[test]
    fn test_create_assigns_id_and_audits() {
        let (store, id) = store_with_one_item();
        assert_eq!(store.items().len(), 1);
        let item = store.item(&id).expect("created item");
        assert_eq!(item.name, "Milwaukee M18 Impact Driver");

        assert_eq!(store.audit().len(), 1);
        let entry = &store.audit().entries()[0];
        assert_eq!(entry.action, AuditAction::Create);
        assert_eq!(entry.entity_id.as_deref(), Some(id.as_str()));
        assert!(entry.details.contains("Power Tools"));
        assert!(entry.details.contains("Initial Qty: 10"));
    }

    #[test]
    fn test_create_prepends_new_items() {
        let (mut store, first_id) = store_with_one_item();
        let second_id = store.create(NewItem::new("Tape Measure", "Hand Tools"));
        assert_eq!(store.items()[0].id, second_id);
        assert_eq!(store.items()[1].id, first_id);
    }

    #[test]
    fn test_update_replaces_fields_and_audits() {
        let (mut store, id) = store_with_one_item();
        store.update(
            &id,
            NewItem::new("Renamed Driver", "Power Tools").with_quantity("Van 1", 4),
        );

        let item = store.item(&id).unwrap();
        assert_eq!(item.name, "Renamed Driver");
        assert_eq!(item.quantities.get("Van 1"), Some(&4));
        assert!(!item.quantities.contains_key("Warehouse"));

        let entry = &store.audit().entries()[0];
        assert_eq!(entry.action, AuditAction::Update);
        assert!(entry.details.contains("Total Qty: 4"));
    }

    #[test]
    fn test_update_unknown_id_is_silent_noop() {
        let (mut store, _) = store_with_one_item();
        let before = store.audit().len();
        store.update("missing-id", NewItem::new("Ghost", "Materials"));
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.audit().len(), before);
    }

    #[test]
    fn test_delete_removes_and_snapshots_name() {
        let (mut store, id) = store_with_one_item();
        store.delete(&id);
        assert!(store.items().is_empty());

        let entry = &store.audit().entries()[0];
        assert_eq!(entry.action, AuditAction::Delete);
        assert_eq!(entry.entity_name, "Milwaukee M18 Impact Driver");
    }

    #[test]
    fn test_delete_unknown_id_is_silent_noop() {
        let (mut store, _) = store_with_one_item();
        let before = store.audit().len();
        store.delete("missing-id");
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.audit().len(), before);
    }

    #[test]
    fn test_adjust_diffs_union_of_locations() {
        let (mut store, id) = store_with_one_item();
        let mut new_quantities = BTreeMap::new();
        new_quantities.insert("Warehouse".to_string(), 7);
        new_quantities.insert("Van 1".to_string(), 2);
        store.adjust(&id, new_quantities);

        let entry = &store.audit().entries()[0];
        assert_eq!(entry.action, AuditAction::Adjust);
        assert!(entry.details.contains("Warehouse: -3"));
        assert!(entry.details.contains("Van 1: +2"));
    }

    #[test]
    fn test_adjust_identical_values_appends_no_entry() {
        let (mut store, id) = store_with_one_item();
        let before = store.audit().len();
        let same = store.item(&id).unwrap().quantities.clone();
        store.adjust(&id, same);
        assert_eq!(store.audit().len(), before);
    }

    #[test]
    fn test_adjust_to_tracked_zero_is_a_change() {
        let (mut store, id) = store_with_one_item();
        let mut new_quantities = BTreeMap::new();
        new_quantities.insert("Warehouse".to_string(), 0);
        store.adjust(&id, new_quantities);

        let entry = &store.audit().entries()[0];
        assert!(entry.details.contains("Warehouse: -10"));
        // Key stays present with value 0: tracked but empty
        assert_eq!(store.item(&id).unwrap().quantities.get("Warehouse"), Some(&0));
    }

    #[test]
    fn test_replace_all_audits_import_count() {
        let (mut store, _) = store_with_one_item();
        store.replace_all(Vec::new());
        assert!(store.items().is_empty());
        let entry = &store.audit().entries()[0];
        assert_eq!(entry.action, AuditAction::Settings);
        assert!(entry.details.contains("Imported 0 items"));
    }

    #[test]
    fn test_clear_items_keeps_audit_trail() {
        let (mut store, _) = store_with_one_item();
        store.clear_items();
        assert!(store.items().is_empty());
        assert_eq!(store.audit().entries()[0].details, "Cleared all inventory data");
        // The CREATE entry from setup is still there
        assert_eq!(store.audit().len(), 2);
    }

    #[test]
    fn test_clear_audit_log_empties_trail() {
        let (mut store, _) = store_with_one_item();
        assert!(!store.audit().is_empty());
        store.clear_audit_log();
        assert!(store.audit().is_empty());
    }

    #[test]
    fn test_scan_resolves_barcode_then_id() {
        let (store, id) = store_with_one_item();
        assert_eq!(
            store.resolve_scan("045242048572"),
            ScanOutcome::Existing(id.clone())
        );
        assert_eq!(store.resolve_scan(&id), ScanOutcome::Existing(id));
        assert_eq!(
            store.resolve_scan("no-such-code"),
            ScanOutcome::Unknown {
                barcode: "no-such-code".to_string()
            }
        );
    }

    #[test]
    fn test_settings_update_is_not_audited() {
        let (mut store, _) = store_with_one_item();
        let before = store.audit().len();
        let mut settings = store.settings().clone();
        settings.company_name = "New Name".to_string();
        store.update_settings(settings);
        assert_eq!(store.settings().company_name, "New Name");
        assert_eq!(store.audit().len(), before);
    }
}
