//! Derived views over the current inventory.
//!
//! Pure functions recomputed on read. Collection sizes are small (tens to
//! low thousands of rows), so there is no incremental maintenance or
//! caching to go stale.

use std::collections::BTreeSet;

use crate::item::InventoryItem;
use crate::settings::AppSettings;

/// Location counted by the "on site" stat.
pub const JOB_SITE_LOCATION: &str = "Job Site";

/// Categories counted by the "tools" stat.
pub const TOOL_CATEGORIES: [&str; 2] = ["Power Tools", "Hand Tools"];

/// Filter for querying items. All predicates are conjunctive.
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    /// Case-insensitive substring matched against name, description,
    /// category, and barcode
    pub search: Option<String>,

    /// Exact category match; `None` means All
    pub category: Option<String>,

    /// Location the item must have stock at (> 0); `None` means All
    pub location: Option<String>,

    /// Keep only items at or below their minimum stock
    pub low_stock_only: bool,
}

impl ItemFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn low_stock_only(mut self) -> Self {
        self.low_stock_only = true;
        self
    }

    fn matches(&self, item: &InventoryItem) -> bool {
        if let Some(ref term) = self.search {
            let term = term.to_lowercase();
            let matches_search = item.name.to_lowercase().contains(&term)
                || item.description.to_lowercase().contains(&term)
                || item.category.to_lowercase().contains(&term)
                || item
                    .barcode
                    .as_deref()
                    .is_some_and(|code| code.to_lowercase().contains(&term));
            if !matches_search {
                return false;
            }
        }

        if let Some(ref category) = self.category {
            if item.category != *category {
                return false;
            }
        }

        if let Some(ref location) = self.location {
            if item.quantities.get(location).copied().unwrap_or(0) == 0 {
                return false;
            }
        }

        if self.low_stock_only && !item.is_low_stock() {
            return false;
        }

        true
    }
}

/// Apply a filter, preserving collection order.
pub fn filter_items<'a>(items: &'a [InventoryItem], filter: &ItemFilter) -> Vec<&'a InventoryItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// Aggregate counts shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Number of tracked item types
    pub total_items: usize,
    /// Items at or below their minimum stock
    pub low_stock_items: usize,
    /// Items with stock on hand at the job site
    pub active_job_site_items: usize,
    /// Items in the tool categories
    pub total_tools: usize,
}

/// Fold the collection into dashboard stats.
pub fn stats(items: &[InventoryItem]) -> Stats {
    Stats {
        total_items: items.len(),
        low_stock_items: items.iter().filter(|i| i.is_low_stock()).count(),
        active_job_site_items: items
            .iter()
            .filter(|i| i.quantities.get(JOB_SITE_LOCATION).copied().unwrap_or(0) > 0)
            .count(),
        total_tools: items
            .iter()
            .filter(|i| TOOL_CATEGORIES.contains(&i.category.as_str()))
            .count(),
    }
}

/// Selectable categories: the configured vocabulary plus any category
/// actually present on items, sorted. Guards against items referencing a
/// category later removed from settings.
pub fn all_categories(items: &[InventoryItem], settings: &AppSettings) -> Vec<String> {
    let mut set: BTreeSet<String> = settings.categories.iter().cloned().collect();
    for item in items {
        set.insert(item.category.clone());
    }
    set.into_iter().collect()
}

/// Selectable locations: configured vocabulary plus any key found in item
/// quantity maps, sorted.
pub fn all_locations(items: &[InventoryItem], settings: &AppSettings) -> Vec<String> {
    let mut set: BTreeSet<String> = settings.locations.iter().cloned().collect();
    for item in items {
        for location in item.quantities.keys() {
            set.insert(location.clone());
        }
    }
    set.into_iter().collect()
}
