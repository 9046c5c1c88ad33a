//! Output formatting helpers for the CLI.
//!
//! Formatting utilities for displaying items, stats, and audit entries
//! in the supported formats (JSON, table, plain text).

mod json;
mod text;

// Re-export public API
pub use json::{audit_entries_json, item_json, items_json, scan_json, stats_json};
pub use text::{print_audit_log, print_item_detail, print_item_list, print_stats};
