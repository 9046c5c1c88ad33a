//! UI primitives for the Stockbook CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens, styles
//! - **Render**: Tables, headers, badges, hints, key-value lines
//! - **Format**: String utilities (truncate, short ids, money)

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

// Re-export commonly used render functions
pub use render::{badge, blank_line, divider, hint, kv, print, table, Column};

// Re-export commonly used format functions
pub use format::{format_datetime, money, short_id, truncate};
