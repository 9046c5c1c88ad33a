//! Application-level utilities for the Stockbook CLI.
//!
//! This module provides:
//! - Path resolution for config and store directories
//! - The application context threading CLI args through handlers

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use resolver::{missing_store_message, resolve_config_path, resolve_store_dir};
