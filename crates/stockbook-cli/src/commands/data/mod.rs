//! Data management handlers: export, import, destructive clear.

mod clear;
mod export;
mod import;

pub use clear::handle_clear;
pub use export::handle_export;
pub use import::handle_import;
