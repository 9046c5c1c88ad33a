//! Shared helpers for command handlers.

pub mod parsing;

pub use parsing::{
    coerce_price, coerce_quantity, parse_line_items, parse_location_pairs, validate_format,
};
