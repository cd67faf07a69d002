//! Pure helper functions shared by every dputils service.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **Explicit time** - anything that needs "now" takes it as an argument
//! - **WASM compatible** - all code must work in both native and WASM targets

pub mod collections;
pub mod datetime;
pub mod string;
pub mod value;

// Re-export commonly used functions at module root for convenience
pub use collections::{create_hash_table, move_array_position, move_value_position};
pub use datetime::{format_rfc1123, format_timestamp, offset_millis, parse_datetime, remaining_millis};
pub use string::{get_decimal_mark, normalize_decimal, ordinal_with_suffix};
pub use value::{is_array, is_empty, is_number, is_truthy, parse_json, to_boolean};
