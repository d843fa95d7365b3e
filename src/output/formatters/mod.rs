//! Output formatters

pub mod json;

pub use json::{format_json_value, format_serializable};
