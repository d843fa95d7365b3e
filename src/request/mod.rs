//! Request text parsing
//!
//! Turns resolved request text into a [`ParsedRequest`](crate::models::ParsedRequest).

mod parser;

pub use parser::parse_request;
