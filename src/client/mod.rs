//! HTTP client functionality

pub mod http;

// Re-exports
pub use http::{build_request, HttpTransport, Transport, USER_AGENT_STRING};
