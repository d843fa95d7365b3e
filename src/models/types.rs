//! Core data types and type aliases
//!
//! # Why IndexMap?
//!
//! Header maps are [`IndexMap`]s so that the order a user wrote headers in is the
//! order they are displayed in. HTTP semantics don't depend on it, output does.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value as JsonValue;

// =============================================================================
// TYPE ALIASES
// =============================================================================

/// Header name to value. Re-inserting a name keeps its first position.
pub type HeadersDict = IndexMap<String, String>;

/// Variable name to value, used for `{{name}}` substitution
pub type EnvironmentMap = IndexMap<String, String>;

// =============================================================================
// REQUEST
// =============================================================================

/// Body of a request or response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Body {
    /// Text that parsed as JSON
    Json(JsonValue),
    /// Anything else, kept as written
    Text(String),
}

impl Body {
    /// Classify text: JSON if it parses, raw text otherwise
    pub fn from_text(text: &str) -> Self {
        match serde_json::from_str::<JsonValue>(text) {
            Ok(value) => Body::Json(value),
            Err(_) => Body::Text(text.to_string()),
        }
    }

    /// Single-line form used in error messages
    pub fn compact(&self) -> String {
        match self {
            Body::Json(value) => serde_json::to_string(value).unwrap_or_default(),
            Body::Text(text) => serde_json::to_string(text).unwrap_or_default(),
        }
    }
}

/// A request extracted from raw request text
///
/// `method` and `url` are always non-empty and contain no whitespace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedRequest {
    pub method: String,
    pub url: String,
    pub headers: HeadersDict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
}

// =============================================================================
// RESPONSE
// =============================================================================

/// Outcome of a completed HTTP exchange, including error statuses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseResult {
    pub status_code: u16,
    pub headers: HeadersDict,
    pub body: Body,
    /// Wall-clock time from dispatch until the full body arrived
    pub elapsed_ms: u64,
}

impl ResponseResult {
    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}
