//! Request pipeline: resolve -> parse -> send
//!
//! Host concerns (reading files, the network, displaying output) are passed in,
//! so the whole flow runs in tests against a fake [`Transport`].

use tracing::debug;

use crate::client::Transport;
use crate::errors::ApilabError;
use crate::models::{EnvironmentMap, ParsedRequest, ResponseResult};
use crate::request::parse_request;
use crate::variables::{resolve_placeholders, unresolved_placeholders};

/// Resolve placeholders and parse, without sending anything
pub fn prepare_request(raw_text: &str, env: &EnvironmentMap) -> Result<ParsedRequest, ApilabError> {
    let resolved = resolve_placeholders(raw_text, env);

    let unresolved = unresolved_placeholders(&resolved);
    if !unresolved.is_empty() {
        debug!(names = ?unresolved, "Placeholders left unresolved");
    }

    parse_request(&resolved)
}

/// Run one request end to end.
///
/// A malformed request fails before the transport is touched.
pub async fn run_request<T: Transport>(
    raw_text: &str,
    env: &EnvironmentMap,
    transport: &T,
) -> Result<ResponseResult, ApilabError> {
    let request = prepare_request(raw_text, env)?;
    transport.send(&request).await
}
