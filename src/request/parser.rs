//! Raw request text parser
//!
//! Format:
//! ```http
//! POST https://api.example.com/login
//! Content-Type: application/json
//!
//! {"user": "a"}
//! ```
//!
//! The first line holds the method and the URL. Header lines follow until the
//! first blank line; everything after it is the body.

use tracing::debug;

use crate::errors::ApilabError;
use crate::models::{Body, HeadersDict, ParsedRequest};

/// Parse resolved request text into a [`ParsedRequest`]
pub fn parse_request(text: &str) -> Result<ParsedRequest, ApilabError> {
    // `lines()` accepts both \n and \r\n
    let lines: Vec<&str> = text.lines().collect();

    let request_line = lines.first().copied().unwrap_or("");
    let (method, url) = parse_request_line(request_line).ok_or_else(|| {
        ApilabError::MalformedRequest(format!(
            "expected 'METHOD URL' on the first line, found '{}'",
            request_line
        ))
    })?;

    let mut headers = HeadersDict::new();
    let mut body_start = None;

    for (i, line) in lines.iter().enumerate().skip(1) {
        if line.trim().is_empty() {
            body_start = Some(i + 1);
            break;
        }
        let (name, value) = parse_header_line(line);
        headers.insert(name, value);
    }

    // Without a blank separator there is no body
    let body = body_start.and_then(|start| {
        let raw = lines.get(start..).unwrap_or_default().join("\n");
        let raw = raw.trim();
        if raw.is_empty() {
            None
        } else {
            Some(Body::from_text(raw))
        }
    });

    debug!(
        method = %method,
        url = %url,
        headers = headers.len(),
        has_body = body.is_some(),
        "Parsed request"
    );

    Ok(ParsedRequest {
        method,
        url,
        headers,
        body,
    })
}

/// Split "GET https://example.com" into method and URL.
///
/// Tokens are separated by single spaces; anything after the URL (such as
/// `HTTP/1.1`) is ignored.
fn parse_request_line(line: &str) -> Option<(String, String)> {
    let mut parts = line.split(' ');
    let method = parts.next().filter(|t| is_token(t))?;
    let url = parts.next().filter(|t| is_token(t))?;
    Some((method.to_string(), url.to_string()))
}

fn is_token(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(char::is_whitespace)
}

/// Split a header line on its first colon.
///
/// A line without a colon becomes a header named after the whole line with an
/// empty value.
fn parse_header_line(line: &str) -> (String, String) {
    match line.split_once(':') {
        Some((name, value)) => (name.trim().to_string(), value.trim().to_string()),
        None => (line.trim().to_string(), String::new()),
    }
}
