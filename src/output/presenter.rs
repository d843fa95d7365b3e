//! Human-readable rendering of requests and responses
//!
//! Rendering is a pure function of its input: the same [`ResponseResult`] and
//! options always produce the same document.

use std::fmt::Write;

use reqwest::StatusCode;

use crate::models::{Body, ParsedRequest, ResponseResult};
use crate::output::formatters::{format_json_value, format_serializable};
use crate::output::terminal::{bold, colorize, colors, status_color};

/// Rendering options
#[derive(Debug, Clone, Copy, Default)]
pub struct PresenterOptions {
    /// Wrap titles and the status line in ANSI colors
    pub colors: bool,
}

/// Render a response as a document with status, time, headers and body sections
pub fn render_response(response: &ResponseResult, options: &PresenterOptions) -> String {
    let mut doc = String::new();

    let status_line = format!("Status: {}", status_text(response.status_code));
    let time_line = format!("Time: {} ms", response.elapsed_ms);

    if options.colors {
        let _ = writeln!(doc, "{}", bold(&status_line, status_color(response.status_code)));
        let _ = writeln!(doc, "{}", colorize(&time_line, colors::AQUA));
    } else {
        let _ = writeln!(doc, "{}", status_line);
        let _ = writeln!(doc, "{}", time_line);
    }

    doc.push('\n');
    push_title(&mut doc, "Headers", options);
    let headers = format_serializable(&response.headers).unwrap_or_else(|_| "{}".to_string());
    let _ = writeln!(doc, "{}", headers);

    doc.push('\n');
    push_title(&mut doc, "Body", options);
    let _ = writeln!(doc, "{}", render_body(&response.body));

    doc
}

/// Render a parsed request back into the raw request dialect
pub fn render_request(request: &ParsedRequest) -> String {
    let mut doc = format!("{} {}\n", request.method, request.url);
    for (name, value) in &request.headers {
        let _ = writeln!(doc, "{}: {}", name, value);
    }
    if let Some(body) = &request.body {
        doc.push('\n');
        let _ = writeln!(doc, "{}", render_body(body));
    }
    doc
}

fn render_body(body: &Body) -> String {
    match body {
        Body::Json(value) => format_json_value(value).unwrap_or_else(|_| body.compact()),
        Body::Text(text) => text.clone(),
    }
}

fn push_title(doc: &mut String, title: &str, options: &PresenterOptions) {
    if options.colors {
        let _ = writeln!(doc, "{}", bold(title, colors::BLUE));
    } else {
        let _ = writeln!(doc, "{}", title);
    }
}

/// "404 Not Found", or just the code when it has no canonical reason
fn status_text(code: u16) -> String {
    match StatusCode::from_u16(code).ok().and_then(|s| s.canonical_reason()) {
        Some(reason) => format!("{} {}", code, reason),
        None => code.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HeadersDict;
    use crate::request::parse_request;
    use serde_json::json;

    fn response(status_code: u16, body: Body) -> ResponseResult {
        let mut headers = HeadersDict::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        headers.insert("x-request-id".to_string(), "abc".to_string());
        ResponseResult {
            status_code,
            headers,
            body,
            elapsed_ms: 42,
        }
    }

    #[test]
    fn test_render_plain_document() {
        let doc = render_response(&response(200, Body::Json(json!({"user": "a"}))), &PresenterOptions::default());
        let expected = "Status: 200 OK\n\
                        Time: 42 ms\n\
                        \n\
                        Headers\n\
                        {\n  \"content-type\": \"application/json\",\n  \"x-request-id\": \"abc\"\n}\n\
                        \n\
                        Body\n\
                        {\n  \"user\": \"a\"\n}\n";
        assert_eq!(doc, expected);
    }

    #[test]
    fn test_render_not_found() {
        let doc = render_response(
            &response(404, Body::Json(json!({"error": "not found"}))),
            &PresenterOptions::default(),
        );
        assert!(doc.starts_with("Status: 404 Not Found\n"));
        assert!(doc.contains("\"error\": \"not found\""));
    }

    #[test]
    fn test_raw_text_body_is_verbatim() {
        let text = "  <html>\n<body>hi</body>\n</html>";
        let doc = render_response(&response(200, Body::Text(text.to_string())), &PresenterOptions::default());
        assert!(doc.ends_with(&format!("Body\n{}\n", text)));
    }

    #[test]
    fn test_unknown_status_has_no_reason() {
        let doc = render_response(&response(599, Body::Text(String::new())), &PresenterOptions::default());
        assert!(doc.starts_with("Status: 599\n"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let r = response(201, Body::Json(json!({"id": 7, "tags": ["a"]})));
        let options = PresenterOptions { colors: true };
        assert_eq!(render_response(&r, &options), render_response(&r, &options));
    }

    #[test]
    fn test_colors_only_when_enabled() {
        let r = response(500, Body::Text("boom".to_string()));
        assert!(!render_response(&r, &PresenterOptions { colors: false }).contains('\x1b'));
        assert!(render_response(&r, &PresenterOptions { colors: true }).contains("\x1b[1;38;5;167m"));
    }

    #[test]
    fn test_render_request_reparses() {
        let text = "POST https://x.test/login\nContent-Type: application/json\n\n{\"user\":\"a\"}";
        let parsed = parse_request(text).unwrap();
        let rendered = render_request(&parsed);
        assert_eq!(
            rendered,
            "POST https://x.test/login\nContent-Type: application/json\n\n{\n  \"user\": \"a\"\n}\n"
        );
        assert_eq!(parse_request(&rendered).unwrap(), parsed);
    }
}
