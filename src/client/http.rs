//! HTTP request dispatch
//!
//! [`Transport`] is the seam between the pipeline and the network. The
//! production implementation, [`HttpTransport`], sends exactly one request with
//! reqwest: no retries, no timeout, the library's default redirect policy.

use std::future::Future;
use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder};
use tracing::{debug, info};
use url::Url;

use crate::errors::ApilabError;
use crate::models::{Body, HeadersDict, ParsedRequest, ResponseResult};

pub const USER_AGENT_STRING: &str = concat!("apilab/", env!("CARGO_PKG_VERSION"));

/// Something that can perform one HTTP exchange
pub trait Transport {
    /// Send `request` and wait for the full response.
    ///
    /// Statuses outside 2xx come back as [`ApilabError::Server`] carrying the
    /// complete response.
    fn send(
        &self,
        request: &ParsedRequest,
    ) -> impl Future<Output = Result<ResponseResult, ApilabError>> + Send;
}

/// reqwest-backed [`Transport`]
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, ApilabError> {
        let client = Client::builder()
            .user_agent(USER_AGENT_STRING)
            .build()
            .map_err(|e| ApilabError::DispatchConstruction(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: &ParsedRequest) -> Result<ResponseResult, ApilabError> {
        let builder = build_request(&self.client, request)?;

        info!(method = %request.method, url = %request.url, "Sending request");
        let start = Instant::now();

        let response = builder.send().await.map_err(classify_send_error)?;
        let status = response.status();
        let headers = collect_headers(response.headers());
        let bytes = response.bytes().await.map_err(ApilabError::NoResponse)?;

        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        let text = String::from_utf8_lossy(&bytes);

        let result = ResponseResult {
            status_code: status.as_u16(),
            headers,
            body: Body::from_text(&text),
            elapsed_ms,
        };

        info!(status = result.status_code, elapsed_ms, bytes = bytes.len(), "Response received");

        if result.is_success() {
            Ok(result)
        } else {
            Err(ApilabError::Server(Box::new(result)))
        }
    }
}

/// Turn a [`ParsedRequest`] into a ready-to-send reqwest builder.
///
/// Every problem caught here means nothing was sent.
pub fn build_request(client: &Client, request: &ParsedRequest) -> Result<RequestBuilder, ApilabError> {
    let method = Method::from_bytes(request.method.to_uppercase().as_bytes())
        .map_err(|_| ApilabError::DispatchConstruction(format!("Invalid HTTP method: {}", request.method)))?;

    let url = Url::parse(&request.url)
        .map_err(|e| ApilabError::DispatchConstruction(format!("Invalid URL '{}': {}", request.url, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ApilabError::DispatchConstruction(format!(
            "Unsupported URL scheme '{}' in {}",
            url.scheme(),
            request.url
        )));
    }

    let headers = build_header_map(&request.headers)?;
    let has_content_type = headers.contains_key(CONTENT_TYPE);

    let mut builder = client.request(method, url).headers(headers);

    builder = match &request.body {
        Some(Body::Json(value)) => {
            let payload = serde_json::to_vec(value)
                .map_err(|e| ApilabError::DispatchConstruction(format!("Failed to serialize body: {}", e)))?;
            if !has_content_type {
                builder = builder.header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            }
            builder.body(payload)
        }
        Some(Body::Text(text)) => builder.body(text.clone()),
        None => builder,
    };

    Ok(builder)
}

fn build_header_map(headers: &HeadersDict) -> Result<HeaderMap, ApilabError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ApilabError::DispatchConstruction(format!("Invalid header name: '{}'", name)))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|_| ApilabError::DispatchConstruction(format!("Invalid value for header '{}': '{}'", name, value)))?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

/// Response headers in arrival order; repeated names are joined with ", "
fn collect_headers(headers: &HeaderMap) -> HeadersDict {
    let mut dict = HeadersDict::with_capacity(headers.keys_len());
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        dict.entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }
    dict
}

fn classify_send_error(error: reqwest::Error) -> ApilabError {
    if error.is_builder() {
        ApilabError::DispatchConstruction(error.to_string())
    } else {
        debug!(
            timeout = error.is_timeout(),
            connect = error.is_connect(),
            error = %error,
            "Request failed without a response"
        );
        ApilabError::NoResponse(error)
    }
}
