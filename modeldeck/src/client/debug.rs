//! Request/response debug dump
//!
//! Renders one HTTP exchange as a readable block for `tracing::debug!`.
//! The `Authorization` header is never rendered.

use reqwest::header::{HeaderMap, AUTHORIZATION};

/// Bodies longer than this are cut and suffixed with `...`
pub const MAX_BODY_CHARS: usize = 1000;

/// Captured request side of an exchange
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSnapshot {
    /// HTTP method
    pub method: String,
    /// Full URL including query
    pub url: String,
    /// Headers, Authorization already removed
    pub headers: Vec<(String, String)>,
    /// Request body, if any
    pub body: Option<String>,
}

impl RequestSnapshot {
    /// Capture a built request before it is sent
    pub fn capture(request: &reqwest::Request) -> Self {
        let body = request
            .body()
            .and_then(|b| b.as_bytes())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned());

        Self {
            method: request.method().to_string(),
            url: request.url().to_string(),
            headers: header_lines(request.headers(), true),
            body,
        }
    }
}

/// Captured response side of an exchange
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseSnapshot {
    /// Status code
    pub status: u16,
    /// Canonical reason phrase
    pub reason: String,
    /// Final URL
    pub url: String,
    /// Response headers
    pub headers: Vec<(String, String)>,
    /// Raw response text
    pub body: String,
}

impl ResponseSnapshot {
    /// Capture response metadata; the body is attached once it has been read
    pub fn capture(response: &reqwest::Response) -> Self {
        let status = response.status();
        Self {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("").to_string(),
            url: response.url().to_string(),
            headers: header_lines(response.headers(), false),
            body: String::new(),
        }
    }

    /// Attach the response text
    pub fn with_body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }
}

fn header_lines(headers: &HeaderMap, redact_authorization: bool) -> Vec<(String, String)> {
    headers
        .iter()
        .filter(|(name, _)| !(redact_authorization && name.as_str() == AUTHORIZATION.as_str()))
        .map(|(name, value)| {
            let value = value.to_str().unwrap_or("<binary>").to_string();
            (name.as_str().to_string(), value)
        })
        .collect()
}

fn format_headers(headers: &[(String, String)]) -> String {
    headers
        .iter()
        .filter(|(name, _)| !name.eq_ignore_ascii_case(AUTHORIZATION.as_str()))
        .map(|(name, value)| format!("{}: {}", name, value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cut `text` to [`MAX_BODY_CHARS`] characters
pub fn truncate(text: &str) -> String {
    match text.char_indices().nth(MAX_BODY_CHARS) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// JSON bodies are pretty-printed in full, anything else is truncated
fn format_content(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| truncate(body)),
        Err(_) => truncate(body),
    }
}

/// Render an exchange in the request/response block layout
pub fn render_exchange(request: &RequestSnapshot, response: &ResponseSnapshot) -> String {
    let req_body = request.body.as_deref().map(truncate).unwrap_or_default();

    format!(
        "---------------- request ----------------\n\
         {} {}\n\
         {}\n\
         \n\
         {}\n\
         ---------------- response ----------------\n\
         {} {} {}\n\
         {}\n\
         \n\
         {}\n",
        request.method,
        request.url,
        format_headers(&request.headers),
        req_body,
        response.status,
        response.reason,
        response.url,
        format_headers(&response.headers),
        format_content(&response.body),
    )
}

/// Emit an exchange at debug level
pub fn log_exchange(request: &RequestSnapshot, response: &ResponseSnapshot) {
    tracing::debug!("\n{}", render_exchange(request, response));
}
