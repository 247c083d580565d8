//! HTTP transport types and the blocking `ureq` transport.
//!
//! # Design
//! Requests and responses are plain data. [`BigTimeClient`](crate::BigTimeClient)
//! builds `HttpRequest` values and parses `HttpResponse` values; a
//! [`Transport`] sits in between and performs the actual round-trip. Tests
//! swap in a recording transport, production uses [`UreqTransport`].
//!
//! A transport reports every HTTP status as data. Only failures that leave no
//! response at all (DNS, connect, TLS, timeout) become errors.

use std::time::Duration;

use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ApiError;

/// HTTP method for a request. BigTime operations only ever need these three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// Absolute URL including the query string.
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// First header value matching `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Reason phrase for `status`, e.g. `Not Found`.
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    /// A response whose reason phrase is the canonical one for `status`.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            status_text: canonical_reason(status).to_string(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes one request. Implementations must be safe to share across
/// concurrent tool invocations.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Blocking transport backed by a `ureq` agent.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    timeout: Duration,
}

impl UreqTransport {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_timeout(config.timeout)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        // Statuses stay data so the client decides what a failure is.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = request.method.as_str(), url = %request.url, "sending request");

        let result = match request.method {
            HttpMethod::Get => with_headers(self.agent.get(&request.url), &request.headers).call(),
            HttpMethod::Delete => with_headers(self.agent.delete(&request.url), &request.headers).call(),
            HttpMethod::Post => {
                let builder = with_headers(self.agent.post(&request.url), &request.headers);
                match &request.body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };
        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        debug!(status = status.as_u16(), bytes = body.len(), "received response");

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}

fn with_headers<B>(mut builder: ureq::RequestBuilder<B>, headers: &[(String, String)]) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn canonical_reason(status: u16) -> &'static str {
    ureq::http::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_new_fills_reason_phrase() {
        let response = HttpResponse::new(404, "");
        assert_eq!(response.status_text, "Not Found");
        assert!(!response.is_success());

        let response = HttpResponse::new(429, "");
        assert_eq!(response.status_text, "Too Many Requests");
    }

    #[test]
    fn unknown_status_has_empty_reason() {
        assert_eq!(HttpResponse::new(599, "").status_text, "");
    }

    #[test]
    fn success_range_is_2xx() {
        assert!(HttpResponse::new(200, "[]").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(301, "").is_success());
    }

    #[test]
    fn header_lookup_ignores_case() {
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: "http://localhost/staff".to_string(),
            headers: vec![("X-Auth-Realm".to_string(), "firm".to_string())],
            body: None,
        };
        assert_eq!(request.header("x-auth-realm"), Some("firm"));
        assert_eq!(request.header("X-Auth-ApiToken"), None);
    }

    #[test]
    fn ureq_transport_keeps_configured_timeout() {
        let config = ClientConfig {
            timeout: Duration::from_secs(7),
            ..ClientConfig::default()
        };
        assert_eq!(UreqTransport::new(&config).timeout(), Duration::from_secs(7));
    }
}
