//! Same-origin proxy to the storefront backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only talks to this host. Every `/api/{*path}` request is
//! replayed against `BACKEND_URL/{path}` with its method, query string, body
//! and a small allowlist of headers, and the upstream status, content type and
//! body are returned unchanged. Backend `{status: false}` envelopes pass
//! through as ordinary responses; only transport failures become proxy errors.
//!
//! TRADE-OFFS
//! ==========
//! Bodies are buffered rather than streamed. Uploads are bounded by
//! `MAX_BODY_BYTES` and responses are small JSON documents or single images,
//! so buffering keeps the handler simple.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use crate::config::HostConfig;

/// Prefix the proxy is mounted under.
pub const API_PREFIX: &str = "/api";

/// Request headers forwarded upstream.
pub const FORWARDED_REQUEST_HEADERS: [HeaderName; 3] = [header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("backend client build failed: {0}")]
    ClientBuild(String),
    #[error("backend timed out")]
    Timeout,
    #[error("backend unreachable: {0}")]
    Unreachable(String),
    #[error("backend response unreadable: {0}")]
    Body(String),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::ClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unreachable(_) | Self::Body(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() { Self::Timeout } else { Self::Unreachable(e.to_string()) }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = serde_json::json!({ "status": false, "message": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

/// Shared upstream client plus the backend origin.
#[derive(Clone)]
pub struct BackendProxy {
    http: reqwest::Client,
    backend_url: String,
}

impl BackendProxy {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &HostConfig) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ProxyError::ClientBuild(e.to_string()))?;
        Ok(Self { http, backend_url: config.backend_url.clone() })
    }
}

/// Backend URL for a proxied path and optional raw query string.
pub fn upstream_url(backend_url: &str, path: &str, query: Option<&str>) -> String {
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{backend_url}/{path}?{q}"),
        None => format!("{backend_url}/{path}"),
    }
}

/// Backend path of a proxied request, still percent-encoded so encoded
/// separators inside a segment stay inside it.
pub fn backend_path(uri: &Uri) -> &str {
    let path = uri.path();
    path.strip_prefix(API_PREFIX).unwrap_or(path)
}

/// Allowlisted request headers, in allowlist order.
pub fn forwarded_headers(headers: &HeaderMap) -> Vec<(HeaderName, HeaderValue)> {
    FORWARDED_REQUEST_HEADERS
        .iter()
        .filter_map(|name| headers.get(name).map(|value| (name.clone(), value.clone())))
        .collect()
}

/// First path segment, for logs. Several endpoints carry the session token
/// later in the path, so the full path is never logged.
pub fn endpoint_label(path: &str) -> &str {
    path.trim_start_matches('/').split('/').next().unwrap_or_default()
}

/// `ANY /api/{*path}`: replay the request against the backend.
pub async fn forward(
    State(proxy): State<BackendProxy>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let path = backend_path(&uri);
    let url = upstream_url(&proxy.backend_url, path, uri.query());
    let endpoint = endpoint_label(path);

    let mut request = proxy.http.request(method.clone(), url);
    for (name, value) in forwarded_headers(&headers) {
        request = request.header(name, value);
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await.map_err(|e| {
        tracing::warn!(%method, endpoint, error = %e, "backend request failed");
        ProxyError::from(e)
    })?;

    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await.map_err(|e| ProxyError::Body(e.to_string()))?;
    tracing::debug!(%method, endpoint, status = status.as_u16(), bytes = bytes.len(), "proxied");

    let mut response = (status, bytes).into_response();
    match content_type {
        Some(value) => response.headers_mut().insert(header::CONTENT_TYPE, value),
        None => response.headers_mut().remove(header::CONTENT_TYPE),
    };
    Ok(response)
}
