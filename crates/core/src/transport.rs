// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Outbound HTTP abstraction used to deliver notifications.
//!
//! The dispatcher only needs a single blocking GET; the concrete client,
//! its TLS setup and its timeouts live behind [`OutboundHttpClient`].

/// Error type for outbound calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The server could not be reached.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// TLS negotiation or certificate validation failed.
    #[error("tls error: {0}")]
    Tls(String),

    /// The request did not complete in time.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The URL could not be turned into a request.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Any other failure while issuing the request.
    #[error("request failed: {0}")]
    RequestFailed(String),
}

/// Result type for outbound calls.
pub type TransportResult<T> = Result<T, TransportError>;

/// Response obtained from the CI server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Blocking HTTP client used for notification calls.
///
/// Connection resources are scoped to one `send` call.
pub trait OutboundHttpClient: Send + Sync {
    /// Issue a GET to `url`.
    ///
    /// When `url` is TLS-secured and `allow_insecure_tls` is set, certificate
    /// validation is skipped.
    fn send(&self, url: &str, allow_insecure_tls: bool) -> TransportResult<HttpResponse>;
}

/// Returns true if the URL uses TLS.
pub fn is_secure(url: &str) -> bool {
    url.get(..8)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("https://"))
}

#[cfg(test)]
#[path = "transport_tests.rs"]
mod tests;
