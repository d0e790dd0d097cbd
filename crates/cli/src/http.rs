// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Blocking HTTP client for notification calls.

use std::error::Error as _;
use std::time::Duration;

use tracing::debug;

use cn_core::transport::is_secure;
use cn_core::{HttpResponse, OutboundHttpClient, TransportError, TransportResult};

/// [`OutboundHttpClient`] backed by `reqwest`.
///
/// A fresh client is built for every call, so connections never outlive the
/// request that opened them.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    timeout: Duration,
}

impl ReqwestClient {
    pub fn new(timeout: Duration) -> Self {
        ReqwestClient { timeout }
    }
}

impl OutboundHttpClient for ReqwestClient {
    fn send(&self, url: &str, allow_insecure_tls: bool) -> TransportResult<HttpResponse> {
        let insecure = allow_insecure_tls && is_secure(url);
        if insecure {
            debug!(url, "certificate validation disabled");
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .danger_accept_invalid_certs(insecure)
            .build()
            .map_err(|e| TransportError::RequestFailed(e.to_string()))?;

        let response = client.get(url).send().map_err(classify)?;
        let status = response.status().as_u16();
        let body = match response.text() {
            Ok(body) => truncate_body(body),
            Err(e) => {
                debug!(url, status, error = %error_chain(&e), "could not read response body");
                String::new()
            }
        };
        Ok(HttpResponse { status, body })
    }
}

/// Longest response body kept for reporting, in characters.
const MAX_BODY_CHARS: usize = 1024;

fn truncate_body(body: String) -> String {
    match body.char_indices().nth(MAX_BODY_CHARS) {
        Some((end, _)) => body[..end].to_string(),
        None => body,
    }
}

/// Map a `reqwest` error onto the transport error kinds.
fn classify(err: reqwest::Error) -> TransportError {
    let message = error_chain(&err);
    if err.is_timeout() {
        TransportError::Timeout(message)
    } else if err.is_builder() {
        TransportError::InvalidUrl(message)
    } else if source_is_tls_failure(&err) {
        TransportError::Tls(message)
    } else if err.is_connect() {
        TransportError::ConnectionFailed(message)
    } else {
        TransportError::RequestFailed(message)
    }
}

/// Join an error and its sources into one line.
fn error_chain(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Whether any underlying cause reports a certificate or TLS problem.
///
/// The top-level message embeds the request URL and is not inspected.
fn source_is_tls_failure(err: &reqwest::Error) -> bool {
    let mut source = err.source();
    while let Some(cause) = source {
        if is_tls_failure(&cause.to_string()) {
            return true;
        }
        source = cause.source();
    }
    false
}

fn is_tls_failure(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("certificate") || lower.contains("tls")
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
