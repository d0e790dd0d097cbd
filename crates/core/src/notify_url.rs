// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Notification URL assembly.
//!
//! The query string is the wire contract with the CI server:
//!
//! ```text
//! {base}/git/notifyCommit?url=<clone url>[&branches=<ref>][&sha1=<revision>]
//! ```
//!
//! Parameters are form-urlencoded and always appear in this order.

use url::form_urlencoded;

/// Path appended to the CI base URL.
pub const NOTIFY_PATH: &str = "/git/notifyCommit";

/// Build the notification URL.
///
/// At most one trailing `/` is stripped from `base_url`. `branches` is left
/// out when `omit_branch_name` is set, `sha1` when `revision` is empty.
pub fn build_notification_url(
    base_url: &str,
    clone_url: &str,
    branch_ref: &str,
    revision: Option<&str>,
    omit_branch_name: bool,
) -> String {
    let base = base_url.strip_suffix('/').unwrap_or(base_url);

    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("url", clone_url);
    if !omit_branch_name {
        query.append_pair("branches", branch_ref);
    }
    if let Some(revision) = revision.filter(|r| !r.is_empty()) {
        query.append_pair("sha1", revision);
    }

    format!("{}{}?{}", base, NOTIFY_PATH, query.finish())
}

#[cfg(test)]
#[path = "notify_url_tests.rs"]
mod tests;
