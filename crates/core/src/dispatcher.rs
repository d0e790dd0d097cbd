// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Notification dispatch.
//!
//! A dispatch walks a linear state machine with no retries:
//! 1. Load the hook toggle; absent or disabled hooks are a successful no-op
//! 2. Load the repository settings; absent settings are a successful no-op
//! 3. Resolve the clone type and clone URL, build the notification URL
//! 4. Issue one GET and turn the outcome into a [`NotificationResult`]
//!
//! Nothing past this boundary returns an error: misconfiguration and
//! transport failures become unsuccessful results.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::clone_url::CloneUrlResolver;
use crate::error::{Error, Result};
use crate::event::Repository;
use crate::notify_url::build_notification_url;
use crate::settings::{RepositorySettings, SettingsStore, BASE_URL};
use crate::transport::OutboundHttpClient;

/// Outcome of one dispatch attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationResult {
    pub successful: bool,
    /// The notification URL, when one was built.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Human-readable detail (server response, skip reason or failure).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl NotificationResult {
    /// A successful no-op: nothing was configured to notify.
    pub fn skipped(reason: &str) -> Self {
        NotificationResult {
            successful: true,
            url: None,
            message: Some(reason.to_string()),
        }
    }

    pub fn sent(url: String, message: String) -> Self {
        NotificationResult {
            successful: true,
            url: Some(url),
            message: Some(message),
        }
    }

    pub fn failed(url: Option<String>, message: String) -> Self {
        NotificationResult {
            successful: false,
            url,
            message: Some(message),
        }
    }
}

/// Sends notifications to the CI server for one repository at a time.
pub struct NotificationDispatcher {
    store: Arc<dyn SettingsStore>,
    clone_urls: CloneUrlResolver,
    client: Arc<dyn OutboundHttpClient>,
}

impl NotificationDispatcher {
    pub fn new(
        store: Arc<dyn SettingsStore>,
        clone_urls: CloneUrlResolver,
        client: Arc<dyn OutboundHttpClient>,
    ) -> Self {
        NotificationDispatcher {
            store,
            clone_urls,
            client,
        }
    }

    /// Notify the CI server that `branch_ref` of `repository` moved.
    ///
    /// `branch_ref` is expected in `refs/heads/<name>` form. `pr_id` is only
    /// used for logging.
    pub fn dispatch(
        &self,
        repository: &Repository,
        branch_ref: &str,
        revision: Option<&str>,
        pr_id: Option<u64>,
    ) -> NotificationResult {
        match self.store.hook_config(repository) {
            None => {
                debug!(%repository, "no hook configured");
                return NotificationResult::skipped("hook not configured");
            }
            Some(hook) if !hook.enabled => {
                debug!(%repository, "hook disabled");
                return NotificationResult::skipped("hook disabled");
            }
            Some(_) => {}
        }

        let Some(settings) = self.store.settings(repository) else {
            debug!(%repository, "no settings configured");
            return NotificationResult::skipped("settings not configured");
        };

        let url = match self.build_url(repository, &settings, branch_ref, revision) {
            Ok(url) => url,
            Err(e) => {
                warn!(%repository, error = %e, "cannot build notification url");
                return NotificationResult::failed(None, e.to_string());
            }
        };

        // The client's connection pool is dropped inside send on every path.
        match self.client.send(&url, settings.ignore_certs) {
            Ok(response) => {
                info!(
                    %repository,
                    branch_ref,
                    ?pr_id,
                    status = response.status,
                    "notified CI server"
                );
                NotificationResult::sent(
                    url,
                    format!("CI server responded with {}: {}", response.status, response.body),
                )
            }
            Err(e) => {
                warn!(%repository, branch_ref, ?pr_id, error = %e, "failed to notify CI server");
                NotificationResult::failed(Some(url), format!("error triggering CI: {}", e))
            }
        }
    }

    /// Compute the notification URL without sending anything.
    ///
    /// Returns `Ok(None)` if the repository has no hook or no settings.
    pub fn notification_url(
        &self,
        repository: &Repository,
        branch_ref: &str,
        revision: Option<&str>,
    ) -> Result<Option<String>> {
        if self.store.hook_config(repository).is_none() {
            return Ok(None);
        }
        match self.store.settings(repository) {
            Some(settings) => self
                .build_url(repository, &settings, branch_ref, revision)
                .map(Some),
            None => Ok(None),
        }
    }

    fn build_url(
        &self,
        repository: &Repository,
        settings: &RepositorySettings,
        branch_ref: &str,
        revision: Option<&str>,
    ) -> Result<String> {
        let clone_type = settings
            .clone_type()
            .map_err(|e| Error::InvalidConfiguration(e.to_string()))?;
        let base_url = match settings.base_url.as_deref().map(str::trim) {
            Some(base) if !base.is_empty() => base,
            _ => {
                return Err(Error::InvalidConfiguration(format!(
                    "no CI base URL configured for {} (set {})",
                    repository, BASE_URL
                )))
            }
        };
        let clone_url =
            self.clone_urls
                .resolve(repository, clone_type, settings.clone_url.as_deref())?;

        Ok(build_notification_url(
            base_url,
            &clone_url,
            branch_ref,
            revision,
            settings.omit_branch_name,
        ))
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
