// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test doubles for the collaborator traits.

#![allow(dead_code)]
#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::clone_url::{CloneUrlProvider, CloneUrlResolver};
use crate::error::Result;
use crate::event::Repository;
use crate::settings::{HookConfig, RepositorySettings, SettingsStore};
use crate::transport::{HttpResponse, OutboundHttpClient, TransportError, TransportResult};

pub const JENKINS_BASE_URL: &str = "http://localhost.jenkins";
pub const HTTP_CLONE_URL: &str = "http://some.stash.com/scm/foo/bar.git";
pub const SSH_CLONE_URL: &str = "ssh://git@some.stash.com:12345/foo/bar.git";
pub const CUSTOM_CLONE_URL: &str = "http://custom.host/custom.git";

pub fn repo() -> Repository {
    Repository::new("FOO", "bar")
}

/// Settings store backed by a map.
#[derive(Default)]
pub struct MemoryStore {
    hooks: HashMap<Repository, HookConfig>,
    settings: HashMap<Repository, RepositorySettings>,
}

impl MemoryStore {
    /// A store with an enabled hook and the given settings for [`repo`].
    pub fn with_settings(settings: RepositorySettings) -> Self {
        let mut store = MemoryStore::default();
        store.hooks.insert(repo(), HookConfig { enabled: true });
        store.settings.insert(repo(), settings);
        store
    }

    pub fn set_hook(mut self, hook: Option<HookConfig>) -> Self {
        match hook {
            Some(hook) => self.hooks.insert(repo(), hook),
            None => self.hooks.remove(&repo()),
        };
        self
    }

    pub fn without_settings(mut self) -> Self {
        self.settings.remove(&repo());
        self
    }
}

impl SettingsStore for MemoryStore {
    fn hook_config(&self, repository: &Repository) -> Option<HookConfig> {
        self.hooks.get(repository).copied()
    }

    fn settings(&self, repository: &Repository) -> Option<RepositorySettings> {
        self.settings.get(repository).cloned()
    }
}

/// Settings that notify [`JENKINS_BASE_URL`] over the http clone URL.
pub fn http_settings() -> RepositorySettings {
    RepositorySettings {
        base_url: Some(JENKINS_BASE_URL.to_string()),
        clone_type: Some("http".to_string()),
        ..Default::default()
    }
}

/// HTTP client recording every call.
pub struct RecordingClient {
    calls: Mutex<Vec<(String, bool)>>,
    response: TransportResult<HttpResponse>,
}

impl RecordingClient {
    pub fn ok() -> Self {
        RecordingClient {
            calls: Mutex::new(Vec::new()),
            response: Ok(HttpResponse {
                status: 200,
                body: "Scheduled polling of bar".to_string(),
            }),
        }
    }

    pub fn failing(err: TransportError) -> Self {
        RecordingClient {
            calls: Mutex::new(Vec::new()),
            response: Err(err),
        }
    }

    pub fn calls(&self) -> Vec<(String, bool)> {
        self.calls.lock().unwrap().clone()
    }

    /// The URL of the only call made.
    pub fn single_url(&self) -> String {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one call: {:?}", calls);
        calls[0].0.clone()
    }
}

impl OutboundHttpClient for RecordingClient {
    fn send(&self, url: &str, allow_insecure_tls: bool) -> TransportResult<HttpResponse> {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), allow_insecure_tls));
        self.response.clone()
    }
}

/// Clone URL provider returning a fixed URL.
pub struct FixedProvider(pub &'static str);

impl CloneUrlProvider for FixedProvider {
    fn clone_url(&self, _repository: &Repository) -> Result<String> {
        Ok(self.0.to_string())
    }
}

/// Resolver with http and ssh providers for the test constants.
pub fn resolver() -> CloneUrlResolver {
    CloneUrlResolver::new(
        Some(Box::new(FixedProvider(HTTP_CLONE_URL))),
        Some(Box::new(FixedProvider(SSH_CLONE_URL))),
    )
}

pub fn shared<T: SettingsStore + 'static>(store: T) -> Arc<dyn SettingsStore> {
    Arc::new(store)
}
