// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Settings store backed by the configuration file.

use std::collections::HashMap;

use tracing::{debug, warn};

use cn_core::{HookConfig, Repository, RepositorySettings, SettingsStore};

use crate::config::RepoConfig;

/// Read-only [`SettingsStore`] over the `[[repos]]` entries of the config.
///
/// Access to the file is the only authorization applied.
#[derive(Debug, Default)]
pub struct FileSettingsStore {
    repos: HashMap<Repository, RepoConfig>,
}

impl FileSettingsStore {
    /// Index repository entries. A later entry for the same repository
    /// replaces an earlier one.
    pub fn new(repos: &[RepoConfig]) -> Self {
        let mut map = HashMap::with_capacity(repos.len());
        for repo in repos {
            let repository = repo.repository();
            if map.contains_key(&repository) {
                warn!(repository = %repository, "duplicate repository entry, keeping the last one");
            }
            map.insert(repository, repo.clone());
        }
        FileSettingsStore { repos: map }
    }

    pub fn len(&self) -> usize {
        self.repos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }
}

impl SettingsStore for FileSettingsStore {
    fn hook_config(&self, repository: &Repository) -> Option<HookConfig> {
        let Some(repo) = self.repos.get(repository) else {
            debug!(repository = %repository, "no hook configured");
            return None;
        };
        Some(HookConfig {
            enabled: repo.enabled,
        })
    }

    fn settings(&self, repository: &Repository) -> Option<RepositorySettings> {
        let settings = self
            .repos
            .get(repository)
            .and_then(|repo| repo.settings.clone());
        if settings.is_none() {
            debug!(repository = %repository, "no settings stored");
        }
        settings
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
