// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration file loading.
//!
//! Configuration is read from `commit-notify.toml` (or a `.json` file) and
//! includes:
//! - `server`: how clone URLs are derived and how long outbound calls may take
//! - `repos`: the notification hook of each repository and its settings
//!
//! ```toml
//! [server]
//! http_base = "https://git.example.com"
//! ssh_base = "ssh://git@git.example.com:7999"
//!
//! [[repos]]
//! project = "FOO"
//! slug = "bar"
//!
//! [repos.settings]
//! base_url = "https://ci.example.com"
//! clone_type = "http"
//! branch_options = "blacklist"
//! branch_options_branches = "release*"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use cn_core::{Repository, RepositorySettings};

use crate::error::{Error, Result};

/// Config file used when neither `--config` nor the environment names one.
pub const DEFAULT_CONFIG_FILE: &str = "commit-notify.toml";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    /// Repositories with a notification hook.
    #[serde(default)]
    pub repos: Vec<RepoConfig>,
}

/// Settings of the hosting server itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base of http clone URLs (e.g. "https://git.example.com").
    #[serde(default)]
    pub http_base: Option<String>,
    /// Base of ssh clone URLs (e.g. "ssh://git@git.example.com:7999").
    #[serde(default)]
    pub ssh_base: Option<String>,
    /// Timeout for notification requests in seconds (default: 10).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            http_base: None,
            ssh_base: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// The notification hook of one repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoConfig {
    pub project: String,
    pub slug: String,
    /// Whether the hook is enabled (default: true).
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Hook settings. A hook without settings never notifies.
    #[serde(default)]
    pub settings: Option<RepositorySettings>,
}

fn default_enabled() -> bool {
    true
}

impl RepoConfig {
    pub fn repository(&self) -> Repository {
        Repository::new(self.project.clone(), self.slug.clone())
    }
}

impl Config {
    /// Load configuration from a TOML file, or JSON if the extension is `.json`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config: Config = if is_json {
            serde_json::from_str(&content)
                .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?
        } else {
            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Check that every repository entry names a project and slug.
    pub fn validate(&self) -> Result<()> {
        for (idx, repo) in self.repos.iter().enumerate() {
            if repo.project.trim().is_empty() || repo.slug.trim().is_empty() {
                return Err(Error::Config(format!(
                    "repos[{}]: project and slug cannot be empty",
                    idx
                )));
            }
        }
        if self.server.timeout_secs == 0 {
            return Err(Error::Config(
                "server.timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Pick the config file: explicit path, then `COMMIT_NOTIFY_CONFIG`, then
/// [`DEFAULT_CONFIG_FILE`] in the working directory.
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .or_else(crate::env::config_path)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
