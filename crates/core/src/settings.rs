// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-repository hook configuration and the store that serves it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::event::Repository;

/// Setting key: base URL of the CI server.
pub const BASE_URL: &str = "base_url";
/// Setting key: clone protocol selector.
pub const CLONE_TYPE: &str = "clone_type";
/// Setting key: clone URL used for the custom clone type.
pub const CLONE_URL: &str = "clone_url";
/// Setting key: skip certificate validation for TLS base URLs.
pub const IGNORE_CERTS: &str = "ignore_certs";
/// Setting key: leave the `branches` parameter out of notifications.
pub const OMIT_BRANCH_NAME: &str = "omit_branch_name";
/// Setting key: branch list mode ("whitelist" or "blacklist").
pub const BRANCH_OPTIONS: &str = "branch_options";
/// Setting key: space-delimited branch patterns for the branch list.
pub const BRANCH_OPTIONS_BRANCHES: &str = "branch_options_branches";
/// Setting key: space-delimited user names whose events are ignored.
pub const IGNORE_COMMITTERS: &str = "ignore_committers";

/// Enable toggle for the notification hook of one repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookConfig {
    pub enabled: bool,
}

/// Notification settings for one repository.
///
/// Every field is optional; absent values take the defaults the dispatcher
/// and filters document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySettings {
    /// Base URL of the CI server (e.g. "https://ci.example.com").
    #[serde(default)]
    pub base_url: Option<String>,
    /// "http", "ssh" or "custom". Unset means custom.
    #[serde(default)]
    pub clone_type: Option<String>,
    /// Clone URL used for the custom clone type.
    #[serde(default)]
    pub clone_url: Option<String>,
    #[serde(default)]
    pub ignore_certs: bool,
    #[serde(default)]
    pub omit_branch_name: bool,
    /// "whitelist" or "blacklist". Anything else disables branch filtering.
    #[serde(default)]
    pub branch_options: Option<String>,
    /// Space-delimited branch patterns; a trailing `*` matches by prefix.
    #[serde(default)]
    pub branch_options_branches: Option<String>,
    /// Space-delimited user names whose events never notify.
    #[serde(default)]
    pub ignore_committers: Option<String>,
}

impl RepositorySettings {
    /// The branch list mode, tolerating unset and malformed values.
    pub fn branch_list_mode(&self) -> BranchListMode {
        BranchListMode::parse(self.branch_options.as_deref())
    }

    /// The configured clone type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCloneType`] for unrecognized selectors.
    pub fn clone_type(&self) -> Result<CloneType> {
        CloneType::parse(self.clone_type.as_deref())
    }
}

/// Protocol used to derive the clone URL embedded in notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloneType {
    Http,
    Ssh,
    /// The repository's configured custom clone URL.
    Custom,
}

impl CloneType {
    /// Parse a clone type selector. Unset and empty values mean custom.
    pub fn parse(value: Option<&str>) -> Result<Self> {
        match value.map(str::trim) {
            None | Some("") => Ok(CloneType::Custom),
            Some(s) => s.parse(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CloneType::Http => "http",
            CloneType::Ssh => "ssh",
            CloneType::Custom => "custom",
        }
    }
}

impl fmt::Display for CloneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CloneType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "http" => Ok(CloneType::Http),
            "ssh" => Ok(CloneType::Ssh),
            "custom" => Ok(CloneType::Custom),
            _ => Err(Error::InvalidCloneType(s.to_string())),
        }
    }
}

/// How the branch patterns of a repository are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchListMode {
    /// No branch filtering.
    None,
    /// Only matching branches notify.
    Whitelist,
    /// Matching branches never notify.
    Blacklist,
}

impl BranchListMode {
    /// Parse a mode; unset and unrecognized values mean [`BranchListMode::None`].
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("whitelist") => BranchListMode::Whitelist,
            Some("blacklist") => BranchListMode::Blacklist,
            _ => BranchListMode::None,
        }
    }
}

/// Source of hook configuration and settings.
///
/// Implementations apply their own access checks. Lookup and authorization
/// failures are reported as `None` and never surface to callers.
pub trait SettingsStore: Send + Sync {
    /// The hook toggle for a repository, `None` if no hook is configured.
    fn hook_config(&self, repository: &Repository) -> Option<HookConfig>;

    /// The settings for a repository, `None` if none are stored.
    fn settings(&self, repository: &Repository) -> Option<RepositorySettings>;
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
