// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Clone URL resolution for the configured clone type.

use crate::error::{Error, Result};
use crate::event::Repository;
use crate::settings::{CloneType, CLONE_URL};

/// Produces the clone URL of a repository for one protocol.
pub trait CloneUrlProvider: Send + Sync {
    fn clone_url(&self, repository: &Repository) -> Result<String>;
}

/// Maps a repository and clone type to a concrete clone URL.
#[derive(Default)]
pub struct CloneUrlResolver {
    http: Option<Box<dyn CloneUrlProvider>>,
    ssh: Option<Box<dyn CloneUrlProvider>>,
}

impl CloneUrlResolver {
    pub fn new(
        http: Option<Box<dyn CloneUrlProvider>>,
        ssh: Option<Box<dyn CloneUrlProvider>>,
    ) -> Self {
        CloneUrlResolver { http, ssh }
    }

    /// Resolve the clone URL for `clone_type`.
    ///
    /// `custom_url` is the repository's configured custom clone URL, used for
    /// [`CloneType::Custom`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if no provider serves the
    /// requested protocol, or the custom clone URL is missing.
    pub fn resolve(
        &self,
        repository: &Repository,
        clone_type: CloneType,
        custom_url: Option<&str>,
    ) -> Result<String> {
        let provider = match clone_type {
            CloneType::Http => self.http.as_deref(),
            CloneType::Ssh => self.ssh.as_deref(),
            CloneType::Custom => {
                return match custom_url.map(str::trim) {
                    Some(url) if !url.is_empty() => Ok(url.to_string()),
                    _ => Err(Error::InvalidConfiguration(format!(
                        "no custom clone URL configured for {} (set {})",
                        repository, CLONE_URL
                    ))),
                };
            }
        };

        match provider {
            Some(provider) => provider.clone_url(repository),
            None => Err(Error::InvalidConfiguration(format!(
                "no {} clone URL provider available",
                clone_type
            ))),
        }
    }
}

#[cfg(test)]
#[path = "clone_url_tests.rs"]
mod tests;
