// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Clone URL providers derived from the `[server]` config section.

use cn_core::{CloneUrlProvider, CloneUrlResolver, Repository};

use crate::config::ServerConfig;

/// Protocol of a [`TemplateCloneUrlProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloneProtocol {
    /// `{base}/scm/{project}/{slug}.git`
    Http,
    /// `{base}/{project}/{slug}.git`
    Ssh,
}

/// Builds clone URLs from a base URL and the repository identity.
///
/// Project keys are lowercased, as hosting servers expose them in clone URLs.
#[derive(Debug, Clone)]
pub struct TemplateCloneUrlProvider {
    protocol: CloneProtocol,
    base: String,
}

impl TemplateCloneUrlProvider {
    pub fn new(protocol: CloneProtocol, base: &str) -> Self {
        TemplateCloneUrlProvider {
            protocol,
            base: base.trim_end_matches('/').to_string(),
        }
    }
}

impl CloneUrlProvider for TemplateCloneUrlProvider {
    fn clone_url(&self, repository: &Repository) -> cn_core::Result<String> {
        let project = repository.project.to_lowercase();
        Ok(match self.protocol {
            CloneProtocol::Http => {
                format!("{}/scm/{}/{}.git", self.base, project, repository.slug)
            }
            CloneProtocol::Ssh => format!("{}/{}/{}.git", self.base, project, repository.slug),
        })
    }
}

/// Build a resolver with a provider for each base URL present in `server`.
pub fn resolver(server: &ServerConfig) -> CloneUrlResolver {
    let provider = |protocol, base: &Option<String>| {
        base.as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(|b| {
                Box::new(TemplateCloneUrlProvider::new(protocol, b)) as Box<dyn CloneUrlProvider>
            })
    };
    CloneUrlResolver::new(
        provider(CloneProtocol::Http, &server.http_base),
        provider(CloneProtocol::Ssh, &server.ssh_base),
    )
}

#[cfg(test)]
#[path = "clone_tests.rs"]
mod tests;
