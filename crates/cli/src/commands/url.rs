// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use cn_core::{EventListener, Repository};

use crate::error::{Error, Result};

use super::notify::expand_branch;
use super::open_listener;

pub fn run(config: Option<&Path>, repo: &str, branch: &str, sha: Option<&str>) -> Result<()> {
    let listener = open_listener(config)?;
    let url = run_impl(&listener, repo, branch, sha)?;
    println!("{url}");
    Ok(())
}

/// Build the notification URL for a branch without sending it.
pub(crate) fn run_impl(
    listener: &EventListener,
    repo: &str,
    branch: &str,
    sha: Option<&str>,
) -> Result<String> {
    let repository: Repository = repo.parse()?;
    let branch = expand_branch(branch);
    let revision = sha.map(str::trim).filter(|s| !s.is_empty());
    listener
        .dispatcher()
        .notification_url(&repository, &branch, revision)?
        .ok_or_else(|| Error::HookNotConfigured(repository.to_string()))
}

#[cfg(test)]
#[path = "url_tests.rs"]
mod tests;
