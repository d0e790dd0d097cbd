// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use cn_core::branch::branch_ref;
use cn_core::{EventListener, NotificationResult, Repository};

use crate::cli::OutputFormat;
use crate::error::Result;

use super::{open_listener, report};

pub fn run(
    config: Option<&Path>,
    repo: &str,
    branch: &str,
    sha: Option<&str>,
    pr: Option<u64>,
    output: OutputFormat,
) -> Result<()> {
    let listener = open_listener(config)?;
    let result = run_impl(&listener, repo, branch, sha, pr)?;
    report(&[result], output)
}

/// Dispatch one notification, bypassing the eligibility filters.
pub(crate) fn run_impl(
    listener: &EventListener,
    repo: &str,
    branch: &str,
    sha: Option<&str>,
    pr: Option<u64>,
) -> Result<NotificationResult> {
    let repository: Repository = repo.parse()?;
    let branch = expand_branch(branch);
    let revision = sha.map(str::trim).filter(|s| !s.is_empty());
    Ok(listener
        .dispatcher()
        .dispatch(&repository, &branch, revision, pr))
}

/// Full refs pass through; bare names become `refs/heads/<name>`.
pub(crate) fn expand_branch(branch: &str) -> String {
    let branch = branch.trim();
    if branch.starts_with("refs/") {
        branch.to_string()
    } else {
        branch_ref(branch)
    }
}

#[cfg(test)]
#[path = "notify_tests.rs"]
mod tests;
