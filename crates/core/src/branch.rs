// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Branch name resolution for ref changes.

use crate::event::RefChange;

/// Namespace of branch refs.
pub const BRANCH_PREFIX: &str = "refs/heads/";
/// Namespace of tag refs.
pub const TAG_PREFIX: &str = "refs/tags/";

/// Get the branches affected by the provided ref changes.
///
/// Names follow input order and are not deduplicated.
pub fn branches(ref_changes: &[RefChange]) -> Vec<String> {
    ref_changes
        .iter()
        .map(|change| short_name(&change.ref_id).to_string())
        .collect()
}

/// Strip the leading ref namespace (`refs/heads/` or `refs/tags/`).
pub fn short_name(ref_id: &str) -> &str {
    ref_id
        .strip_prefix(BRANCH_PREFIX)
        .or_else(|| ref_id.strip_prefix(TAG_PREFIX))
        .unwrap_or(ref_id)
}

/// Reduce a ref or bare branch name to `refs/heads/<name>` form.
///
/// Anything up to and including the last `refs/heads/` is dropped, so
/// display strings such as "repo:refs/heads/x" reduce to "refs/heads/x".
pub fn branch_ref(name: &str) -> String {
    let short = match name.rfind(BRANCH_PREFIX) {
        Some(idx) => &name[idx + BRANCH_PREFIX.len()..],
        None => name,
    };
    format!("{}{}", BRANCH_PREFIX, short)
}

#[cfg(test)]
#[path = "branch_tests.rs"]
mod tests;
