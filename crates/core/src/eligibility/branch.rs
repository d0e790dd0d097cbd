// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Branch white/blacklist filtering for push events.

use std::sync::Arc;

use tracing::debug;

use super::EligibilityFilter;
use crate::branch::branches;
use crate::event::{EventContext, RefChangeKind};
use crate::settings::{BranchListMode, SettingsStore};

/// Vetoes pushes of deleted branches and applies the repository's branch list.
///
/// Pull-request events carry no ref changes and always pass.
pub struct BranchPolicyFilter {
    store: Arc<dyn SettingsStore>,
}

impl BranchPolicyFilter {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        BranchPolicyFilter { store }
    }
}

impl EligibilityFilter for BranchPolicyFilter {
    fn name(&self) -> &'static str {
        "branch-policy"
    }

    fn should_deliver(&self, context: &EventContext) -> bool {
        let Some(ref_changes) = context.ref_changes() else {
            return true;
        };

        // Only the first change is checked; pushes are assumed to carry one ref.
        if let Some(first) = ref_changes.first() {
            if first.kind == RefChangeKind::Delete {
                debug!(ref_id = %first.ref_id, "ignoring deleted branch");
                return false;
            }
        }

        let Some(settings) = self.store.settings(context.repository()) else {
            return true;
        };

        let mode = settings.branch_list_mode();
        if mode == BranchListMode::None {
            return true;
        }

        let patterns: Vec<&str> = settings
            .branch_options_branches
            .as_deref()
            .unwrap_or("")
            .split_whitespace()
            .collect();
        let matched = has_match(&patterns, &branches(ref_changes));

        match mode {
            BranchListMode::Blacklist if matched => false,
            BranchListMode::Whitelist if !matched => false,
            _ => true,
        }
    }
}

/// Returns true if any branch matches any pattern, ignoring case.
///
/// A pattern ending in `*` matches by prefix; any other pattern must equal the
/// branch name.
pub fn has_match(patterns: &[&str], branches: &[String]) -> bool {
    branches.iter().any(|branch| {
        let branch = branch.to_lowercase();
        patterns.iter().any(|pattern| {
            let pattern = pattern.to_lowercase();
            match pattern.strip_suffix('*') {
                Some(prefix) => branch.starts_with(prefix),
                None => branch == pattern,
            }
        })
    })
}

#[cfg(test)]
#[path = "branch_tests.rs"]
mod tests;
