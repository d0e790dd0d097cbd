// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ignore events triggered by configured users.

use std::sync::Arc;

use tracing::debug;

use super::EligibilityFilter;
use crate::event::EventContext;
use crate::settings::SettingsStore;

/// Vetoes events whose acting user is in the repository's ignore list.
pub struct CommitterExclusionFilter {
    store: Arc<dyn SettingsStore>,
}

impl CommitterExclusionFilter {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        CommitterExclusionFilter { store }
    }
}

impl EligibilityFilter for CommitterExclusionFilter {
    fn name(&self) -> &'static str {
        "committer-exclusion"
    }

    fn should_deliver(&self, context: &EventContext) -> bool {
        let Some(username) = context.username() else {
            return true;
        };
        let Some(settings) = self.store.settings(context.repository()) else {
            return true;
        };
        let Some(ignored) = settings.ignore_committers.as_deref() else {
            return true;
        };

        let username = username.to_lowercase();
        match ignored
            .split_whitespace()
            .find(|committer| committer.to_lowercase() == username)
        {
            Some(committer) => {
                debug!(committer, "ignoring event due to ignored committer");
                false
            }
            None => true,
        }
    }
}

#[cfg(test)]
#[path = "committer_tests.rs"]
mod tests;
