// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Eligibility filters deciding whether an event may notify the CI server.
//!
//! This module provides:
//! - The [`EligibilityFilter`] trait, a side-effect free veto over one event
//! - [`BranchPolicyFilter`], applying the branch white/blacklist of a repository
//! - [`CommitterExclusionFilter`], ignoring events from configured users
//! - [`EligibilityFilterChain`], which delivers only if every filter approves
//!
//! New policies are added by registering another filter with the chain.

pub mod branch;
pub mod committer;

use std::sync::Arc;

use tracing::debug;

use crate::event::EventContext;
use crate::settings::SettingsStore;

pub use branch::BranchPolicyFilter;
pub use committer::CommitterExclusionFilter;

/// A predicate that can veto notification delivery for one event.
///
/// Filters must not have side effects that would make their order observable.
pub trait EligibilityFilter: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Returns false to veto delivery of the notification.
    fn should_deliver(&self, context: &EventContext) -> bool;
}

/// Ordered set of filters, all of which must approve an event.
#[derive(Default)]
pub struct EligibilityFilterChain {
    filters: Vec<Box<dyn EligibilityFilter>>,
}

impl EligibilityFilterChain {
    pub fn new(filters: Vec<Box<dyn EligibilityFilter>>) -> Self {
        EligibilityFilterChain { filters }
    }

    /// The branch policy and committer exclusion filters over one store.
    pub fn with_defaults(store: Arc<dyn SettingsStore>) -> Self {
        EligibilityFilterChain::new(vec![
            Box::new(BranchPolicyFilter::new(Arc::clone(&store))),
            Box::new(CommitterExclusionFilter::new(store)),
        ])
    }

    /// Register another filter.
    pub fn push(&mut self, filter: Box<dyn EligibilityFilter>) {
        self.filters.push(filter);
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Returns true if every registered filter approves the event.
    pub fn should_deliver(&self, context: &EventContext) -> bool {
        for filter in &self.filters {
            if !filter.should_deliver(context) {
                debug!(
                    filter = filter.name(),
                    repository = %context.repository(),
                    event = context.event().name(),
                    "notification vetoed"
                );
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
