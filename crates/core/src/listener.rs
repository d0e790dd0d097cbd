// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Event listener wiring host events to the filter chain and dispatcher.

use std::sync::Arc;

use tracing::debug;

use crate::branch::branch_ref;
use crate::dispatcher::{NotificationDispatcher, NotificationResult};
use crate::eligibility::EligibilityFilterChain;
use crate::event::{should_deliver_rescope, EventContext, HostEvent, RefChangeKind};
use crate::settings::SettingsStore;

/// Runs host events through the eligibility chain and dispatches the
/// resulting notifications.
pub struct EventListener {
    chain: EligibilityFilterChain,
    dispatcher: NotificationDispatcher,
    store: Arc<dyn SettingsStore>,
}

impl EventListener {
    pub fn new(
        chain: EligibilityFilterChain,
        dispatcher: NotificationDispatcher,
        store: Arc<dyn SettingsStore>,
    ) -> Self {
        EventListener {
            chain,
            dispatcher,
            store,
        }
    }

    pub fn dispatcher(&self) -> &NotificationDispatcher {
        &self.dispatcher
    }

    /// Handle one event, returning a result per dispatch attempt.
    ///
    /// Vetoed and ignored events produce no results.
    pub fn handle(&self, event: HostEvent) -> Vec<NotificationResult> {
        match &event {
            HostEvent::Push { .. } => self.handle_push(event),
            HostEvent::PullRequestOpened { .. } | HostEvent::PullRequestReopened { .. } => {
                self.handle_pull_request(event)
            }
            HostEvent::PullRequestRescoped {
                pull_request,
                previous_from_hash,
                conflicted,
                ..
            } => {
                let current = &pull_request.from_ref.latest_commit;
                if should_deliver_rescope(previous_from_hash, current, *conflicted) {
                    self.handle_pull_request(event)
                } else {
                    debug!(pr_id = pull_request.id, "ignoring rescope");
                    Vec::new()
                }
            }
        }
    }

    fn handle_push(&self, event: HostEvent) -> Vec<NotificationResult> {
        let context = EventContext::new(event);
        if !self.chain.should_deliver(&context) {
            return Vec::new();
        }

        let Some(ref_changes) = context.ref_changes() else {
            return Vec::new();
        };
        ref_changes
            .iter()
            .filter(|change| {
                let deleted = change.kind == RefChangeKind::Delete;
                if deleted {
                    debug!(ref_id = %change.ref_id, kind = %change.kind, "skipping ref change");
                }
                !deleted
            })
            .map(|change| {
                let revision = Some(change.to_hash.as_str()).filter(|r| !r.is_empty());
                self.dispatcher
                    .dispatch(context.repository(), &change.ref_id, revision, None)
            })
            .collect()
    }

    fn handle_pull_request(&self, event: HostEvent) -> Vec<NotificationResult> {
        if self.store.settings(event.repository()).is_none() {
            debug!(repository = %event.repository(), "no settings, ignoring pull request");
            return Vec::new();
        }
        let Some(pull_request) = event.pull_request().cloned() else {
            return Vec::new();
        };

        let context = EventContext::new(event);
        if !self.chain.should_deliver(&context) {
            return Vec::new();
        }

        let branch = branch_ref(&pull_request.from_ref.ref_id);
        let revision =
            Some(pull_request.from_ref.latest_commit.as_str()).filter(|r| !r.is_empty());
        vec![self.dispatcher.dispatch(
            context.repository(),
            &branch,
            revision,
            Some(pull_request.id),
        )]
    }
}

#[cfg(test)]
#[path = "listener_tests.rs"]
mod tests;
