// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! cn-core: Shared library for commit-notify
//!
//! This crate decides whether a push or pull-request event should notify a
//! CI server and builds and sends that notification. Settings storage, clone
//! URL providers and the HTTP client are collaborators behind traits.

pub mod branch;
pub mod clone_url;
pub mod dispatcher;
pub mod eligibility;
pub mod error;
pub mod event;
pub mod listener;
pub mod notify_url;
pub mod settings;
pub mod transport;

#[cfg(test)]
mod test_helpers;

pub use clone_url::{CloneUrlProvider, CloneUrlResolver};
pub use dispatcher::{NotificationDispatcher, NotificationResult};
pub use eligibility::{
    BranchPolicyFilter, CommitterExclusionFilter, EligibilityFilter, EligibilityFilterChain,
};
pub use error::{Error, Result};
pub use event::{
    EventContext, HostEvent, PullRequest, PullRequestRef, RefChange, RefChangeKind, Repository,
};
pub use listener::EventListener;
pub use notify_url::build_notification_url;
pub use settings::{BranchListMode, CloneType, HookConfig, RepositorySettings, SettingsStore};
pub use transport::{HttpResponse, OutboundHttpClient, TransportError, TransportResult};
