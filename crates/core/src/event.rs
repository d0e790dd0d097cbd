// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Host event types.
//!
//! Push and pull-request lifecycle events are modeled as one tagged union,
//! [`HostEvent`], and projected into an [`EventContext`] before they reach the
//! eligibility filters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Identity of a hosted repository (`PROJECT/slug`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Repository {
    /// Project key the repository lives under.
    pub project: String,
    /// Repository slug within the project.
    pub slug: String,
}

impl Repository {
    pub fn new(project: impl Into<String>, slug: impl Into<String>) -> Self {
        Repository {
            project: project.into(),
            slug: slug.into(),
        }
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.project, self.slug)
    }
}

impl FromStr for Repository {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('/') {
            Some((project, slug))
                if !project.is_empty() && !slug.is_empty() && !slug.contains('/') =>
            {
                Ok(Repository::new(project, slug))
            }
            _ => Err(Error::InvalidRepository(s.to_string())),
        }
    }
}

/// How a ref was affected by a push.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefChangeKind {
    /// The ref was created.
    Add,
    /// The ref moved to a new revision.
    Update,
    /// The ref was deleted.
    Delete,
}

impl RefChangeKind {
    /// Returns the string representation used in event payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            RefChangeKind::Add => "add",
            RefChangeKind::Update => "update",
            RefChangeKind::Delete => "delete",
        }
    }
}

impl fmt::Display for RefChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One updated, created or deleted ref resulting from a push.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefChange {
    /// Full ref name (e.g. "refs/heads/main").
    pub ref_id: String,
    /// Revision before the push.
    #[serde(default)]
    pub from_hash: String,
    /// Revision after the push.
    #[serde(default)]
    pub to_hash: String,
    pub kind: RefChangeKind,
}

/// One side of a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestRef {
    /// Full ref name of the branch.
    pub ref_id: String,
    /// Head commit of the branch.
    pub latest_commit: String,
    pub repository: Repository,
}

/// A pull request as seen by lifecycle events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    pub id: u64,
    /// Source side.
    pub from_ref: PullRequestRef,
    /// Target side. Pull requests are scoped to their target repository.
    pub to_ref: PullRequestRef,
}

/// An event delivered by the hosting service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    /// Refs were pushed to a repository.
    Push {
        repository: Repository,
        #[serde(default)]
        user: Option<String>,
        ref_changes: Vec<RefChange>,
    },
    /// A pull request was opened.
    PullRequestOpened {
        #[serde(default)]
        user: Option<String>,
        pull_request: PullRequest,
    },
    /// A closed pull request was reopened.
    PullRequestReopened {
        #[serde(default)]
        user: Option<String>,
        pull_request: PullRequest,
    },
    /// Either side of a pull request moved.
    PullRequestRescoped {
        #[serde(default)]
        user: Option<String>,
        pull_request: PullRequest,
        /// Source revision before the rescope.
        previous_from_hash: String,
        /// Whether the pull request currently has merge conflicts.
        #[serde(default)]
        conflicted: bool,
    },
}

impl HostEvent {
    /// Parse an event from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Get the event name used in logs (e.g., "pull_request_opened").
    pub fn name(&self) -> &'static str {
        match self {
            HostEvent::Push { .. } => "push",
            HostEvent::PullRequestOpened { .. } => "pull_request_opened",
            HostEvent::PullRequestReopened { .. } => "pull_request_reopened",
            HostEvent::PullRequestRescoped { .. } => "pull_request_rescoped",
        }
    }

    /// The repository notifications for this event are scoped to.
    pub fn repository(&self) -> &Repository {
        match self {
            HostEvent::Push { repository, .. } => repository,
            HostEvent::PullRequestOpened { pull_request, .. }
            | HostEvent::PullRequestReopened { pull_request, .. }
            | HostEvent::PullRequestRescoped { pull_request, .. } => {
                &pull_request.to_ref.repository
            }
        }
    }

    /// The user who triggered the event, if known.
    pub fn user(&self) -> Option<&str> {
        match self {
            HostEvent::Push { user, .. }
            | HostEvent::PullRequestOpened { user, .. }
            | HostEvent::PullRequestReopened { user, .. }
            | HostEvent::PullRequestRescoped { user, .. } => user.as_deref(),
        }
    }

    /// Ref changes carried by the event. Always `None` for pull-request events.
    pub fn ref_changes(&self) -> Option<&[RefChange]> {
        match self {
            HostEvent::Push { ref_changes, .. } => Some(ref_changes),
            _ => None,
        }
    }

    /// The pull request carried by the event, if any.
    pub fn pull_request(&self) -> Option<&PullRequest> {
        match self {
            HostEvent::Push { .. } => None,
            HostEvent::PullRequestOpened { pull_request, .. }
            | HostEvent::PullRequestReopened { pull_request, .. }
            | HostEvent::PullRequestRescoped { pull_request, .. } => Some(pull_request),
        }
    }
}

/// Returns true if a rescope should be forwarded to the pipeline.
///
/// Only source-side moves on a conflicted pull request are forwarded; target
/// branches move far too often to notify on every change.
pub fn should_deliver_rescope(previous_hash: &str, current_hash: &str, conflicted: bool) -> bool {
    previous_hash != current_hash && conflicted
}

/// Read-only view of one event handed to the eligibility filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventContext {
    event: HostEvent,
    repository: Repository,
    username: Option<String>,
}

impl EventContext {
    /// Create a context whose repository and user are taken from the event.
    pub fn new(event: HostEvent) -> Self {
        let repository = event.repository().clone();
        let username = event.user().map(str::to_string);
        EventContext {
            event,
            repository,
            username,
        }
    }

    pub fn event(&self) -> &HostEvent {
        &self.event
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Ref changes of a push; `None` for any other event.
    pub fn ref_changes(&self) -> Option<&[RefChange]> {
        self.event.ref_changes()
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
