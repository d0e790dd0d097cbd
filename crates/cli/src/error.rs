// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the cnrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("config not found: {0}\n  hint: pass --config or set COMMIT_NOTIFY_CONFIG")]
    ConfigNotFound(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("{failed} of {total} notifications failed")]
    NotificationFailed { failed: usize, total: usize },

    #[error("repository {0} has no notification hook configured")]
    HookNotConfigured(String),

    #[error(transparent)]
    Core(#[from] cn_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for cnrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
