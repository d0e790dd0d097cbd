// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for cn-core operations.

use thiserror::Error;

/// All possible errors that can occur in cn-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid clone type: '{0}'\n  hint: valid clone types are: http, ssh, custom")]
    InvalidCloneType(String),

    #[error("invalid repository: '{0}'\n  hint: repositories are written as PROJECT/slug")]
    InvalidRepository(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for cn-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
