// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! cnrs - Library behind the `commit-notify` CLI.
//!
//! This crate supplies the concrete collaborators of [`cn_core`] and the
//! command surface of the `commit-notify` binary.
//!
//! # Main Components
//!
//! - [`Config`] - Config file with server and per-repository hook settings
//! - [`FileSettingsStore`] - Settings store over the config's repository entries
//! - [`ReqwestClient`] - Blocking HTTP client used to notify the CI server
//! - [`Error`] - Error types for all operations
//!
//! # Usage
//!
//! ```rust,ignore
//! use clap::Parser;
//! use cnrs::Cli;
//!
//! let cli = Cli::parse_from(["commit-notify", "url", "FOO/bar", "main"]);
//! cnrs::run(cli)?;
//! ```

mod cli;
mod commands;

pub mod clone;
pub mod config;
pub mod env;
pub mod error;
pub mod http;
pub mod store;

pub use cli::{Cli, Command, OutputFormat};
pub use config::{Config, RepoConfig, ServerConfig};
pub use error::{Error, Result};
pub use http::ReqwestClient;
pub use store::FileSettingsStore;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let config = cli.config.as_deref();
    match cli.command {
        Command::Notify {
            repo,
            branch,
            sha,
            pr,
            output,
        } => commands::notify::run(config, &repo, &branch, sha.as_deref(), pr, output),
        Command::Event { file, output } => commands::event::run(config, file.as_deref(), output),
        Command::Url { repo, branch, sha } => {
            commands::url::run(config, &repo, &branch, sha.as_deref())
        }
    }
}
