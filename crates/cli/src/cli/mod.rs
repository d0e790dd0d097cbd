// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "commit-notify")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Notify a CI server of pushed commits and pull request updates")]
#[command(
    long_about = "Notify a CI server of pushed commits and pull request updates.\n\n\
    Repositories, their notification hooks and hook settings are read from a config file."
)]
pub struct Cli {
    /// Config file (default: $COMMIT_NOTIFY_CONFIG, then commit-notify.toml)
    #[arg(short = 'c', long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Send a notification for one branch
    #[command(after_help = "\
Examples:
  commit-notify notify FOO/bar main                 Notify for refs/heads/main
  commit-notify notify FOO/bar main --sha abc123    Include the commit hash
  commit-notify notify FOO/bar feature --pr 42      Notify on behalf of a pull request")]
    Notify {
        /// Repository as PROJECT/slug
        #[arg(value_parser = non_empty_string)]
        repo: String,

        /// Branch name or full ref (refs/heads/...)
        #[arg(value_parser = non_empty_string)]
        branch: String,

        /// Commit hash to report
        #[arg(long)]
        sha: Option<String>,

        /// Pull request the notification is sent for
        #[arg(long, value_name = "id")]
        pr: Option<u64>,

        /// Output format
        #[arg(long, short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Handle a host event read from a JSON file or stdin
    #[command(after_help = "\
Examples:
  commit-notify event push.json          Handle the event in push.json
  cat push.json | commit-notify event    Read the event from stdin")]
    Event {
        /// Event file (reads stdin when omitted or \"-\")
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Print the notification URL without sending it
    Url {
        /// Repository as PROJECT/slug
        #[arg(value_parser = non_empty_string)]
        repo: String,

        /// Branch name or full ref (refs/heads/...)
        #[arg(value_parser = non_empty_string)]
        branch: String,

        /// Commit hash to report
        #[arg(long)]
        sha: Option<String>,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
