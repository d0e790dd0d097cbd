// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `commit-notify event` command.
//!
//! Vetoed and ignored events are checked against a CI base URL nothing
//! listens on: any attempted delivery would fail the command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::fs;
use std::net::TcpListener;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use yare::parameterized;

fn cn() -> Command {
    let mut cmd = cargo_bin_cmd!("commit-notify");
    cmd.env_remove("COMMIT_NOTIFY_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    format!("http://{}", listener.local_addr().unwrap())
}

fn write_config(dir: &Path, settings: &str) {
    let config = format!(
        r#"
[server]
http_base = "http://some.stash.com"

[[repos]]
project = "FOO"
slug = "bar"

[repos.settings]
base_url = "{}"
clone_type = "http"
{settings}
"#,
        closed_port_url()
    );
    fs::write(dir.join("commit-notify.toml"), config).unwrap();
}

fn push_event(user: &str, ref_id: &str, kind: &str) -> String {
    format!(
        r#"{{
            "type": "push",
            "repository": {{"project": "FOO", "slug": "bar"}},
            "user": "{user}",
            "ref_changes": [
                {{"ref_id": "{ref_id}", "from_hash": "000", "to_hash": "aaa", "kind": "{kind}"}}
            ]
        }}"#
    )
}

fn rescope_event(previous_from_hash: &str, conflicted: bool) -> String {
    format!(
        r#"{{
            "type": "pull_request_rescoped",
            "user": "alice",
            "previous_from_hash": "{previous_from_hash}",
            "conflicted": {conflicted},
            "pull_request": {{
                "id": 7,
                "from_ref": {{
                    "ref_id": "refs/heads/feature",
                    "latest_commit": "abc123",
                    "repository": {{"project": "FOO", "slug": "bar"}}
                }},
                "to_ref": {{
                    "ref_id": "refs/heads/main",
                    "latest_commit": "def456",
                    "repository": {{"project": "FOO", "slug": "bar"}}
                }}
            }}
        }}"#
    )
}

// =============================================================================
// Eligibility
// =============================================================================

#[parameterized(
    ignored_committer = { "ci-bot", "refs/heads/main", "update", "ignore_committers = \"CI-Bot\"" },
    blacklisted_branch = {
        "alice", "refs/heads/release-1", "update",
        "branch_options = \"blacklist\"\nbranch_options_branches = \"release*\""
    },
    not_whitelisted = {
        "alice", "refs/heads/main", "update",
        "branch_options = \"whitelist\"\nbranch_options_branches = \"release*\""
    },
    deleted_ref = { "alice", "refs/heads/main", "delete", "" },
)]
fn vetoed_push_sends_nothing(user: &str, ref_id: &str, kind: &str, settings: &str) {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), settings);
    let event = temp.path().join("push.json");
    fs::write(&event, push_event(user, ref_id, kind)).unwrap();

    cn().arg("event")
        .arg(&event)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn eligible_push_attempts_delivery() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "");

    cn().arg("event")
        .write_stdin(push_event("alice", "refs/heads/main", "update"))
        .current_dir(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "&branches=refs%2Fheads%2Fmain&sha1=aaa",
        ))
        .stderr(predicate::str::contains("1 of 1 notifications failed"));
}

#[test]
fn push_for_unconfigured_repository_is_skipped() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "");
    let event = push_event("alice", "refs/heads/main", "update").replace("\"FOO\"", "\"BAZ\"");

    cn().args(["event", "-", "-o", "json"])
        .write_stdin(event)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "{\"successful\":true,\"message\":\"hook not configured\"}\n",
        ));
}

// =============================================================================
// Pull request rescopes
// =============================================================================

#[parameterized(
    target_moved = { "abc123", true },
    no_conflicts = { "old", false },
)]
fn rescope_outside_gate_is_ignored(previous: &str, conflicted: bool) {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "");

    cn().arg("event")
        .write_stdin(rescope_event(previous, conflicted))
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn conflicted_source_rescope_attempts_delivery() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "");

    cn().arg("event")
        .write_stdin(rescope_event("old", true))
        .current_dir(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "&branches=refs%2Fheads%2Ffeature&sha1=abc123",
        ));
}

// =============================================================================
// Input errors
// =============================================================================

#[test]
fn malformed_event_fails() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "");

    cn().arg("event")
        .write_stdin("{\"type\": \"tag_created\"}")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("json error"));
}

#[test]
fn missing_event_file_fails() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "");

    cn().args(["event", "missing.json"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("io error"));
}
