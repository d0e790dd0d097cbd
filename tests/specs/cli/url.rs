// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `commit-notify url` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use yare::parameterized;

const JENKINS: &str = "http://localhost.jenkins";

fn cn() -> Command {
    let mut cmd = cargo_bin_cmd!("commit-notify");
    cmd.env_remove("COMMIT_NOTIFY_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn write_config(dir: &Path, settings: &str) {
    let config = format!(
        r#"
[server]
http_base = "http://some.stash.com"
ssh_base = "ssh://git@some.stash.com:12345"

[[repos]]
project = "FOO"
slug = "bar"

[repos.settings]
{settings}
"#
    );
    fs::write(dir.join("commit-notify.toml"), config).unwrap();
}

fn url_output(settings: &str, args: &[&str]) -> assert_cmd::assert::Assert {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), settings);
    cn().arg("url").args(args).current_dir(temp.path()).assert()
}

#[parameterized(
    http = {
        "clone_type = \"http\"",
        "url=http%3A%2F%2Fsome.stash.com%2Fscm%2Ffoo%2Fbar.git&branches=refs%2Fheads%2Fmaster&sha1=sha1"
    },
    ssh = {
        "clone_type = \"ssh\"",
        "url=ssh%3A%2F%2Fgit%40some.stash.com%3A12345%2Ffoo%2Fbar.git&branches=refs%2Fheads%2Fmaster&sha1=sha1"
    },
    custom = {
        "clone_type = \"custom\"\nclone_url = \"http://custom.host/custom.git\"",
        "url=http%3A%2F%2Fcustom.host%2Fcustom.git&branches=refs%2Fheads%2Fmaster&sha1=sha1"
    },
    unset_clone_type = {
        "clone_url = \"http://custom.host/custom.git\"",
        "url=http%3A%2F%2Fcustom.host%2Fcustom.git&branches=refs%2Fheads%2Fmaster&sha1=sha1"
    },
    omit_branch = {
        "clone_type = \"http\"\nomit_branch_name = true",
        "url=http%3A%2F%2Fsome.stash.com%2Fscm%2Ffoo%2Fbar.git&sha1=sha1"
    },
)]
fn url_for_clone_settings(settings: &str, query: &str) {
    let settings = format!("base_url = \"{JENKINS}\"\n{settings}");

    url_output(&settings, &["FOO/bar", "master", "--sha", "sha1"])
        .success()
        .stdout(predicate::str::diff(format!(
            "{JENKINS}/git/notifyCommit?{query}\n"
        )));
}

#[test]
fn url_strips_trailing_slash_from_base_url() {
    url_output(
        "base_url = \"https://localhost.jenkins/\"\nclone_type = \"http\"",
        &["FOO/bar", "refs/heads/master"],
    )
    .success()
    .stdout(predicate::str::diff(
        "https://localhost.jenkins/git/notifyCommit?\
         url=http%3A%2F%2Fsome.stash.com%2Fscm%2Ffoo%2Fbar.git\
         &branches=refs%2Fheads%2Fmaster\n",
    ));
}

#[test]
fn url_for_unconfigured_repository_fails() {
    url_output(
        &format!("base_url = \"{JENKINS}\""),
        &["FOO/other", "master"],
    )
    .failure()
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains(
        "repository FOO/other has no notification hook configured",
    ));
}

#[parameterized(
    invalid_clone_type = { "base_url = \"http://localhost.jenkins\"\nclone_type = \"ftp\"", "invalid clone type" },
    missing_base_url = { "clone_type = \"http\"", "no CI base URL configured" },
    missing_custom_url = { "base_url = \"http://localhost.jenkins\"\nclone_type = \"custom\"", "no custom clone URL" },
)]
fn url_with_invalid_settings_fails(settings: &str, message: &str) {
    url_output(settings, &["FOO/bar", "master"])
        .failure()
        .stderr(predicate::str::contains(message));
}

#[test]
fn url_with_malformed_config_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("commit-notify.toml"), "[[repos]\n").unwrap();

    cn().args(["url", "FOO/bar", "master"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("config error"));
}

#[test]
fn url_reads_json_config() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("cn.json");
    fs::write(
        &config,
        r#"{
            "server": {"http_base": "http://some.stash.com"},
            "repos": [{
                "project": "FOO",
                "slug": "bar",
                "settings": {"base_url": "http://localhost.jenkins", "clone_type": "http"}
            }]
        }"#,
    )
    .unwrap();

    cn().args(["url", "FOO/bar", "master", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "http://localhost.jenkins/git/notifyCommit?url=http%3A%2F%2Fsome.stash.com",
        ));
}
