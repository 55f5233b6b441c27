//! Integration tests for init and config commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::blogctl_cmd;

#[test]
fn test_init_creates_layout() {
    let temp = TempDir::new().unwrap();

    blogctl_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized blog"));

    assert!(temp.path().join(".blogctl/config.toml").is_file());
    assert!(temp.path().join("_posts").is_dir());
    assert!(temp.path().join("tags").is_dir());
}

#[test]
fn test_init_twice_fails() {
    let temp = TempDir::new().unwrap();

    blogctl_cmd().arg("init").arg(temp.path()).assert().success();
    blogctl_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();

    blogctl_cmd().arg("init").arg(temp.path()).assert().success();

    blogctl_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("posts_dir = _posts"))
        .stdout(predicate::str::contains("tags_dir = tags"))
        .stdout(predicate::str::contains("tag_index = index.html"));
}

#[test]
fn test_config_set_changes_layout() {
    let temp = TempDir::new().unwrap();

    blogctl_cmd().arg("init").arg(temp.path()).assert().success();
    fs::create_dir(temp.path().join("topics")).unwrap();

    blogctl_cmd()
        .current_dir(temp.path())
        .args(["config", "tags_dir", "topics"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set tags_dir = topics"));

    blogctl_cmd()
        .current_dir(temp.path())
        .args(["config", "tags_dir"])
        .assert()
        .success()
        .stdout(predicate::str::contains("topics"));

    blogctl_cmd()
        .current_dir(temp.path())
        .args(["tag", "new", "rust"])
        .assert()
        .success();

    assert!(temp.path().join("topics/rust/index.html").is_file());
}

#[test]
fn test_config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();

    blogctl_cmd().arg("init").arg(temp.path()).assert().success();

    blogctl_cmd()
        .current_dir(temp.path())
        .args(["config", "editor"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: 'editor'"));
}

#[test]
fn test_not_a_blog_directory() {
    let temp = TempDir::new().unwrap();

    blogctl_cmd()
        .current_dir(temp.path())
        .args(["delete", "Hello"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Not a blog directory"));
}

#[test]
fn test_blogctl_root_env() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();

    blogctl_cmd().arg("init").arg(temp.path()).assert().success();

    blogctl_cmd()
        .current_dir(elsewhere.path())
        .env("BLOGCTL_ROOT", temp.path())
        .args(["new", "Hello", "--date", "2024-03-05"])
        .assert()
        .success();

    assert!(temp.path().join("_posts/2024-03-05-hello.md").is_file());
}

#[test]
fn test_malformed_config_fails() {
    let temp = TempDir::new().unwrap();

    blogctl_cmd().arg("init").arg(temp.path()).assert().success();
    fs::write(temp.path().join(".blogctl/config.toml"), "posts_dir = [").unwrap();

    blogctl_cmd()
        .current_dir(temp.path())
        .args(["exists", "Hello"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML deserialization error"));
}
