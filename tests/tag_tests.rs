//! Integration tests for tag commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::blogctl_cmd;

fn init_site(temp: &TempDir) {
    blogctl_cmd().arg("init").arg(temp.path()).assert().success();
}

#[test]
fn test_tag_new_writes_index() {
    let temp = TempDir::new().unwrap();
    init_site(&temp);

    blogctl_cmd()
        .current_dir(temp.path())
        .args(["tag", "new", "Ruby Tips"])
        .assert()
        .success()
        .stdout("Creating new tag: ruby-tips\n");

    assert_eq!(
        fs::read_to_string(temp.path().join("tags/ruby-tips/index.html")).unwrap(),
        "---\nlayout: tag-posts\ntag: ruby-tips\ntitle: posts tagged with ruby-tips\n---\n"
    );
}

#[test]
fn test_tag_new_twice_is_quiet() {
    let temp = TempDir::new().unwrap();
    init_site(&temp);

    blogctl_cmd()
        .current_dir(temp.path())
        .args(["tag", "new", "rust"])
        .assert()
        .success();

    blogctl_cmd()
        .current_dir(temp.path())
        .args(["tag", "new", "rust"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(fs::read_dir(temp.path().join("tags")).unwrap().count(), 1);
}

#[test]
fn test_tag_delete() {
    let temp = TempDir::new().unwrap();
    init_site(&temp);

    blogctl_cmd()
        .current_dir(temp.path())
        .args(["tag", "new", "rust"])
        .assert()
        .success();

    blogctl_cmd()
        .current_dir(temp.path())
        .args(["exists", "--tag", "rust"])
        .assert()
        .success()
        .stdout("yes\n");

    blogctl_cmd()
        .current_dir(temp.path())
        .args(["tag", "delete", "rust"])
        .assert()
        .success()
        .stdout("Removing tag: rust\n");

    assert!(!temp.path().join("tags/rust").exists());

    blogctl_cmd()
        .current_dir(temp.path())
        .args(["tag", "delete", "rust"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_custom_tag_template() {
    let temp = TempDir::new().unwrap();
    init_site(&temp);
    let templates = temp.path().join(".blogctl/templates");
    fs::create_dir_all(&templates).unwrap();
    fs::write(
        templates.join("tag-index.html"),
        "---\nlayout: tag\ntag: {TAG}\nname: {TITLE}\n---\n",
    )
    .unwrap();

    blogctl_cmd()
        .current_dir(temp.path())
        .args(["tag", "new", "Ruby Tips"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("tags/ruby-tips/index.html")).unwrap(),
        "---\nlayout: tag\ntag: ruby-tips\nname: Ruby Tips\n---\n"
    );
}
