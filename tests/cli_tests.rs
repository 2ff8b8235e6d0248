//! Integration tests for argument handling and setup errors

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{droz_cmd, write_site_config};

#[test]
fn test_missing_site_root_prints_usage() {
    droz_cmd()
        .arg("--config")
        .arg("blog")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--to"))
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_missing_config_name_prints_usage() {
    let site = TempDir::new().unwrap();

    droz_cmd()
        .arg("--to")
        .arg(site.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--config"));
}

#[test]
fn test_missing_config_file() {
    let notes = TempDir::new().unwrap();
    let site = TempDir::new().unwrap();

    droz_cmd()
        .arg("--notes")
        .arg(notes.path())
        .arg("--to")
        .arg(site.path())
        .arg("--config")
        .arg("blog")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Config file not found"))
        .stderr(predicate::str::contains("blog.yaml"));
}

#[test]
fn test_invalid_config_file() {
    let notes = TempDir::new().unwrap();
    let site = TempDir::new().unwrap();
    write_site_config(notes.path(), "blog", "publish_tags: [unclosed");

    droz_cmd()
        .arg("--notes")
        .arg(notes.path())
        .arg("--to")
        .arg(site.path())
        .arg("--config")
        .arg("blog")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn test_empty_publish_tags_does_nothing() {
    let notes = TempDir::new().unwrap();
    let site = TempDir::new().unwrap();
    write_site_config(notes.path(), "blog", "publish_tags: []\n");
    fs::write(notes.path().join("202102012138.md"), "Tags: #public\n\n# T\n").unwrap();

    droz_cmd()
        .arg("--notes")
        .arg(notes.path())
        .arg("--to")
        .arg(site.path())
        .arg("--config")
        .arg("blog")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 0 page(s) from 0 note(s)"));
}

#[test]
fn test_version_flag() {
    droz_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("droz"));
}
