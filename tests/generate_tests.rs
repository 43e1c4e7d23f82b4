//! Integration tests for the generate and caption commands
//!
//! These only exercise the offline failure paths; the network-facing happy
//! path is covered by unit tests against a stub generator.

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::storypage_cmd;

#[test]
fn test_generate_outside_album_fails_first() {
    let temp = TempDir::new().unwrap();
    let photo = temp.path().join("IMG_2025-08-30.jpg");
    fs::write(&photo, b"jpeg").unwrap();

    storypage_cmd()
        .current_dir(temp.path())
        .arg("generate")
        .arg(&photo)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Not a storypage album"));
}

#[test]
fn test_generate_without_api_key_fails() {
    let temp = TempDir::new().unwrap();
    storypage_cmd().arg("init").arg(temp.path()).assert().success();

    let photo = temp.path().join("IMG_2025-08-30.jpg");
    fs::write(&photo, b"jpeg").unwrap();

    storypage_cmd()
        .current_dir(temp.path())
        .arg("generate")
        .arg(&photo)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("GEMINI_API_KEY"))
        .stderr(predicate::str::contains("export GEMINI_API_KEY"));
}

#[test]
fn test_caption_without_api_key_fails() {
    let temp = TempDir::new().unwrap();
    storypage_cmd().arg("init").arg(temp.path()).assert().success();

    let photo = temp.path().join("IMG_2025-08-30.jpg");
    fs::write(&photo, b"jpeg").unwrap();

    storypage_cmd()
        .current_dir(temp.path())
        .arg("caption")
        .arg("pages/2025-08-30-page-1.png")
        .arg("--photo")
        .arg(&photo)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("GEMINI_API_KEY"));
}
