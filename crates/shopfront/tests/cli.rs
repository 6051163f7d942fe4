// ABOUTME: Integration tests for the shopfront CLI binary.
// ABOUTME: Tests file and stdin input, output files, compact JSON, base URL validation and log level.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><title>Test Shoe — Shop</title></head>
<body>
<section class="product" data-id="shoe-1"><h1>Test Shoe</h1>
<div class="about"><div class="price">$80 <span>$100</span></div></div>
</section>
</body>
</html>"#;

fn shopfront_cmd() -> Command {
    Command::cargo_bin("shopfront").unwrap()
}

#[test]
fn extract_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("page.html");
    fs::write(&html_path, PAGE).unwrap();

    shopfront_cmd()
        .arg(&html_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"title\": \"Test Shoe\""))
        .stdout(predicate::str::contains("\"discountPercent\": \"20.00%\""));
}

#[test]
fn extract_from_stdin_compact() {
    shopfront_cmd()
        .arg("--compact")
        .write_stdin(PAGE)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\":\"shoe-1\""))
        .stdout(predicate::str::contains("\"currency\":\"USD\""));
}

#[test]
fn writes_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let html_path = temp_dir.path().join("page.html");
    let out_path = temp_dir.path().join("out.json");
    fs::write(&html_path, PAGE).unwrap();

    shopfront_cmd()
        .arg(&html_path)
        .arg("-o")
        .arg(&out_path)
        .assert()
        .success();

    let written = fs::read_to_string(&out_path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(json["product"]["name"], "Test Shoe");
    assert_eq!(json["product"]["discountValue"], 20.0);
}

#[test]
fn missing_input_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    shopfront_cmd()
        .arg(temp_dir.path().join("nope.html"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: reading"));
}

#[test]
fn invalid_base_url_fails() {
    shopfront_cmd()
        .arg("--base-url")
        .arg("not a url")
        .write_stdin(PAGE)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid URL"));
}

#[test]
fn logs_at_info_by_default() {
    shopfront_cmd()
        .env_remove("RUST_LOG")
        .write_stdin(PAGE)
        .assert()
        .success()
        .stderr(predicate::str::contains("extraction finished"));
}

#[test]
fn rust_log_overrides_default_level() {
    shopfront_cmd()
        .env("RUST_LOG", "warn")
        .write_stdin(PAGE)
        .assert()
        .success()
        .stderr(predicate::str::contains("extraction finished").not());
}
