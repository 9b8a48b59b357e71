/// End-to-end tests for the CLI
use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_catalog(dir: &Path) {
    fs::write(
        dir.join("m1.json"),
        r#"{"Id": "m1", "DisplayName": "ThinkPad T14s Gen 2", "ParentId": ""}"#,
    )
    .unwrap();
    fs::write(
        dir.join("c1.json"),
        r#"{"Id": "c1", "ParentId": "m1", "Members": ["g1"]}"#,
    )
    .unwrap();
}

fn write_descriptors(dir: &Path) {
    fs::write(
        dir.join("g1.json"),
        r#"{"Title": "Intel Wi-Fi Driver 22.150", "KBArticleID": "KB500100"}"#,
    )
    .unwrap();
    fs::write(
        dir.join("g2.json"),
        r#"{"Title": "Synaptics Touchpad Firmware", "KBArticleID": "KB500101"}"#,
    )
    .unwrap();
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("patch-recon").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("patch-recon")
            .arg("--version")
            .assert()
            .code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("patch-recon")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Missing required --model
    #[test]
    fn test_exit_code_missing_model() {
        cargo_bin_cmd!("patch-recon").arg("reconcile").assert().code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("patch-recon")
            .args(["reconcile", "--model", "M1", "--format", "xml"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - non-existent catalog directory
    #[test]
    fn test_exit_code_application_error_bad_catalog_dir() {
        let descriptor_dir = TempDir::new().unwrap();
        cargo_bin_cmd!("patch-recon")
            .args([
                "reconcile",
                "--model",
                "M1",
                "--catalog-dir",
                "/nonexistent/path/that/does/not/exist",
                "--descriptor-dir",
                descriptor_dir.path().to_str().unwrap(),
                "--wsus-url",
                "http://127.0.0.1:1",
                "--sccm-url",
                "http://127.0.0.1:1",
            ])
            .assert()
            .code(3);
    }

    /// Exit code 1: Source failure - update inventory unreachable
    #[test]
    fn test_exit_code_source_failure_when_update_inventory_unreachable() {
        let catalog_dir = TempDir::new().unwrap();
        let descriptor_dir = TempDir::new().unwrap();
        write_catalog(catalog_dir.path());
        write_descriptors(descriptor_dir.path());

        cargo_bin_cmd!("patch-recon")
            .args([
                "reconcile",
                "--model",
                "ThinkPad T14s Gen 2",
                "--catalog-dir",
                catalog_dir.path().to_str().unwrap(),
                "--descriptor-dir",
                descriptor_dir.path().to_str().unwrap(),
                "--wsus-url",
                "http://127.0.0.1:1",
                "--sccm-url",
                "http://127.0.0.1:1",
                "--timeout-secs",
                "1",
            ])
            .assert()
            .code(1)
            .stdout(predicate::str::contains("\"run_state\": \"aborted\""));
    }
}

#[test]
fn test_reconcile_unknown_model_succeeds_with_empty_report() {
    // Model resolution happens before any inventory call, so a model
    // missing from the catalog yields a clean empty run even with
    // unreachable gateways.
    let catalog_dir = TempDir::new().unwrap();
    let descriptor_dir = TempDir::new().unwrap();
    write_catalog(catalog_dir.path());
    write_descriptors(descriptor_dir.path());

    cargo_bin_cmd!("patch-recon")
        .args([
            "reconcile",
            "--model",
            "No Such Model",
            "--catalog-dir",
            catalog_dir.path().to_str().unwrap(),
            "--descriptor-dir",
            descriptor_dir.path().to_str().unwrap(),
            "--wsus-url",
            "http://127.0.0.1:1",
            "--sccm-url",
            "http://127.0.0.1:1",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("model-not-found"))
        .stdout(predicate::str::contains("\"run_state\": \"done\""));
}

#[test]
fn test_find_descriptors_matches_titles_offline() {
    let descriptor_dir = TempDir::new().unwrap();
    write_descriptors(descriptor_dir.path());

    cargo_bin_cmd!("patch-recon")
        .args([
            "find-descriptors",
            "--keyword",
            "wi-fi",
            "--descriptor-dir",
            descriptor_dir.path().to_str().unwrap(),
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Intel Wi-Fi Driver 22.150"))
        .stdout(predicate::str::contains("g1"))
        .stdout(predicate::str::contains("Synaptics").not());
}

#[test]
fn test_find_descriptors_requires_keyword() {
    cargo_bin_cmd!("patch-recon")
        .arg("find-descriptors")
        .assert()
        .code(2);
}
