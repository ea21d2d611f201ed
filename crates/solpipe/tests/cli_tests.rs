use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn solpipe() -> Command {
    Command::cargo_bin("solpipe").unwrap()
}

#[test]
fn test_help_command() {
    solpipe()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Artifact post-processing pipeline"));
}

#[test]
fn test_version_command() {
    solpipe().arg("--version").assert().success().stdout(predicate::str::contains("solpipe"));
}

#[test]
fn test_subcommand_help() {
    solpipe()
        .arg("set-token-balance")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("recorded balance"));
    solpipe()
        .arg("fastforward")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("virtual clock"));
}

#[test]
fn test_missing_subcommand() {
    solpipe().assert().failure().stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_invalid_address_is_rejected() {
    solpipe()
        .args(["set-eth-balance", "not-an-address", "1"])
        .assert()
        .failure();
}

#[test]
fn test_invalid_long_tests_value_is_rejected() {
    solpipe().args(["test", "--long-tests", "maybe"]).assert().failure();
}

/// A minimal project: one artifact, one-entry ABI manifest.
fn seed_project(dir: &TempDir) {
    let config = r#"
[export]
abi = ["contracts/A.sol:A"]

[build]
artifacts = "artifacts"
"#;
    fs::write(dir.path().join("solpipe.toml"), config).unwrap();

    let artifact_dir = dir.path().join("artifacts/contracts/A.sol");
    fs::create_dir_all(&artifact_dir).unwrap();
    fs::write(
        artifact_dir.join("A.json"),
        serde_json::json!({
            "contractName": "A",
            "sourceName": "contracts/A.sol",
            "abi": [{
                "type": "function",
                "name": "ping",
                "inputs": [],
                "outputs": [],
                "stateMutability": "nonpayable"
            }],
            "bytecode": "0x6001",
            "deployedBytecode": "0x6002"
        })
        .to_string(),
    )
    .unwrap();
}

#[test]
fn test_abi_export_and_clean_round_trip() {
    let dir = TempDir::new().unwrap();
    seed_project(&dir);

    solpipe().current_dir(dir.path()).arg("abi-export").assert().success();
    let exported = dir.path().join("abi/A.json");
    assert!(exported.exists());
    let contents = fs::read_to_string(&exported).unwrap();
    assert!(contents.contains("ping"));

    solpipe().current_dir(dir.path()).arg("abi-clean").assert().success();
    assert!(!exported.exists());

    // Re-export reproduces the same file.
    solpipe().current_dir(dir.path()).arg("abi-export").assert().success();
    assert_eq!(fs::read_to_string(&exported).unwrap(), contents);
}

#[test]
fn test_abi_export_fails_for_unknown_manifest_entry() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("solpipe.toml"),
        "[export]\nabi = [\"contracts/Ghost.sol:Ghost\"]\n",
    )
    .unwrap();

    solpipe()
        .current_dir(dir.path())
        .arg("abi-export")
        .assert()
        .failure()
        .stderr(predicate::str::contains("artifact not found"));
}

#[test]
fn test_compile_without_configured_command_fails() {
    let dir = TempDir::new().unwrap();
    solpipe()
        .current_dir(dir.path())
        .arg("compile")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no compile command configured"));
}
