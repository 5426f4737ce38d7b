// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs, deprecated, clippy::unwrap_used)]
//! End-to-end checks of the `gw` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn gw() -> Command {
    let mut cmd = Command::cargo_bin("gw").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn help_lists_subcommands() {
    gw().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("choose-replace"))
        .stdout(predicate::str::contains("look-at"));
}

#[test]
fn default_seed_is_deterministic() {
    let first = stdout_of(gw().args(["bits", "-n", "6"]));
    assert_eq!(
        first,
        "2934872201\n1598712697\n1602780313\n601829433\n2670292655\n1997366533\n"
    );
    assert_eq!(first, stdout_of(gw().args(["bits", "-n", "6"])));
}

#[test]
fn hex_seed_drives_the_stream() {
    let seed = hex::encode((0u8..64).collect::<Vec<_>>());
    gw().args(["--seed", &seed, "bits", "-n", "2"])
        .assert()
        .success()
        .stdout("607133740\n1652856252\n");
}

#[test]
fn short_seed_is_an_error() {
    gw().args(["--seed", "abcd", "bits"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("seed requires 64 bytes, got 2"));
}

#[test]
fn config_file_sets_seed_and_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gw.json");
    fs::write(&path, r#"{"seed_u64": 7, "format": "json"}"#).unwrap();

    let text = stdout_of(gw().arg("--config").arg(&path).args(["choose", "10", "3"]));
    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(doc["values"], serde_json::json!([0, 1, 9]));

    // --format on the command line wins over the file.
    gw().arg("--config")
        .arg(&path)
        .args(["--format", "text", "shuffle", "8"])
        .assert()
        .success()
        .stdout("3\n2\n1\n6\n5\n4\n7\n0\n");
}

#[test]
fn missing_config_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");
    gw().arg("--config")
        .arg(&path)
        .arg("bits")
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.json"));
}

#[test]
fn range_rejects_empty_interval() {
    gw().args(["range", "9", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("min < max"));
}

#[test]
fn frustum_json_has_six_planes() {
    let text = stdout_of(gw().args(["--format", "json", "frustum", "--normalize"]));
    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
    let planes = doc["planes"].as_object().unwrap();
    assert_eq!(planes.len(), 6);
    for name in ["left", "right", "bottom", "top", "near", "far"] {
        assert_eq!(planes[name].as_array().unwrap().len(), 4, "plane {name}");
    }
}

#[test]
fn look_at_accepts_negative_components() {
    gw().args(["look-at", "--eye", "-1,2,3", "--target", "0,0,-4"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}
