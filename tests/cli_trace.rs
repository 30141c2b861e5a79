use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn trace_prints_full_lifecycle() {
    let mut cmd = Command::cargo_bin("learnHub").unwrap();
    cmd.args(["trace", "--passes", "4"])
        .env("RUST_LOG", "off")
        .assert()
        .success()
        .stdout(predicate::str::contains("constructed (init)"))
        .stdout(predicate::str::contains("view-init (init)"))
        .stdout(predicate::str::contains("destroying (destroy)"));
}

#[test]
fn trace_json_lines_carry_source() {
    let mut cmd = Command::cargo_bin("learnHub").unwrap();
    cmd.args(["trace", "--passes", "1", "--json"])
        .env("RUST_LOG", "off")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"source\":\"guest\""))
        .stdout(predicate::str::contains("\"source\":\"host\""));
}

#[test]
fn config_init_writes_defaults_once() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("settings.toml");

    Command::cargo_bin("learnHub")
        .unwrap()
        .args(["--config", file.path().to_str().unwrap(), "config", "init"])
        .assert()
        .success();
    file.assert(predicate::str::contains("throttle_ms = 2000"));

    Command::cargo_bin("learnHub")
        .unwrap()
        .args(["--config", file.path().to_str().unwrap(), "config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn trace_rejects_malformed_config() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("bad.toml");
    file.write_str("throttle_ms = \"later\"").unwrap();
    Command::cargo_bin("learnHub")
        .unwrap()
        .args(["--config", file.path().to_str().unwrap(), "trace"])
        .env("RUST_LOG", "off")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid settings"));
}
