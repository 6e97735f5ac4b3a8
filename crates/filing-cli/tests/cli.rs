use std::net::TcpListener;
use std::time::{Duration, Instant};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FILING: &str = "FORM 10-K\nCommission File Number: 001-12345\n\
    ACME WIDGETS INC\n(Exact name of registrant as specified in its charter)\n";

fn command(bin: &str, home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(bin).unwrap();
    cmd.env("XDG_CONFIG_HOME", home.path()).env("HOME", home.path());
    cmd
}

fn write_filing(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("filing.txt");
    std::fs::write(&path, FILING).unwrap();
    path
}

#[test]
fn test_profile_prints_json_record() {
    let dir = TempDir::new().unwrap();
    let path = write_filing(&dir);

    command("filing-profile", &dir)
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"company_name\": \"ACME WIDGETS INC\""))
        .stdout(predicate::str::contains("\"directors\": []"));
}

#[test]
fn test_identity_prints_json_record() {
    let dir = TempDir::new().unwrap();
    let path = write_filing(&dir);

    command("filing-identity", &dir)
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"ACME WIDGETS INC\""))
        .stdout(predicate::str::contains("\"ownership\": null"));
}

#[test]
fn test_missing_document_exits_with_failure() {
    let dir = TempDir::new().unwrap();

    for bin in ["filing-profile", "filing-identity"] {
        command(bin, &dir)
            .arg(dir.path().join("absent.pdf"))
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("absent.pdf"));
    }
}

#[test]
fn test_path_argument_is_required() {
    let dir = TempDir::new().unwrap();
    command("filing-profile", &dir).assert().failure();
}

#[test]
fn test_document_timeout_ends_the_process() {
    // Accepts connections into the backlog but never answers.
    let silent = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = silent.local_addr().unwrap().port();

    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join("filing-extract");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.json"),
        format!(
            r#"{{"extraction": {{"document_timeout_secs": 1}},
                "nlp": {{"endpoint": "http://127.0.0.1:{}/entities", "timeout_secs": 30}}}}"#,
            port
        ),
    )
    .unwrap();
    let path = dir.path().join("letter.txt");
    std::fs::write(&path, "Dear shareholders,\nthank you for another year.\n").unwrap();

    let start = Instant::now();
    command("filing-identity", &dir)
        .arg(&path)
        .timeout(Duration::from_secs(25))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not processed within 1s"));
    assert!(start.elapsed() < Duration::from_secs(10), "exited after {:?}", start.elapsed());

    drop(silent);
}
