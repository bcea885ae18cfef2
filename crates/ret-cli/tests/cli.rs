use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn ret() -> Command {
    Command::cargo_bin("ret").unwrap()
}

#[test]
fn run_missing_root_is_config_error() {
    ret()
        .args(["run", "/nonexistent/ret-root"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration error"));
}

#[test]
fn run_unknown_type_is_config_error() {
    let dir = tempfile::tempdir().unwrap();

    ret()
        .arg("run")
        .arg(dir.path())
        .args(["--types", "invoices"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown document type"));
}

#[test]
fn run_empty_root_succeeds() {
    let dir = tempfile::tempdir().unwrap();

    ret()
        .arg("run")
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("No PDF documents found"));
}

#[test]
fn run_keeps_unreadable_documents() {
    let dir = tempfile::tempdir().unwrap();
    let eat = dir.path().join("EAT");
    fs::create_dir_all(&eat).unwrap();
    fs::write(eat.join("AMBEV_ND_broken.pdf"), b"not a pdf").unwrap();
    fs::write(eat.join("notes.txt"), b"R$ 10,00").unwrap();

    let output = ret()
        .arg("run")
        .arg(dir.path())
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = json["records"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["document_type"], "eat");
    assert_eq!(records[0]["company"], "AMBEV");
    assert_eq!(records[0]["note_kind"], "debit");
    assert_eq!(json["summary"]["document_count"], 1);
    assert_eq!(json["summary"]["with_values"], 0);
    assert_eq!(json["failures"].as_array().unwrap().len(), 1);
}

#[test]
fn run_writes_database_and_report() {
    let dir = tempfile::tempdir().unwrap();
    let top = dir.path().join("TOP");
    fs::create_dir_all(&top).unwrap();
    fs::write(top.join("GALP_NC.pdf"), b"not a pdf").unwrap();
    let out = dir.path().join("out");

    ret()
        .arg("run")
        .arg(dir.path())
        .args(["--db", "--report", "--output-dir"])
        .arg(&out)
        .assert()
        .success();

    assert!(out.join("RET_dados.db").is_file());
    assert!(out.join("RET_Relatorio.xlsx").is_file());
}

#[test]
fn export_from_saved_records() {
    let dir = tempfile::tempdir().unwrap();
    let penalties = dir.path().join("Penalidades");
    fs::create_dir_all(&penalties).unwrap();
    fs::write(penalties.join("COPERGAS.pdf"), b"not a pdf").unwrap();
    let saved = dir.path().join("records.json");

    ret()
        .arg("run")
        .arg(dir.path())
        .arg("--save-records")
        .arg(&saved)
        .assert()
        .success();
    assert!(saved.is_file());

    let report = dir.path().join("again.xlsx");
    ret()
        .arg("export")
        .arg(&saved)
        .arg("--report")
        .arg(&report)
        .assert()
        .success();
    assert!(report.is_file());
}

#[test]
fn export_requires_a_target() {
    let dir = tempfile::tempdir().unwrap();
    let saved = dir.path().join("records.json");
    fs::write(&saved, "[]").unwrap();

    ret()
        .arg("export")
        .arg(&saved)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to export"));
}

#[test]
fn config_path_succeeds() {
    ret()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"));
}

#[test]
fn config_commands_use_global_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("ret.json");

    ret()
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "extraction.currency", "BRL"])
        .assert()
        .success();
    assert!(config.is_file());

    ret()
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "extraction.currency"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"BRL\""));

    ret()
        .arg("--config")
        .arg(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ret.json"));
}
