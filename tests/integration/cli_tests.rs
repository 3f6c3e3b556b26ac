//! CLI smoke tests via assert_cmd.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::{tempdir, TempDir};

const CATALOG_JSON: &str = r#"{
  "skills": [
    {"id": "stance", "name": "Athletic Stance", "level": "beginner"},
    {"id": "wedge", "name": "Wedge Turns", "level": "beginner"},
    {"id": "carving", "name": "Basic Carving", "level": "novice",
     "prerequisites": ["wedge"]}
  ]
}"#;

struct Fixture {
    _dir: TempDir,
    catalog: PathBuf,
    db: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempdir().unwrap();
        let catalog = dir.path().join("catalog.json");
        std::fs::write(&catalog, CATALOG_JSON).unwrap();
        let db = dir.path().join("turnlab.db");
        Self {
            _dir: dir,
            catalog,
            db,
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("turnlab").unwrap();
        cmd.arg("--catalog")
            .arg(&self.catalog)
            .arg("--db")
            .arg(&self.db)
            .arg("--quiet");
        cmd
    }
}

fn assess(fixture: &Fixture, skill: &str, rating: &str) {
    fixture
        .cmd()
        .args(["assess", skill, "--context", "groomed_green", "--rating", rating])
        .assert()
        .success();
}

#[test]
fn help_and_version() {
    Command::cargo_bin("turnlab")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));

    Command::cargo_bin("turnlab")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn progress_starts_at_zero() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["--machine", "progress"])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| {
            let json: Value = serde_json::from_str(out.trim()).unwrap();
            json["level"] == "Beginner" && json["progress"] == 0.0
        }));
}

#[test]
fn assess_then_progress_reaches_one() {
    let fixture = Fixture::new();
    assess(&fixture, "stance", "confident");
    assess(&fixture, "wedge", "mastered");

    fixture
        .cmd()
        .args(["--machine", "progress"])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| {
            let json: Value = serde_json::from_str(out.trim()).unwrap();
            json["progress"] == 1.0 && json["can_advance"] == true
        }));
}

#[test]
fn suggest_excludes_proficient_skills() {
    let fixture = Fixture::new();
    assess(&fixture, "stance", "confident");

    fixture
        .cmd()
        .args(["--machine", "suggest"])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| {
            let json: Value = serde_json::from_str(out.trim()).unwrap();
            let ids: Vec<&str> = json
                .as_array()
                .unwrap()
                .iter()
                .map(|s| s["skill"]["id"].as_str().unwrap())
                .collect();
            ids == ["wedge"]
        }));
}

#[test]
fn advance_updates_persisted_level() {
    let fixture = Fixture::new();
    assess(&fixture, "stance", "confident");
    assess(&fixture, "wedge", "confident");

    fixture
        .cmd()
        .args(["--machine", "advance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"advanced\":true"));

    fixture
        .cmd()
        .args(["--machine", "progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"level\":\"Novice\""));

    // The single novice skill was granted free on advance.
    fixture
        .cmd()
        .args(["--machine", "access", "carving"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"accessible\":true"));
}

#[test]
fn init_at_novice_grants_catalog_order_skills() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["--machine", "init", "--level", "novice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("carving"));

    fixture
        .cmd()
        .args(["--machine", "access", "carving"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"accessible\":true"));
}

#[test]
fn unknown_skill_fails_with_error() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["assess", "ghost", "--context", "bumps", "--rating", "confident"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Skill not found"));
}

#[test]
fn catalog_must_exist() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("turnlab").unwrap();
    cmd.arg("--catalog")
        .arg(dir.path().join("missing.json"))
        .arg("--db")
        .arg(dir.path().join("db"))
        .arg("progress")
        .assert()
        .failure();
}

#[test]
fn completions_generate_without_catalog() {
    let mut cmd = Command::cargo_bin("turnlab").unwrap();
    cmd.arg("--catalog")
        .arg(Path::new("/nonexistent/catalog.json"))
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("turnlab"));
}
