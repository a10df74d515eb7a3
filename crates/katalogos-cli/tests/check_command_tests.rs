//! Integration tests for `katalogos check`: exit codes and report formats.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

// ── fixtures ──────────────────────────────────────────────────────────────────

const CLEAN_LOCATIONS: &str = r#"[
    {
        "id": "1", "name": "Αττική", "child_count": 1,
        "children": [{
            "id": "1", "name": "Αθήνα - Κέντρο", "child_count": 2,
            "children": [
                { "id": "1", "name": "10431" },
                { "id": "2", "name": "10432" }
            ]
        }]
    },
    { "id": "97", "name": "Σε όλη την Ελλάδα", "children": [], "child_count": 0 }
]"#;

const CLEAN_TAXONOMY: &str = r#"[
    {
        "id": "1", "label": "Ομορφιά", "slug": "omorfia",
        "plural": "Ομορφιά", "description": "", "icon": "scissors",
        "children": [{
            "id": "201", "label": "Κομμωτήρια", "slug": "kommotiria",
            "plural": "Κομμωτήρια", "description": "", "type": "company"
        }]
    }
]"#;

const CLEAN_TAGS: &str = r#"[
    { "id": "1", "slug": "python", "label": "Python" },
    { "id": "2", "slug": "seo", "label": "SEO" }
]"#;

/// Write a snapshot directory with the given table bodies.
fn snapshot_dir(locations: &str, taxonomy: &str, tags: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("locations.json"), locations).unwrap();
    fs::write(temp.path().join("taxonomy.json"), taxonomy).unwrap();
    fs::write(temp.path().join("tags.json"), tags).unwrap();
    temp
}

fn katalogos() -> Command {
    let mut cmd = Command::cargo_bin("katalogos").unwrap();
    cmd.env_remove("KATALOGOS_DATA_DIR")
        .env_remove("NO_COLOR")
        .arg("--no-color");
    cmd
}

// ── clean snapshots ───────────────────────────────────────────────────────────

#[test]
fn check_clean_snapshot_exits_zero() {
    let dir = snapshot_dir(CLEAN_LOCATIONS, CLEAN_TAXONOMY, CLEAN_TAGS);
    katalogos()
        .args(["check", "--data-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("All invariants hold"));
}

#[test]
fn check_falls_back_to_the_embedded_snapshot() {
    // Run from an empty directory so no candidate data/ dir exists.
    let empty = TempDir::new().unwrap();
    katalogos()
        .current_dir(empty.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("embedded snapshot"));
}

// ── fatal findings ────────────────────────────────────────────────────────────

#[test]
fn check_bad_postal_code_exits_five() {
    let bad = CLEAN_LOCATIONS.replace("10432", "ATH01");
    let dir = snapshot_dir(&bad, CLEAN_TAXONOMY, CLEAN_TAGS);
    katalogos()
        .args(["check", "--data-dir"])
        .arg(dir.path())
        .assert()
        .code(5)
        .stdout(predicate::str::contains("ATH01"))
        .stderr(predicate::str::contains("Dataset failed validation"));
}

#[test]
fn check_child_count_mismatch_exits_five() {
    let bad = CLEAN_LOCATIONS.replace(r#""child_count": 2"#, r#""child_count": 5"#);
    let dir = snapshot_dir(&bad, CLEAN_TAXONOMY, CLEAN_TAGS);
    katalogos()
        .args(["check", "--data-dir"])
        .arg(dir.path())
        .assert()
        .code(5)
        .stdout(predicate::str::contains("child_count 5"));
}

#[test]
fn check_unknown_provider_kind_exits_five() {
    let bad = CLEAN_TAXONOMY.replace("company", "agency");
    let dir = snapshot_dir(CLEAN_LOCATIONS, &bad, CLEAN_TAGS);
    katalogos()
        .args(["check", "--data-dir"])
        .arg(dir.path())
        .assert()
        .code(5)
        .stdout(predicate::str::contains("agency"));
}

#[test]
fn check_duplicate_tag_slug_exits_five() {
    let bad = CLEAN_TAGS.replace("seo", "python");
    let dir = snapshot_dir(CLEAN_LOCATIONS, CLEAN_TAXONOMY, &bad);
    katalogos()
        .args(["check", "--data-dir"])
        .arg(dir.path())
        .assert()
        .code(5)
        .stdout(predicate::str::contains("python"));
}

// ── advisory findings & strict mode ───────────────────────────────────────────

const SHARED_SLUG_TAXONOMY: &str = r#"[
    {
        "id": "1", "label": "Καλλιτεχνικά", "slug": "kallitexnika",
        "plural": "Καλλιτεχνικά", "description": "", "icon": "palette",
        "children": [
            { "id": "101", "label": "Εκφωνητής", "slug": "ekfonites",
              "plural": "Εκφωνητές", "description": "", "type": "freelancer" },
            { "id": "102", "label": "Voice-over Artist", "slug": "ekfonites",
              "plural": "Voice-over Artists", "description": "", "type": "freelancer" }
        ]
    }
]"#;

#[test]
fn shared_slug_is_not_blocking_by_default() {
    let dir = snapshot_dir(CLEAN_LOCATIONS, SHARED_SLUG_TAXONOMY, CLEAN_TAGS);
    katalogos()
        .args(["check", "--data-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ekfonites"))
        .stdout(predicate::str::contains("advisory"));
}

#[test]
fn strict_mode_escalates_the_shared_slug() {
    let dir = snapshot_dir(CLEAN_LOCATIONS, SHARED_SLUG_TAXONOMY, CLEAN_TAGS);
    katalogos()
        .args(["check", "--strict", "--data-dir"])
        .arg(dir.path())
        .assert()
        .code(5);
}

// ── report formats ────────────────────────────────────────────────────────────

#[test]
fn json_report_is_parseable_and_counts_findings() {
    let dir = snapshot_dir(CLEAN_LOCATIONS, SHARED_SLUG_TAXONOMY, CLEAN_TAGS);
    let output = katalogos()
        .args(["check", "--report-format", "json", "--data-dir"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let document: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(document["fatal"], 0);
    assert_eq!(document["advisory"], 1);
    assert_eq!(document["findings"][0]["kind"], "shared_profession_slug");
}

#[test]
fn line_report_prints_one_finding_per_line() {
    let bad = CLEAN_LOCATIONS.replace("10432", "ATH01");
    let dir = snapshot_dir(&bad, CLEAN_TAXONOMY, CLEAN_TAGS);
    katalogos()
        .args(["check", "--report-format", "line", "--data-dir"])
        .arg(dir.path())
        .assert()
        .code(5)
        .stdout(predicate::str::contains("[fatal] locations 1/1/2"));
}

// ── load failures ─────────────────────────────────────────────────────────────

#[test]
fn missing_explicit_data_dir_is_a_user_error() {
    katalogos()
        .args(["check", "--data-dir", "/absolutely/does/not/exist"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid snapshot"));
}

#[test]
fn data_dir_from_environment_is_honoured() {
    let dir = snapshot_dir(CLEAN_LOCATIONS, CLEAN_TAXONOMY, CLEAN_TAGS);
    let mut cmd = Command::cargo_bin("katalogos").unwrap();
    cmd.env_remove("NO_COLOR")
        .env("KATALOGOS_DATA_DIR", dir.path())
        .args(["--no-color", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All invariants hold"));
}
