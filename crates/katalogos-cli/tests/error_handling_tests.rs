//! Tests for lookup commands, error handling and suggestions.
//!
//! These run against the embedded snapshot from an empty working directory,
//! so no ambient data/ directory can interfere.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn katalogos_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("katalogos").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("KATALOGOS_DATA_DIR")
        .env_remove("NO_COLOR")
        .arg("--no-color");
    cmd
}

// ── list ──────────────────────────────────────────────────────────────────────

#[test]
fn list_regions_shows_the_embedded_snapshot() {
    let dir = TempDir::new().unwrap();
    katalogos_in(&dir)
        .args(["list", "regions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Αττική"))
        .stdout(predicate::str::contains("Σε όλη την Ελλάδα"));
}

#[test]
fn list_areas_requires_region_flag() {
    let dir = TempDir::new().unwrap();
    katalogos_in(&dir)
        .args(["list", "areas"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--region"));
}

#[test]
fn list_areas_of_unknown_region_is_not_found() {
    let dir = TempDir::new().unwrap();
    katalogos_in(&dir)
        .args(["list", "areas", "--region", "999"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No region with id '999'"));
}

#[test]
fn list_areas_of_placeholder_region_is_empty_not_an_error() {
    let dir = TempDir::new().unwrap();
    katalogos_in(&dir)
        .args(["list", "areas", "--region", "97"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(0)"));
}

#[test]
fn list_postal_codes_resolves_area_within_region() {
    let dir = TempDir::new().unwrap();
    katalogos_in(&dir)
        .args(["list", "postal-codes", "--region", "1", "--area", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("11522"));
}

#[test]
fn list_professions_filters_by_kind() {
    let dir = TempDir::new().unwrap();
    katalogos_in(&dir)
        .args([
            "list",
            "professions",
            "--category",
            "3",
            "--kind",
            "company",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Εταιρείες Πληροφορικής"))
        .stdout(predicate::str::contains("Προγραμματιστής").not());
}

#[test]
fn list_tags_csv_has_a_header_row() {
    let dir = TempDir::new().unwrap();
    katalogos_in(&dir)
        .args(["list", "tags", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("id,slug,label"))
        .stdout(predicate::str::contains("8,python,Python"));
}

#[test]
fn list_regions_json_is_parseable() {
    let dir = TempDir::new().unwrap();
    let output = katalogos_in(&dir)
        .args(["list", "regions", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let regions: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(regions.as_array().unwrap().len() >= 4);
    assert_eq!(regions[0]["name"], "Αττική");
}

// ── resolve ───────────────────────────────────────────────────────────────────

#[test]
fn resolve_shared_slug_lists_every_match_with_ids() {
    let dir = TempDir::new().unwrap();
    katalogos_in(&dir)
        .args(["resolve", "ekfonites"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 match(es)"))
        .stdout(predicate::str::contains("id 101"))
        .stdout(predicate::str::contains("id 102"))
        .stdout(predicate::str::contains("disambiguate by profession id"));
}

#[test]
fn resolve_unique_slug_has_single_match_and_no_hint() {
    let dir = TempDir::new().unwrap();
    katalogos_in(&dir)
        .args(["resolve", "kommotiria"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 match(es)"))
        .stdout(predicate::str::contains("disambiguate").not());
}

#[test]
fn resolve_unknown_slug_is_not_found_with_suggestions() {
    let dir = TempDir::new().unwrap();
    katalogos_in(&dir)
        .args(["resolve", "does-not-exist"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No profession matches"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn resolve_list_format_prints_only_ids() {
    let dir = TempDir::new().unwrap();
    let output = katalogos_in(&dir)
        .args(["resolve", "ekfonites", "--format", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().collect::<Vec<_>>(), ["101", "102"]);
}

// ── config ────────────────────────────────────────────────────────────────────

#[test]
fn config_path_prints_a_path() {
    let dir = TempDir::new().unwrap();
    katalogos_in(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config").or(predicate::str::contains("katalogos")));
}

#[test]
fn config_list_renders_toml() {
    let dir = TempDir::new().unwrap();
    katalogos_in(&dir)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[output]"));
}

// ── global flags ──────────────────────────────────────────────────────────────

#[test]
fn quiet_and_verbose_conflict() {
    let dir = TempDir::new().unwrap();
    katalogos_in(&dir)
        .args(["--quiet", "--verbose", "check"])
        .assert()
        .code(2);
}

#[test]
fn version_flag_matches_cargo() {
    let dir = TempDir::new().unwrap();
    katalogos_in(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
