//! Command-line interface tests
//!
//! Run the built binary against temporary input files and check the
//! rendered output in each format.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const TULSI_PAYLOAD: &str = r#"{
  "candidates": [
    {
      "scientificName": "Ocimum tenuiflorum",
      "genus": "Ocimum",
      "family": "Lamiaceae",
      "commonNames": ["Tulsi", "Holy basil"],
      "confidence": 92
    },
    { "scientificName": "Ocimum basilicum", "confidence": 40 }
  ]
}"#;

const ALOE_PAYLOAD: &str = r#"[
  { "scientific_name": "Aloe vera", "genus": "Aloe", "confidence": 45 }
]"#;

const TSV_HEADER: &str = "candidate\tconfidence\ttier\tstatus\tproduct_id";

const ALOE_ROW: &str =
    "Aloe vera\t45\tLOW\tMatched\taloe-vera-plant\tAloe Vera Plant\taloe vera\tsucculent_cactus";

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".json").expect("Failed to create temp file");
    let bytes = contents.as_bytes();
    file.write_all(bytes).expect("Failed to write temp file");
    file
}

fn plant_resolver() -> Command {
    Command::cargo_bin("plant-resolver").expect("binary should build")
}

#[test]
fn test_resolve_text_output() {
    let input = write_temp(TULSI_PAYLOAD);

    plant_resolver()
        .arg("resolve")
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Top candidate: Ocimum"))
        .stdout(predicate::str::contains("(HIGH)"))
        .stdout(predicate::str::contains("Tulsi Plant (tulsi-plant)"))
        .stdout(predicate::str::contains("Care (rule: default)"));
}

#[test]
fn test_resolve_json_output() {
    let input = write_temp(TULSI_PAYLOAD);

    let output = plant_resolver()
        .args(["resolve", "--format", "json"])
        .arg(input.path())
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["tier"], "high");
    assert_eq!(json["match"]["status"], "matched");
    assert_eq!(json["match"]["product"]["id"], "tulsi-plant");
    assert_eq!(json["match"]["matched_term"], "tulsi");
    assert_eq!(json["care"]["rule_id"], "default");
}

#[test]
fn test_resolve_tsv_output() {
    let input = write_temp(ALOE_PAYLOAD);

    plant_resolver()
        .args(["resolve", "--format", "tsv"])
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with(TSV_HEADER))
        .stdout(predicate::str::contains(ALOE_ROW));
}

#[test]
fn test_resolve_from_stdin() {
    plant_resolver()
        .args(["resolve", "-"])
        .write_stdin(r#"{"suggestions": []}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("No candidates were identified."));
}

#[test]
fn test_resolve_with_custom_catalog() {
    let input = write_temp(TULSI_PAYLOAD);
    let catalog = write_temp(r#"{"products": [{"id": "rose", "name": "Rose"}]}"#);

    plant_resolver()
        .args(["resolve", "--format", "json", "--catalog"])
        .arg(catalog.path())
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"not_found\""));
}

#[test]
fn test_resolve_custom_thresholds() {
    let input = write_temp(TULSI_PAYLOAD);

    plant_resolver()
        .args(["resolve", "--high-threshold", "95"])
        .args(["--medium-threshold", "60"])
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(MEDIUM)"));
}

#[test]
fn test_resolve_rejects_inverted_thresholds() {
    let input = write_temp(TULSI_PAYLOAD);

    plant_resolver()
        .args(["resolve", "--high-threshold", "40"])
        .args(["--medium-threshold", "60"])
        .arg(input.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not exceed"));
}

#[test]
fn test_resolve_rejects_invalid_json() {
    let input = write_temp("{ not json");

    plant_resolver()
        .arg("resolve")
        .arg(input.path())
        .assert()
        .failure();
}

#[test]
fn test_resolve_missing_file() {
    plant_resolver()
        .args(["resolve", "/nonexistent/candidates.json"])
        .assert()
        .failure();
}

#[test]
fn test_rules_lists_in_order() {
    let output = plant_resolver()
        .arg("rules")
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Care rules (first match wins):"));
    let succulent = stdout.find("succulent_cactus").expect("succulent listed");
    let rose = stdout.find("rose").expect("rose rule listed");
    let default = stdout.find("default").expect("default rule listed");
    assert!(succulent < rose && rose < default);
}

#[test]
fn test_rules_show_profile() {
    plant_resolver()
        .args(["rules", "--show", "fern", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"rule_id\": \"fern\""));
}

#[test]
fn test_rules_show_unknown() {
    plant_resolver()
        .args(["rules", "--show", "orchid"])
        .assert()
        .failure();
}

#[test]
fn test_catalog_list_in_stock() {
    plant_resolver()
        .args(["catalog", "list", "--in-stock", "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("id\tname\tprice\tstock"))
        .stdout(predicate::str::contains("tulsi-plant"))
        .stdout(predicate::str::contains("golden-pothos").not());
}

#[test]
fn test_catalog_export_roundtrips_through_resolve() {
    let exported = NamedTempFile::with_suffix(".json").expect("Failed to create temp file");

    plant_resolver()
        .args(["catalog", "export", "--output"])
        .arg(exported.path())
        .assert()
        .success();

    let input = write_temp(TULSI_PAYLOAD);
    plant_resolver()
        .args(["resolve", "--catalog"])
        .arg(exported.path())
        .arg(input.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Product: Tulsi Plant"));
}
