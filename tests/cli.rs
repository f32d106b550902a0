use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tally(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.env("TALLY_DATA_DIR", dir.path())
        .env_remove("TALLY_RECORDS_FILE");
    cmd
}

fn add(dir: &TempDir, year: &str, month: &str, income: &str, cost: &str) {
    tally(dir)
        .args([
            "add", "--year", year, "--month", month, "--income", income, "--cost", cost,
        ])
        .assert()
        .success();
}

#[test]
fn first_run_creates_empty_records_file() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No records found."));

    let records = fs::read_to_string(dir.path().join("data").join("income_cost.json")).unwrap();
    assert_eq!(records.trim(), "[]");
}

#[test]
fn repeated_month_entries_are_merged() {
    let dir = TempDir::new().unwrap();

    add(&dir, "2024", "March", "100", "50");
    tally(&dir)
        .args(["add", "-y", "2024", "-m", "3", "-i", "20", "-c", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Merged entry into existing record for March 2024"));

    let raw = fs::read_to_string(dir.path().join("data").join("income_cost.json")).unwrap();
    let records: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let records = records.as_array().unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["year"], 2024);
    assert_eq!(records[0]["month"], "March");
    assert_eq!(records[0]["income"].as_f64(), Some(120.0));
    assert_eq!(records[0]["cost"].as_f64(), Some(55.0));
}

#[test]
fn future_entries_are_rejected() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["add", "--year", "9999", "--month", "1", "--income", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot enter future date"));

    tally(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No records found."));
}

#[test]
fn negative_amounts_are_rejected() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["add", "--year", "2024", "--month", "1", "--cost=-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be negative"));
}

#[test]
fn balance_is_inclusive_of_target_month() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024", "1", "100", "40");
    add(&dir, "2024", "2", "200", "50");

    tally(&dir)
        .args(["balance", "--year", "2024", "--month", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance up to January 2024: 60.00"));

    tally(&dir)
        .args(["balance", "--year", "2024", "--month", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance up to February 2024: 210.00"));

    tally(&dir)
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current balance").and(predicate::str::contains("210.00")));
}

#[test]
fn balance_rejects_invalid_selectors() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024", "1", "100", "40");

    tally(&dir)
        .args(["balance", "--year", "2024", "--month", "13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid period selector"));

    tally(&dir)
        .args(["balance", "--year", "soon", "--month", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid period selector"));
}

#[test]
fn empty_ledger_reports_no_data() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .arg("analyze")
        .assert()
        .success()
        .stdout(predicate::str::contains("No data available for analysis."));

    tally(&dir)
        .arg("balance")
        .assert()
        .success()
        .stdout(predicate::str::contains("No data available for balance query."));

    tally(&dir)
        .arg("chart")
        .assert()
        .success()
        .stdout(predicate::str::contains("No data available to visualize."));

    tally(&dir)
        .args(["export", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records to export."));
}

#[test]
fn analyze_reports_extrema_and_yearly_net() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2023", "January", "100", "20");
    add(&dir, "2023", "December", "50", "10");
    add(&dir, "2024", "January", "10", "5");

    tally(&dir)
        .arg("analyze")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Month with the highest income: January 2023")
                .and(predicate::str::contains("Year with the highest cost: 2023"))
                .and(predicate::str::contains("Net balance for 2023: 120.00"))
                .and(predicate::str::contains("Net balance for 2024: 5.00")),
        );
}

#[test]
fn corrupt_records_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let records = dir.path().join("data").join("income_cost.json");
    fs::create_dir_all(records.parent().unwrap()).unwrap();
    fs::write(&records, "{ not valid").unwrap();

    tally(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Storage error"));

    assert_eq!(fs::read_to_string(&records).unwrap(), "{ not valid");
}

#[test]
fn records_file_can_be_overridden() {
    let dir = TempDir::new().unwrap();
    let custom = dir.path().join("elsewhere").join("ledger.json");

    tally(&dir)
        .args(["--file", custom.to_str().unwrap()])
        .args(["add", "--year", "2022", "--month", "5", "--income", "1"])
        .assert()
        .success();

    assert!(custom.exists());
    assert!(fs::read_to_string(&custom).unwrap().contains("\"May\""));
}

#[test]
fn export_writes_csv_with_summary() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024", "1", "100", "40");
    let output = dir.path().join("out.csv");

    tally(&dir)
        .args(["export", "--format", "csv", "--output", output.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Records have been exported"));

    let csv = fs::read_to_string(&output).unwrap();
    assert!(csv.contains("2024,January,100.00,40.00"));
    assert!(csv.contains("Net Balance,60.00"));
}

#[test]
fn audit_lists_record_changes() {
    let dir = TempDir::new().unwrap();
    add(&dir, "2024", "6", "10", "0");
    add(&dir, "2024", "6", "5", "0");

    tally(&dir)
        .args(["audit", "--limit", "5"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("CREATE June 2024")
                .and(predicate::str::contains("MERGE June 2024")),
        );
}

#[test]
fn oversize_and_doubled_sign_amounts_are_rejected() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["add", "--year", "2024", "--month", "1", "--income", "184467440737095517"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid income"));

    tally(&dir)
        .args(["add", "--year", "2024", "--month", "1", "--income=--5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid income"));

    tally(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No records found."));
}

#[test]
fn config_changes_are_persisted() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["config", "--currency", "$", "--audit", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings updated."));

    add(&dir, "2024", "1", "100", "40");

    tally(&dir)
        .args(["balance", "--year", "2024", "--month", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance up to January 2024: $60.00"));

    tally(&dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("No audit entries found."));
}
