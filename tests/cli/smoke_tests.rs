use crate::common::{APP, Roster, SAMPLE, command};
use predicates::prelude::*;

#[test]
fn shows_help() {
    command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("license_count"))
        .stdout(predicate::str::contains("--app-id"));
}

#[test]
fn counts_sample_roster() {
    let roster = Roster::new();
    let csv = roster.write("sample.csv", SAMPLE);

    // user 1: 1 desktop + 1 laptop -> 1; user 2: 3 laptops -> 2
    command()
        .arg("--app-id")
        .arg(APP)
        .arg("--csv-file")
        .arg(&csv)
        .assert()
        .success()
        .stdout("Total number of licenses required: 3\n");
}

#[test]
fn reads_configuration_from_environment() {
    let roster = Roster::new();
    let csv = roster.write("sample.csv", SAMPLE);

    command()
        .env("APP_ID", APP)
        .env("CSV_FILE", &csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("required: 3"));
}

#[test]
fn flags_override_environment() {
    let roster = Roster::new();
    let csv = roster.write("sample.csv", SAMPLE);

    command()
        .env("APP_ID", "0")
        .env("CSV_FILE", &csv)
        .args(["--app-id", "9999"])
        .assert()
        .success()
        .stdout("Total number of licenses required: 1\n");
}

#[test]
fn half_even_rounding() {
    let roster = Roster::new();
    let csv = roster.write("sample.csv", SAMPLE);

    // a single leftover laptop rounds to 0 under half-even
    let csv2 = roster.write(
        "extra.csv",
        &format!("{}7,4,374,laptop,\n", std::fs::read_to_string(&csv).unwrap()),
    );

    command()
        .args(["--app-id", APP, "--rounding", "half-even"])
        .arg("--csv-file")
        .arg(&csv2)
        .assert()
        .success()
        .stdout("Total number of licenses required: 3\n");

    command()
        .args(["--app-id", APP])
        .arg("--csv-file")
        .arg(&csv2)
        .assert()
        .success()
        .stdout("Total number of licenses required: 4\n");
}

#[test]
fn json_output() {
    let roster = Roster::new();
    let csv = roster.write("sample.csv", SAMPLE);

    let output = command()
        .args(["--app-id", APP, "--format", "json"])
        .arg("--csv-file")
        .arg(&csv)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["app_id"], APP);
    assert_eq!(json["total_licenses"], 3);
    assert_eq!(json["users"].as_array().unwrap().len(), 2);
    assert_eq!(json["users"][1]["laptops"], 3);
}

#[test]
fn per_user_table() {
    let roster = Roster::new();
    let csv = roster.write("sample.csv", SAMPLE);

    command()
        .args(["--app-id", APP, "--per-user"])
        .arg("--csv-file")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("USER"))
        .stdout(predicate::str::ends_with("Total number of licenses required: 3\n"));
}

#[test]
fn header_row_option() {
    let roster = Roster::new();
    let csv = roster.write(
        "headed.csv",
        &format!("ComputerID,UserID,ApplicationID,ComputerType,Comment\n{SAMPLE}"),
    );

    command()
        .args(["--app-id", APP, "--has-headers"])
        .arg("--csv-file")
        .arg(&csv)
        .assert()
        .success()
        .stdout("Total number of licenses required: 3\n");
}

#[test]
fn verbose_logs_skipped_rows() {
    let roster = Roster::new();
    let csv = roster.write("sample.csv", SAMPLE);

    command()
        .args(["--app-id", APP, "-v"])
        .arg("--csv-file")
        .arg(&csv)
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping app id 9999"))
        .stderr(predicate::str::contains("Computer ID 2 already processed"));
}

#[test]
fn quiet_by_default() {
    let roster = Roster::new();
    let csv = roster.write("sample.csv", SAMPLE);

    command()
        .args(["--app-id", APP])
        .arg("--csv-file")
        .arg(&csv)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn empty_roster_needs_no_licenses() {
    let roster = Roster::new();
    let csv = roster.write("empty.csv", "");

    command()
        .args(["--app-id", APP])
        .arg("--csv-file")
        .arg(&csv)
        .assert()
        .success()
        .stdout("Total number of licenses required: 0\n");
}
