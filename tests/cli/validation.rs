use crate::common::{APP, Roster, command};
use predicates::prelude::*;

#[test]
fn app_id_is_reported_first() {
    command()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("app ID is missing"))
        .stderr(predicate::str::contains("CSV File").not());
}

#[test]
fn csv_file_missing() {
    command()
        .args(["--app-id", APP])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CSV File is missing"));
}

#[test]
fn empty_csv_file_env_is_missing() {
    command()
        .env("CSV_FILE", "")
        .args(["--app-id", APP])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("CSV File is missing"));
}

#[test]
fn empty_csv_file_flag_is_missing() {
    command()
        .args(["--app-id", APP, "--csv-file", ""])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("CSV File is missing"));
}

#[test]
fn empty_app_id_env_is_missing() {
    command()
        .env("APP_ID", "")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("app ID is missing"));
}

#[test]
fn wrong_extension() {
    command()
        .args(["--app-id", APP, "--csv-file", "test.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("file should have .csv extension"));
}

#[test]
fn file_does_not_exist() {
    let roster = Roster::new();
    command()
        .args(["--app-id", APP])
        .arg("--csv-file")
        .arg(roster.path().join("test.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("file does not exists"));
}

#[test]
fn directory_named_csv_is_a_read_error() {
    let roster = Roster::new();
    let dir = roster.path().join("d.csv");
    std::fs::create_dir(&dir).unwrap();

    command()
        .args(["--app-id", APP])
        .arg("--csv-file")
        .arg(&dir)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read file"))
        .stderr(predicate::str::contains("decode").not());
}

#[test]
fn undecodable_file_fails_the_run() {
    let roster = Roster::new();
    let csv = roster.path().join("bad.csv");
    std::fs::write(&csv, b"1,1,374,lap\xfftop,x\n").unwrap();

    command()
        .args(["--app-id", APP])
        .arg("--csv-file")
        .arg(&csv)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to decode CSV"));
}

#[test]
fn unknown_rounding_is_a_usage_error() {
    command()
        .args(["--app-id", APP, "--rounding", "ceil"])
        .assert()
        .failure()
        .code(2);
}
