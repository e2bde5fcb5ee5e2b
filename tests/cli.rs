//! End-to-end tests for the tally binary
//!
//! Each test runs against its own data directory via TALLY_DATA_DIR.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tally(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.env("TALLY_DATA_DIR", dir.path());
    cmd
}

#[test]
fn dashboard_on_fresh_install_shows_empty_state() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses yet"));
}

#[test]
fn add_then_list_shows_the_record() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["add", "10.50", "--category", "Food", "--date", "2024-01-15", "--notes", "lunch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added"));

    tally(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-15"))
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("$10.50"))
        .stdout(predicate::str::contains("lunch"));
}

#[test]
fn dashboard_aggregates_across_categories_and_dates() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["add", "10.00", "--category", "Food", "--date", "2024-01-01"])
        .assert()
        .success();
    tally(&dir)
        .args(["add", "5.00", "--category", "Transport", "--date", "2024-01-01"])
        .assert()
        .success();
    tally(&dir)
        .args(["add", "20.00", "--category", "Food", "--date", "2024-01-02"])
        .assert()
        .success();

    tally(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Spent: $35.00"))
        .stdout(predicate::str::contains("$30.00"))
        .stdout(predicate::str::contains("$5.00"))
        .stdout(predicate::str::contains("2024-01-01"))
        .stdout(predicate::str::contains("2024-01-02"));
}

#[test]
fn negative_amount_is_rejected_and_ledger_untouched() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["add", "-5", "--category", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error for amount"));

    tally(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses yet"));
}

#[test]
fn malformed_amount_is_rejected_not_a_crash() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["add", "1.\u{20ac}5", "--category", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error for amount"));

    tally(&dir)
        .args(["add", "10.999", "--category", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error for amount"));
}

#[test]
fn unknown_category_names_the_field() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["add", "5.00", "--category", "Groceries"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error for category"));
}

#[test]
fn zero_amount_record_is_accepted() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["add", "0", "--category", "Other", "--date", "2024-01-01"])
        .assert()
        .success();

    tally(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Spent: $0.00"))
        .stdout(predicate::str::contains("Records:     1"));
}

#[test]
fn clear_empties_the_ledger() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["add", "10.00", "--category", "Bills", "--date", "2024-01-01"])
        .assert()
        .success();

    tally(&dir)
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("All expenses cleared"));

    tally(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses yet"));
}

#[test]
fn archive_moves_records_aside() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["add", "10.00", "--category", "Bills", "--date", "2024-01-01"])
        .assert()
        .success();

    tally(&dir)
        .arg("archive")
        .assert()
        .success()
        .stdout(predicate::str::contains("Archived to"));

    tally(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses yet"));

    // Archiving again has nothing to do
    tally(&dir)
        .arg("archive")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to archive"));
}

#[test]
fn plan_renders_allocations() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args([
            "plan",
            "--name",
            "Greg",
            "--income",
            "4788",
            "--fixed",
            "400",
            "--subscriptions",
            "80",
            "--rent",
            "1440",
            "--utilities",
            "300",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Greg's Monthly Budget"))
        .stdout(predicate::str::contains("Net Leftover:   $3438.00"))
        .stdout(predicate::str::contains("Savings (40%)"));
}

#[test]
fn plan_with_partner_renders_household_view() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args([
            "plan",
            "--name",
            "Greg",
            "--income",
            "4788",
            "--rent",
            "1440",
            "--utilities",
            "300",
            "--partner-name",
            "Tyler",
            "--partner-income",
            "4200",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Greg's Monthly Budget"))
        .stdout(predicate::str::contains("Tyler's Monthly Budget"))
        .stdout(predicate::str::contains("Combined Household Budget"))
        .stdout(predicate::str::contains("Combined Income: $8988.00"))
        .stdout(predicate::str::contains("Savings Rate"));
}

#[test]
fn corrupt_ledger_is_a_storage_error() {
    let dir = TempDir::new().unwrap();

    let data_dir = dir.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join("expenses.csv"), "Wrong,Header,Row,Here\n").unwrap();

    tally(&dir)
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Storage error"));
}

#[test]
fn config_shows_paths_and_settings() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ledger file"))
        .stdout(predicate::str::contains("expenses.csv"))
        .stdout(predicate::str::contains("Paychecks per month: 2"));
}
