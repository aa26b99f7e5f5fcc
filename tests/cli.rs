use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const BUNDLE: &str = r#"{
    "transactions": [
        {"id": 1, "date": "2023-12-05", "description": "Salary", "category": 1, "type": "income", "amount": "1000.00"},
        {"id": 2, "date": "2023-12-18", "description": "Groceries", "category": 2, "type": "expense", "amount": "500.00"},
        {"id": 3, "date": "2024-01-05", "description": "Salary", "category": 1, "type": "income", "amount": "1200.00"},
        {"id": 4, "date": "2024-01-12", "description": "Big grocery run", "category": 2, "type": "expense", "amount": "360.00"},
        {"id": 5, "date": "2024-01-20", "description": "Cinema", "type": "expense", "amount": 24.5}
    ],
    "categories": [
        {"id": 1, "name": "Salary", "type": "IN"},
        {"id": 2, "name": "Groceries", "type": "EX"}
    ],
    "budgets": [
        {"id": 1, "category": 2, "month": "2024-01-01", "amount": "300.00"},
        {"id": 2, "category": 2, "month": "2023-12-01", "amount": "600.00"}
    ],
    "goals": [
        {"id": 1, "title": "Emergency fund", "target_amount": "1000.00", "current_amount": "250.00", "deadline": "2024-12-31"},
        {"id": 2, "title": "Concert", "target_amount": "150.00", "current_amount": "40.00", "deadline": "2023-11-30"}
    ]
}"#;

struct Fixture {
    home: TempDir,
    bundle: PathBuf,
}

fn fixture(bundle: &str) -> Fixture {
    let home = TempDir::new().unwrap();
    let path = home.path().join("snapshot.json");
    fs::write(&path, bundle).unwrap();
    Fixture { home, bundle: path }
}

impl Fixture {
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("finboard").unwrap();
        cmd.env("FINBOARD_DATA_DIR", self.home.path().join("config"))
            .env_remove("RUST_LOG")
            .arg("--snapshot")
            .arg(&self.bundle);
        cmd
    }
}

#[test]
fn dashboard_shows_monthly_summary() {
    let fx = fixture(BUNDLE);
    fx.cmd()
        .args(["dashboard", "--as-of", "2024-01-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dashboard - 2024-01"))
        .stdout(predicate::str::contains("$1200.00"))
        .stdout(predicate::str::contains("↑ 20.0%"))
        .stdout(predicate::str::contains("Big grocery run"))
        .stdout(predicate::str::contains("over budget"))
        .stdout(predicate::str::contains("Emergency fund"));
}

#[test]
fn budget_list_filters_by_month() {
    let fx = fixture(BUNDLE);
    fx.cmd()
        .args(["budget", "list", "--month", "2023-12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budgets - 2023-12"))
        .stdout(predicate::str::contains("$600.00"))
        .stdout(predicate::str::contains("On Track"))
        .stdout(predicate::str::contains("Over Budget").not());
}

#[test]
fn budget_list_exports_csv() {
    let fx = fixture(BUNDLE);
    let out = fx.home.path().join("budgets.csv");
    fx.cmd()
        .args(["budget", "list", "--output"])
        .arg(&out)
        .assert()
        .success();

    let csv = fs::read_to_string(&out).unwrap();
    assert!(csv.starts_with("Budget ID,Month"));
    assert!(csv.contains("1,2024-01,2,Groceries,300.00,360.00,0.00,0.00,120.00,true"));
}

#[test]
fn budget_show_unknown_id_fails() {
    let fx = fixture(BUNDLE);
    fx.cmd()
        .args(["budget", "show", "bud-99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Budget not found: bud-99"));
}

#[test]
fn goal_list_marks_overdue() {
    let fx = fixture(BUNDLE);
    fx.cmd()
        .args(["goal", "list", "--as-of", "2024-01-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Overdue"))
        .stdout(predicate::str::contains("In Progress"))
        .stdout(predicate::str::contains("0 of 2 goals completed"));
}

#[test]
fn goal_show_details() {
    let fx = fixture(BUNDLE);
    fx.cmd()
        .args(["goal", "show", "1", "--as-of", "2024-01-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved:     $250.00 of $1000.00"))
        .stdout(predicate::str::contains("To go:     $750.00"));
}

#[test]
fn transaction_list_filters() {
    let fx = fixture(BUNDLE);
    fx.cmd()
        .args(["transaction", "list", "--type", "expense", "--search", "GROCER"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Big grocery run"))
        .stdout(predicate::str::contains("Cinema").not())
        .stdout(predicate::str::contains("Expenses: $860.00"));
}

#[test]
fn export_json_to_stdout() {
    let fx = fixture(BUNDLE);
    let output = fx
        .cmd()
        .args(["export", "--format", "json", "--as-of", "2024-01-31"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["reference_date"], "2024-01-31");
    assert_eq!(value["metadata"]["transaction_count"], 5);
    assert_eq!(value["summary"]["monthly"]["income_change_percent"], 20.0);
    assert_eq!(value["summary"]["goal_overview"]["total_goals"], 2);
}

#[test]
fn lenient_mode_skips_bad_records() {
    let fx = fixture(
        r#"{"transactions": [
            {"id": 1, "date": "2024-01-05", "type": "income", "amount": "100.00"},
            {"id": 2, "date": "not a date", "type": "expense", "amount": "5.00"}
        ]}"#,
    );
    fx.cmd()
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Income: $100.00"));
}

#[test]
fn strict_mode_rejects_bad_records() {
    let fx = fixture(
        r#"{"transactions": [
            {"id": 2, "date": "not a date", "type": "expense", "amount": "5.00"}
        ]}"#,
    );
    fx.cmd()
        .args(["--strict", "transaction", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn missing_snapshot_fails() {
    let home = TempDir::new().unwrap();
    Command::cargo_bin("finboard")
        .unwrap()
        .env("FINBOARD_DATA_DIR", home.path())
        .args(["--snapshot"])
        .arg(home.path().join("nope.json"))
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn init_then_read_empty_data_dir() {
    let home = TempDir::new().unwrap();
    let base = home.path().join("finboard");

    Command::cargo_bin("finboard")
        .unwrap()
        .env("FINBOARD_DATA_DIR", &base)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(base.join("config.json").exists());
    assert!(base.join("data").is_dir());

    Command::cargo_bin("finboard")
        .unwrap()
        .env("FINBOARD_DATA_DIR", &base)
        .args(["dashboard", "--as-of", "2024-01-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions yet."));

    Command::cargo_bin("finboard")
        .unwrap()
        .env("FINBOARD_DATA_DIR", &base)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized:       true"));
}
