use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command against a scratch database
fn wl_cmd(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wl").expect("Failed to find wl binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

fn save_new_year(db_path: &Path) {
    wl_cmd(db_path)
        .args([
            "save",
            "holiday",
            "--date",
            "2025-01-01",
            "--name",
            "New Year's Day",
            "--country-name",
            "Egypt",
        ])
        .assert()
        .success();
}

#[test]
fn test_cli_default_command_shows_empty_state() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wl_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No Saved Plans Yet"))
        .stdout(predicate::str::contains(
            "Start exploring and save holidays, events, or long weekends you like!",
        ));
}

#[test]
fn test_cli_save_holiday() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wl_cmd(&db_path)
        .args([
            "save",
            "holiday",
            "--date",
            "2025-01-01",
            "--name",
            "New Year's Day",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Holiday saved to your plans!"))
        .stdout(predicate::str::contains("New Year's Day"))
        .stdout(predicate::str::contains("- Date: 2025-01-01"))
        .stdout(predicate::str::contains("- Country: EG"));
}

#[test]
fn test_cli_duplicate_save_reports_already_saved() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    save_new_year(&db_path);

    wl_cmd(&db_path)
        .args([
            "save",
            "holiday",
            "--date",
            "2025-01-01",
            "--name",
            "Another name for the same day",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Holiday '2025-01-01' is already saved"));

    wl_cmd(&db_path)
        .arg("counts")
        .assert()
        .success()
        .stdout(predicate::str::contains("- All: 1"))
        .stdout(predicate::str::contains("- Holidays: 1"));
}

#[test]
fn test_cli_list_with_filter() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    save_new_year(&db_path);

    wl_cmd(&db_path)
        .args([
            "save",
            "event",
            "--title",
            "Music Night in Cairo",
            "--date",
            "Sat, Mar 1",
            "--location",
            "Cairo Opera House",
            "--category",
            "Music",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Event saved to your plans!"));

    wl_cmd(&db_path)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New Year's Day"))
        .stdout(predicate::str::contains("Music Night in Cairo"));

    wl_cmd(&db_path)
        .args(["list", "--filter", "event"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Music Night in Cairo"))
        .stdout(predicate::str::contains("New Year's Day").not());

    wl_cmd(&db_path)
        .args(["list", "--filter", "longweekend"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No Long Weekend Plans Yet"));
}

#[test]
fn test_cli_list_rejects_unknown_filter() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wl_cmd(&db_path)
        .args(["list", "--filter", "cruise"])
        .assert()
        .failure();
}

#[test]
fn test_cli_toggle_saves_then_removes() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let toggle = [
        "toggle",
        "long-weekend",
        "--title",
        "New Year Break",
        "--dates",
        "Jan 1 - Jan 4",
        "--duration",
        "4 days",
    ];

    wl_cmd(&db_path)
        .args(toggle)
        .assert()
        .success()
        .stdout(predicate::str::contains("Long Weekend saved to your plans!"));

    wl_cmd(&db_path)
        .args(["contains", "longweekend", "New Year Break"])
        .assert()
        .success()
        .stdout(predicate::str::diff("saved\n"));

    wl_cmd(&db_path)
        .args(toggle)
        .assert()
        .success()
        .stdout(predicate::str::contains("Long Weekend removed from plans"));

    wl_cmd(&db_path)
        .args(["contains", "longweekend", "New Year Break"])
        .assert()
        .success()
        .stdout(predicate::str::diff("not saved\n"));
}

#[test]
fn test_cli_remove_by_id() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    let output = wl_cmd(&db_path)
        .args([
            "save",
            "event",
            "--title",
            "Food Festival",
            "--date",
            "Fri, Apr 4",
            "--location",
            "Zamalek",
        ])
        .output()
        .expect("Failed to run wl");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let id = stdout
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .and_then(|header| header.split('.').next())
        .expect("plan header in output")
        .to_string();

    wl_cmd(&db_path)
        .args(["remove", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Plan {id} deleted successfully"
        )));

    wl_cmd(&db_path)
        .args(["remove", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("No saved plan with ID {id}")));
}

#[test]
fn test_cli_event_category_defaults_to_general() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wl_cmd(&db_path)
        .args([
            "save",
            "event",
            "--title",
            "Street Art Walk",
            "--date",
            "Sun, Mar 2",
            "--location",
            "Downtown",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Category: General"));
}

#[test]
fn test_cli_clear_removes_everything() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    save_new_year(&db_path);

    wl_cmd(&db_path)
        .arg("clear")
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: All plans cleared"));

    wl_cmd(&db_path)
        .arg("counts")
        .assert()
        .success()
        .stdout(predicate::str::contains("- All: 0"));
}

#[test]
fn test_cli_slots_are_separate() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    save_new_year(&db_path);

    wl_cmd(&db_path)
        .args(["--slot", "second_trip", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No Saved Plans Yet"));
}

#[test]
fn test_cli_country_and_city_are_recorded() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wl_cmd(&db_path)
        .args([
            "--country",
            "FR",
            "--city",
            "Paris",
            "save",
            "long-weekend",
            "--title",
            "Bastille Day Break",
            "--dates",
            "Jul 12 - Jul 14",
            "--duration",
            "3 days",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Paris"));
}
