use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn vetbook_cmd() -> Command {
    let mut cmd = Command::cargo_bin("vetbook").expect("Failed to find vetbook binary");
    cmd.arg("--no-color");
    cmd
}

/// Helper that points the command at an empty session file so it behaves
/// like a logged-out user regardless of the host environment.
fn logged_out_cmd(temp_dir: &TempDir) -> Command {
    let session_path = temp_dir.path().join("session.json");
    let mut cmd = vetbook_cmd();
    cmd.args(["--session-file", session_path.to_str().unwrap()]);
    cmd
}

#[test]
fn test_cli_slots_lists_every_half_hour() {
    let output = vetbook_cmd()
        .arg("slots")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let output_str = String::from_utf8(output).expect("Invalid UTF-8");
    let lines: Vec<&str> = output_str.lines().collect();
    assert_eq!(lines.len(), 20);
    assert_eq!(lines[0], "08:00");
    assert_eq!(lines[19], "17:30");
}

#[test]
fn test_cli_pets_list_requires_login() {
    let temp_dir = create_cli_test_environment();

    logged_out_cmd(&temp_dir)
        .args(["pets", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn test_cli_dashboard_requires_login() {
    let temp_dir = create_cli_test_environment();

    logged_out_cmd(&temp_dir)
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn test_cli_book_requires_login() {
    let temp_dir = create_cli_test_environment();

    logged_out_cmd(&temp_dir)
        .args([
            "book", "--pet", "1", "--service", "grooming", "--date", "2025-06-01", "--time",
            "09:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn test_cli_logout_without_session_succeeds() {
    let temp_dir = create_cli_test_environment();

    logged_out_cmd(&temp_dir)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out."));
}

#[test]
fn test_cli_book_rejects_unknown_service() {
    let temp_dir = create_cli_test_environment();

    logged_out_cmd(&temp_dir)
        .args([
            "book", "--pet", "1", "--service", "massage", "--date", "2025-06-01", "--time",
            "09:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_cli_book_rejects_malformed_date() {
    let temp_dir = create_cli_test_environment();

    logged_out_cmd(&temp_dir)
        .args([
            "book", "--pet", "1", "--service", "grooming", "--date", "01/06/2025", "--time",
            "09:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected YYYY-MM-DD"));
}

#[test]
fn test_cli_book_rejects_malformed_time() {
    let temp_dir = create_cli_test_environment();

    logged_out_cmd(&temp_dir)
        .args([
            "book", "--pet", "1", "--service", "grooming", "--date", "2025-06-01", "--time",
            "9 am",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected HH:MM"));
}

#[test]
fn test_cli_calendar_rejects_malformed_month() {
    let temp_dir = create_cli_test_environment();

    logged_out_cmd(&temp_dir)
        .args(["calendar", "--month", "June"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected YYYY-MM"));
}

#[test]
fn test_cli_login_against_unreachable_server() {
    let temp_dir = create_cli_test_environment();

    logged_out_cmd(&temp_dir)
        .args([
            "--server-url",
            "http://127.0.0.1:1",
            "login",
            "--email",
            "owner@example.com",
            "--password",
            "Passw0rd!",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot connect to the server"));
}

#[test]
fn test_cli_register_validates_password_offline() {
    let temp_dir = create_cli_test_environment();

    // Fails the client-side form checks before any request is sent
    logged_out_cmd(&temp_dir)
        .args([
            "--server-url",
            "http://127.0.0.1:1",
            "register",
            "--name",
            "Sam",
            "--email",
            "sam@example.com",
            "--password",
            "short",
            "--confirm-password",
            "short",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("password"));
}

#[test]
fn test_cli_help_lists_commands() {
    vetbook_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("book"))
        .stdout(predicate::str::contains("calendar"))
        .stdout(predicate::str::contains("slots"));
}

#[test]
fn test_cli_book_requires_pet_flag() {
    let temp_dir = create_cli_test_environment();

    logged_out_cmd(&temp_dir)
        .args([
            "book", "--service", "grooming", "--date", "2025-06-01", "--time", "09:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--pet"));
}
