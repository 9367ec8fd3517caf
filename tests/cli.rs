use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn northwind(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("northwind").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--config-dir")
        .arg(config_dir.path());
    cmd
}

#[test]
fn list_shows_sample_customers() {
    let dir = tempfile::tempdir().unwrap();
    northwind(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("ALFKI"))
        .stdout(predicate::str::contains("Alfreds Futterkiste"))
        .stdout(predicate::str::contains("BERGS"));
}

#[test]
fn no_seed_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    northwind(&dir)
        .args(["--no-seed", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No customers found."));
}

#[test]
fn config_file_disables_seeding() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"seed_sample_data": false}"#,
    )
    .unwrap();

    northwind(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No customers found."));
}

#[test]
fn update_of_unknown_customer_fails() {
    let dir = tempfile::tempdir().unwrap();
    northwind(&dir)
        .args(["update", "MANDA", "--country", "Germany"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Customer not found: MANDA"));
}

#[test]
fn update_without_fields_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    northwind(&dir)
        .args(["update", "ALFKI"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to update"));
}

#[test]
fn duplicate_create_reports_the_commit_error() {
    let dir = tempfile::tempdir().unwrap();
    northwind(&dir)
        .args(["create", "ALFKI", "Someone", "Somewhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn show_prints_one_customer() {
    let dir = tempfile::tempdir().unwrap();
    northwind(&dir)
        .args(["show", "AROUT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Thomas Hardy"))
        .stdout(predicate::str::contains("London"));
}

#[test]
fn shell_keeps_one_session() {
    let dir = tempfile::tempdir().unwrap();
    let script = "\
# a comment
create MANDA \"Nish Mandal\" \"Sparta Global\" --city Birmingham
update MANDA --contact Bob --country Germany --city Berlin --postal-code n25
selected
delete MANDA
selected
exit
list
";

    northwind(&dir)
        .args(["--no-seed", "shell"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Customer created: MANDA"))
        .stdout(predicate::str::contains("Customer updated: MANDA"))
        .stdout(predicate::str::contains("Germany"))
        .stdout(predicate::str::contains("n25"))
        .stdout(predicate::str::contains("Customer deleted: MANDA"))
        .stdout(predicate::str::contains("No customer selected."))
        .stdout(predicate::str::contains("No customers found.").not());
}

#[test]
fn shell_reports_errors_and_carries_on() {
    let dir = tempfile::tempdir().unwrap();
    northwind(&dir)
        .write_stdin("delete NOONE\ncreate \"\" x y\nlist\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Customer not found: NOONE"))
        .stderr(predicate::str::contains("customer id cannot be empty"))
        .stdout(predicate::str::contains("ALFKI"));
}

#[test]
fn shell_select_then_selected() {
    let dir = tempfile::tempdir().unwrap();
    northwind(&dir)
        .arg("shell")
        .write_stdin("select ANTON\nselected\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected: ANTON"))
        .stdout(predicate::str::contains("Antonio Moreno"));
}

#[test]
fn list_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let output = northwind(&dir).args(["list", "--json"]).output().unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["customer_id"], "ALFKI");
    assert_eq!(rows[0]["contact_name"], "Maria Anders");
}

#[test]
fn show_as_json_keeps_missing_fields_as_null() {
    let dir = tempfile::tempdir().unwrap();
    let output = northwind(&dir)
        .args(["--no-seed", "shell"])
        .write_stdin("create X Nish Acme\nshow X --json\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\"customer_id\": \"X\""));
    assert!(stdout.contains("\"postal_code\": null"));
}

#[test]
fn config_set_is_saved_and_used_next_run() {
    let dir = tempfile::tempdir().unwrap();
    northwind(&dir)
        .args(["config", "seed-sample-data", "false"])
        .assert()
        .success()
        .stdout(predicate::str::contains("seed-sample-data = false"));
    assert!(dir.path().join("config.json").exists());

    northwind(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No customers found."));

    northwind(&dir)
        .args(["config", "seed-sample-data"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn config_lists_every_key() {
    let dir = tempfile::tempdir().unwrap();
    northwind(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("seed-sample-data = true"))
        .stdout(predicate::str::contains("prompt = northwind> "))
        .stdout(predicate::str::contains("log-level = warn"));
}

#[test]
fn config_rejects_unknown_key_and_bad_bool() {
    let dir = tempfile::tempdir().unwrap();
    northwind(&dir)
        .args(["config", "colour", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown key colour"));
    northwind(&dir)
        .args(["config", "seed-sample-data", "maybe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("true or false"));
    assert!(!dir.path().join("config.json").exists());
}

#[test]
fn shell_sees_config_set_straight_away() {
    let dir = tempfile::tempdir().unwrap();
    northwind(&dir)
        .arg("shell")
        .write_stdin("config prompt \"nw$ \"\nconfig prompt\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("prompt = nw$ \nnw$ \n"));

    let saved = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(saved.contains("\"prompt\": \"nw$ \""));
}
