use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn money_exits_cleanly_and_saves() {
    let temp = TempDir::new().unwrap();

    Command::cargo_bin("money")
        .unwrap()
        .env("DESKBOOK_HOME", temp.path())
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("MONEY MANAGER"))
        .stdout(predicate::str::contains("Data saved"));

    assert!(temp.path().join("money.dat").exists());
}

#[test]
fn money_persists_between_runs() {
    let temp = TempDir::new().unwrap();

    Command::cargo_bin("money")
        .unwrap()
        .env("DESKBOOK_HOME", temp.path())
        .write_stdin("1\n1\n100\nSalary\nJuly pay\n4\n")
        .assert()
        .success();

    Command::cargo_bin("money")
        .unwrap()
        .env("DESKBOOK_HOME", temp.path())
        .write_stdin("2\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"));
}

#[test]
fn money_reports_invalid_menu_input() {
    let temp = TempDir::new().unwrap();

    Command::cargo_bin("money")
        .unwrap()
        .env("DESKBOOK_HOME", temp.path())
        .write_stdin("abc\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input"));
}

#[test]
fn tasks_exits_cleanly() {
    let temp = TempDir::new().unwrap();

    Command::cargo_bin("tasks")
        .unwrap()
        .env("DESKBOOK_HOME", temp.path())
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("TASK MANAGER"));

    assert!(temp.path().join("tasks.dat").exists());
}

#[test]
fn contacts_exits_cleanly() {
    let temp = TempDir::new().unwrap();

    Command::cargo_bin("contacts")
        .unwrap()
        .env("DESKBOOK_HOME", temp.path())
        .write_stdin("6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("CONTACT BOOK"));

    assert!(temp.path().join("contacts.dat").exists());
}

#[test]
fn contacts_aborts_on_a_corrupt_data_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("contacts.dat"), 100_000u32.to_le_bytes()).unwrap();

    Command::cargo_bin("contacts")
        .unwrap()
        .env("DESKBOOK_HOME", temp.path())
        .write_stdin("6\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt"));
}
