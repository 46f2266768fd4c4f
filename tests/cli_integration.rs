use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn rolodex(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rolodex").unwrap();
    cmd.env("ROLODEX_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn fresh_install_lists_sample_contacts() {
    let home = tempfile::tempdir().unwrap();

    rolodex(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hans Muster"))
        .stdout(predicate::str::contains("Cornelia Meier"));
}

#[test]
fn add_requires_a_file() {
    let home = tempfile::tempdir().unwrap();

    rolodex(home.path())
        .args(["add", "Anna", "Frei"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No address book file selected"));
}

#[test]
fn add_edit_delete_round_trip_through_file() {
    let home = tempfile::tempdir().unwrap();
    let book = home.path().join("book.xml");
    let book_arg = book.to_str().unwrap();

    rolodex(home.path())
        .args(["--file", book_arg, "add", "Anna", "Frei"])
        .args(["--postal-code", "3600", "--city", "Thun"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added (1): Anna Frei"));

    let saved = fs::read_to_string(&book).unwrap();
    assert!(saved.contains("<postalCode>3600</postalCode>"));

    // The file is remembered now, so --file is no longer needed.
    rolodex(home.path())
        .args(["edit", "1", "--birthday", "1990-05-17"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact updated (1): Anna Frei"));

    rolodex(home.path())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1990-05-17"))
        .stdout(predicate::str::contains("Thun"));

    rolodex(home.path())
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact deleted (1): Anna Frei"));

    rolodex(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found."));
}

#[test]
fn invalid_value_leaves_file_untouched() {
    let home = tempfile::tempdir().unwrap();
    let book = home.path().join("book.xml");
    let book_arg = book.to_str().unwrap();

    rolodex(home.path())
        .args(["--file", book_arg, "add", "Anna", "Frei"])
        .assert()
        .success();
    let before = fs::read(&book).unwrap();

    rolodex(home.path())
        .args(["edit", "1", "--postal-code", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("postalCode"));

    assert_eq!(fs::read(&book).unwrap(), before);
}

#[test]
fn malformed_file_is_reported_with_its_path() {
    let home = tempfile::tempdir().unwrap();
    let book = home.path().join("broken.xml");
    fs::write(&book, "<people/>").unwrap();

    rolodex(home.path())
        .args(["--file", book.to_str().unwrap(), "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed document"))
        .stderr(predicate::str::contains("broken.xml"));
}

#[test]
fn save_remembers_and_path_forgets() {
    let home = tempfile::tempdir().unwrap();
    let book = home.path().join("samples.xml");
    let book_arg = book.to_str().unwrap();

    rolodex(home.path())
        .args(["save", book_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 4 contacts"));

    rolodex(home.path())
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains(book_arg));

    rolodex(home.path())
        .args(["path", "--forget"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Forgot"));

    rolodex(home.path())
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("No file remembered yet."));
}

#[test]
fn missing_remembered_file_warns_and_falls_back() {
    let home = tempfile::tempdir().unwrap();
    let book = home.path().join("gone.xml");

    rolodex(home.path())
        .args(["save", book.to_str().unwrap()])
        .assert()
        .success();
    fs::remove_file(&book).unwrap();

    rolodex(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not load data"))
        .stdout(predicate::str::contains("Hans Muster"));
}

#[test]
fn config_disables_samples() {
    let home = tempfile::tempdir().unwrap();

    rolodex(home.path())
        .args(["config", "seed-samples", "false"])
        .assert()
        .success();

    rolodex(home.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("seed-samples = false"));

    rolodex(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found."));
}

#[test]
fn corrupt_preferences_warn_and_can_be_reset() {
    let home = tempfile::tempdir().unwrap();
    fs::write(home.path().join("prefs.json"), "{\"filePath\": ").unwrap();

    rolodex(home.path())
        .args(["path", "--forget"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Preferences error"))
        .stdout(predicate::str::contains("No file was remembered."));

    rolodex(home.path())
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("Preferences error").not())
        .stdout(predicate::str::contains("No file remembered yet."));
}

#[test]
fn corrupt_config_falls_back_to_defaults() {
    let home = tempfile::tempdir().unwrap();
    fs::write(home.path().join("config.json"), "not json").unwrap();

    rolodex(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("using defaults"))
        .stdout(predicate::str::contains("Hans Muster"));

    rolodex(home.path())
        .args(["config", "restore-last", "yes"])
        .assert()
        .success();

    rolodex(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("using defaults").not());
}

#[test]
fn missing_index_names_the_contact_number() {
    let home = tempfile::tempdir().unwrap();
    let book = home.path().join("book.xml");

    rolodex(home.path())
        .args(["save", book.to_str().unwrap()])
        .assert()
        .success();

    rolodex(home.path())
        .args(["delete", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No contact #9 (the address book has 4)"));
}
