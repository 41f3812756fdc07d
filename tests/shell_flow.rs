use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn courier(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("courier").unwrap();
    cmd.env("COURIER_HOME", home.path());
    cmd
}

#[test]
fn test_first_run_starts_with_sample_data() {
    let home = TempDir::new().unwrap();

    courier(&home)
        .write_stdin("list\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("starting with sample data"))
        .stdout(predicate::str::contains("Alex Yeoh"))
        .stdout(predicate::str::contains("Bernice Yu"))
        .stdout(predicate::str::contains("[corporate]"))
        .stdout(predicate::str::contains("[personal]"))
        .stdout(predicate::str::contains("Listing 3 clients and 2 deliveries"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_added_client_is_there_on_the_next_run() {
    let home = TempDir::new().unwrap();

    courier(&home)
        .write_stdin("add-client n/Dana Soh p/90001111 e/dana@example.com a/5 Dover Rise\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("New client added: Dana Soh"));

    courier(&home)
        .write_stdin("list\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dana Soh"))
        .stdout(predicate::str::contains("Listing 4 clients and 2 deliveries"))
        .stdout(predicate::str::contains("starting with sample data").not());
}

#[test]
fn test_bad_input_keeps_the_shell_alive() {
    let home = TempDir::new().unwrap();

    courier(&home)
        .write_stdin("frobnicate\nadd-client n/Dana\nlist\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command"))
        .stdout(predicate::str::contains("Invalid command format."))
        .stdout(predicate::str::contains("Usage: add-client"))
        .stdout(predicate::str::contains("Listing 3 clients and 2 deliveries"));
}

#[test]
fn test_constraint_violations_report_the_field_rule() {
    let home = TempDir::new().unwrap();

    courier(&home)
        .write_stdin(
            "add-client n/Dana Soh p/90x e/dana@example.com a/5 Dover Rise\nexit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Phone numbers should only contain digits",
        ))
        .stdout(predicate::str::contains("New client added").not());
}

#[test]
fn test_delivery_flow_add_find_mark() {
    let home = TempDir::new().unwrap();

    courier(&home)
        .write_stdin(
            "add-delivery n/Alex Yeoh d/2/12/2026 tm/1800 r/Fragile vase c/20\n\
             find-delivery 2/12/2026\n\
             mark-delivery 3\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "New delivery added for Alex Yeoh: 2 December 2026 1800hrs",
        ))
        .stdout(predicate::str::contains("1 delivery found on 2/12/2026"))
        .stdout(predicate::str::contains(
            "Marked delivery as delivered: Alex Yeoh",
        ))
        .stdout(predicate::str::contains("✓"));
}

#[test]
fn test_find_delivery_matches_the_date_as_typed() {
    let home = TempDir::new().unwrap();

    // The sample book has a delivery entered as 14/2/2026.
    courier(&home)
        .write_stdin("find-delivery 14/02/2026\nfind-delivery 14/2/2026\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 deliveries found on 14/02/2026"))
        .stdout(predicate::str::contains("1 delivery found on 14/2/2026"));
}

#[test]
fn test_undo_restores_within_a_session() {
    let home = TempDir::new().unwrap();

    courier(&home)
        .write_stdin("delete 1\nundo\nlist\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted client: Alex Yeoh"))
        .stdout(predicate::str::contains("Also removed 1 delivery"))
        .stdout(predicate::str::contains("Undid the last change"))
        .stdout(predicate::str::contains("Listing 3 clients and 2 deliveries"));
}

#[test]
fn test_undo_history_does_not_survive_a_restart() {
    let home = TempDir::new().unwrap();

    courier(&home)
        .write_stdin("delete 1\nexit\n")
        .assert()
        .success();

    courier(&home)
        .write_stdin("undo\nlist\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No more undo history"))
        .stdout(predicate::str::contains("Listing 2 clients and 1 delivery"));
}

#[test]
fn test_corrupt_data_file_starts_empty_with_a_warning() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("book.json"), "{ not json").unwrap();

    courier(&home)
        .write_stdin("list\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not read"))
        .stdout(predicate::str::contains("The delivery book is empty"));
}

#[test]
fn test_data_file_flag_overrides_the_default_location() {
    let home = TempDir::new().unwrap();
    let custom = home.path().join("elsewhere").join("my-book.json");

    courier(&home)
        .arg("--data-file")
        .arg(&custom)
        .write_stdin("clear\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delivery book has been cleared"));

    let raw = std::fs::read_to_string(&custom).unwrap();
    assert!(raw.contains("\"persons\""));
    assert!(!home.path().join("book.json").exists());
}
