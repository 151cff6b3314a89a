#![allow(deprecated)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin;
use predicates::prelude::*;
use sumbapp::store::fs::FileStore;
use tempfile::TempDir;

struct Sandbox {
    home: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            home: TempDir::new().unwrap(),
        }
    }

    fn sumb(&self) -> Command {
        let mut cmd = Command::new(cargo_bin("sumb"));
        cmd.env("SUMB_HOME", self.home.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .write_stdin("");
        cmd
    }

    fn create(&self, body: &str) {
        self.sumb()
            .args(["create", "-m", body])
            .assert()
            .success()
            .stdout(predicate::str::contains("Note created with ID:"));
    }
}

#[test]
fn create_list_search_show_delete() {
    let sandbox = Sandbox::new();

    sandbox
        .sumb()
        .args(["create", "buy", "milk"])
        .assert()
        .success()
        .stdout("Note created with ID: 1\n");
    sandbox.create("write report");
    sandbox.create("buy bread");

    sandbox
        .sumb()
        .args(["list", "2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Latest 2 notes\n"))
        .stdout(predicate::str::contains("[3]"))
        .stdout(predicate::str::contains("[2]"))
        .stdout(predicate::str::contains("[1]").not());

    sandbox
        .sumb()
        .args(["search", "buy"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Search results for 'buy'\n"))
        .stdout(predicate::str::contains("buy milk"))
        .stdout(predicate::str::contains("buy bread"))
        .stdout(predicate::str::contains("write report").not());

    sandbox
        .sumb()
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Note ID: 2\n"))
        .stdout(predicate::str::contains("write report"));

    sandbox
        .sumb()
        .args(["rm", "2"])
        .assert()
        .success()
        .stdout("Note with ID 2 deleted successfully.\n");

    sandbox
        .sumb()
        .args(["show", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Note not found"));
}

#[test]
fn piped_body_is_stored() {
    let sandbox = Sandbox::new();

    sandbox
        .sumb()
        .arg("create")
        .write_stdin("from a pipe\n")
        .assert()
        .success();

    sandbox
        .sumb()
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("from a pipe\n"));
}

#[test]
fn empty_input_cancels_create() {
    let sandbox = Sandbox::new();

    sandbox
        .sumb()
        .arg("create")
        .assert()
        .success()
        .stdout("Note creation canceled.\n");

    sandbox
        .sumb()
        .arg("list")
        .assert()
        .success()
        .stdout("No notes found.\n");
}

#[test]
fn edit_with_body_flag() {
    let sandbox = Sandbox::new();
    sandbox.create("meeting on tuesday");

    sandbox
        .sumb()
        .args(["edit", "1", "-m", "lunch on friday"])
        .assert()
        .success()
        .stdout("Note 1 updated.\n");

    sandbox
        .sumb()
        .args(["edit", "1", "-m", "lunch on friday"])
        .assert()
        .success()
        .stdout("No changes.\n");

    sandbox
        .sumb()
        .args(["search", "tuesday"])
        .assert()
        .success()
        .stdout("No notes found.\n");
}

#[test]
fn bad_ids_fail() {
    let sandbox = Sandbox::new();

    sandbox
        .sumb()
        .args(["show", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed note id"));

    sandbox
        .sumb()
        .args(["delete", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Note not found: 7"));
}

#[test]
fn blank_search_is_rejected() {
    let sandbox = Sandbox::new();

    sandbox
        .sumb()
        .args(["search", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Search keyword cannot be empty"));
}

#[test]
fn config_round_trip_changes_list_default() {
    let sandbox = Sandbox::new();
    for body in ["one", "two", "three"] {
        sandbox.create(body);
    }

    sandbox
        .sumb()
        .args(["config", "list-limit", "1"])
        .assert()
        .success()
        .stdout("list-limit set to 1\n");

    sandbox
        .sumb()
        .args(["config", "list-limit"])
        .assert()
        .success()
        .stdout("list-limit = 1\n");

    sandbox
        .sumb()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Latest 1 notes\n"))
        .stdout(predicate::str::contains("[3]"))
        .stdout(predicate::str::contains("[2]").not());

    sandbox
        .sumb()
        .args(["config", "bogus", "1"])
        .assert()
        .failure();
}

#[test]
fn doctor_and_reindex_on_a_healthy_store() {
    let sandbox = Sandbox::new();
    sandbox.create("alpha");
    sandbox.create("beta");

    sandbox
        .sumb()
        .arg("doctor")
        .assert()
        .success()
        .stdout("No inconsistencies found.\n");

    sandbox
        .sumb()
        .arg("reindex")
        .assert()
        .success()
        .stdout("Reindexed 2 note(s).\n");
}

#[test]
fn paths_point_into_the_home_without_creating_stores() {
    let sandbox = Sandbox::new();
    let home = sandbox.home.path().to_string_lossy().to_string();

    sandbox
        .sumb()
        .arg("paths")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("{}/sumb.db", home)))
        .stdout(predicate::str::contains(format!("{}/sumb.index", home)));

    assert!(!sandbox.home.path().join("sumb.db").exists());
    assert!(!sandbox.home.path().join("sumb.index").exists());
}

#[test]
fn config_works_while_the_store_is_locked() {
    let sandbox = Sandbox::new();
    let _held = FileStore::open(sandbox.home.path().join("sumb.db")).unwrap();

    sandbox
        .sumb()
        .args(["config", "wrap-width"])
        .assert()
        .success()
        .stdout("wrap-width = 50\n");

    sandbox
        .sumb()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Storage unavailable"));
}

#[test]
fn overlong_body_is_rejected() {
    let sandbox = Sandbox::new();
    let body = "x".repeat(4097);

    sandbox
        .sumb()
        .args(["create", "-m", &body])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Note is too long"));

    sandbox
        .sumb()
        .arg("list")
        .assert()
        .success()
        .stdout("No notes found.\n");
}
