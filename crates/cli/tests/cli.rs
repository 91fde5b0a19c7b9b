//! End-to-end tests for the `darkroom` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn project() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let processes = dir.path().join(".darkroom/processes");
    fs::create_dir_all(&processes).expect("Failed to create processes dir");

    fs::write(
        processes.join("quick.yaml"),
        r#"name: Quick
steps:
  - long-name: Developer
    short-name: Dev
    seconds: 1
    tweakable: true
    light: N
  - long-name: Stop Bath
    short-name: Stop
    seconds: 30
    light: N
  - long-name: Rinse
    short-name: Rinse
    seconds: 1
    light: Y
"#,
    )
    .expect("Failed to write process file");

    fs::write(
        processes.join("broken.yaml"),
        "name: Broken\nsteps:\n  - long-name: Wash\n    short-name: Wash\n    seconds: 0\n    light: Y\n",
    )
    .expect("Failed to write process file");

    dir
}

fn darkroom(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("darkroom").expect("binary should build");
    cmd.arg("--root").arg(dir.path());
    cmd
}

#[test]
fn test_list_shows_processes_and_invalid_definitions() {
    let dir = project();

    darkroom(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quick"))
        .stdout(predicate::str::contains("3 steps"))
        .stdout(predicate::str::contains("Broken"))
        .stdout(predicate::str::contains("positive duration"));
}

#[test]
fn test_show_lists_steps() {
    let dir = project();

    darkroom(&dir)
        .args(["show", "quick"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Developer"))
        .stdout(predicate::str::contains("30 seconds"))
        .stdout(predicate::str::contains("tweakable"));
}

#[test]
fn test_show_unknown_process_fails() {
    let dir = project();

    darkroom(&dir)
        .args(["show", "Cyanotype"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No process named 'Cyanotype'"));
}

#[test]
fn test_run_rejects_tweak_of_fixed_step() {
    let dir = project();

    darkroom(&dir)
        .args(["run", "Quick", "--set", "Stop=10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not tweakable"));
}

#[test]
fn test_run_json_from_later_step() {
    let dir = project();

    darkroom(&dir)
        .args(["run", "Quick", "--from", "rinse", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type":"sessionStarted""#))
        .stdout(predicate::str::contains("Ready to start Quick rinse for 1 second."))
        .stdout(predicate::str::contains(r#""type":"sessionCompleted""#))
        .stdout(predicate::str::contains("developer").not());
}
