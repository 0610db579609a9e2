mod common;

use common::{numbered, numbered_except, TestEnv, DASHBOARD};
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn no_arguments_edits_dashboard_and_confirms() {
    let env = TestEnv::new();
    env.write(DASHBOARD, &numbered(600));

    env.cmd()
        .assert()
        .success()
        .stdout("Lines 550-562 removed successfully\n");

    assert_eq!(env.read(DASHBOARD), numbered_except(600, 550..=562));
}

#[test]
fn missing_target_fails_without_confirmation() {
    let env = TestEnv::new();

    env.cmd()
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(contains("failed to read").and(contains("Dashboard.tsx")));
}

#[test]
fn non_utf8_target_is_rejected_and_left_alone() {
    let env = TestEnv::new();
    let path = env.work.join("bin.txt");
    std::fs::write(&path, b"ok\n\xff\xfe\n").expect("write bytes");

    env.cmd()
        .args(["--file", "bin.txt", "--lines", "1-1"])
        .assert()
        .failure()
        .stderr(contains("not valid UTF-8"));

    assert_eq!(std::fs::read(&path).expect("read bytes"), b"ok\n\xff\xfe\n");
}

#[test]
fn env_vars_select_file_and_range() {
    let env = TestEnv::new();
    env.write("notes.txt", &numbered(10));

    env.cmd()
        .env("LINESNIP_FILE", "notes.txt")
        .env("LINESNIP_LINES", "2-4")
        .arg("remove")
        .assert()
        .success()
        .stdout(contains("Lines 2-4 removed successfully"));

    assert_eq!(env.read("notes.txt"), numbered_except(10, 2..=4));
}

#[test]
fn preview_prints_numbered_rows() {
    let env = TestEnv::new();
    env.write("notes.txt", &numbered(10));

    env.cmd()
        .args(["preview", "--file", "notes.txt", "--lines", "9-12"])
        .assert()
        .success()
        .stdout("9\tline 9\n10\tline 10\n");

    assert_eq!(env.read("notes.txt"), numbered(10));
}

#[test]
fn invalid_range_is_reported() {
    let env = TestEnv::new();
    env.write("notes.txt", &numbered(3));

    env.cmd()
        .args(["remove", "--file", "notes.txt", "--lines", "5-2"])
        .assert()
        .failure()
        .stderr(contains("end is before start"));
}
