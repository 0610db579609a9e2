#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const DASHBOARD: &str = "src/components/Dashboard.tsx";

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub work: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let work = tmp.path().join("work");
        fs::create_dir_all(&home).expect("create isolated home");
        fs::create_dir_all(&work).expect("create work dir");
        Self {
            _tmp: tmp,
            home,
            work,
        }
    }

    /// Command running inside `work` with an isolated `HOME` and no
    /// inherited `LINESNIP_*` settings.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("linesnip");
        cmd.current_dir(&self.work)
            .env("HOME", &self.home)
            .env_remove("RUST_LOG")
            .env_remove("LINESNIP_FILE")
            .env_remove("LINESNIP_LINES")
            .env_remove("LINESNIP_CONFIG")
            .env_remove("LINESNIP_AUDIT_LOG");
        cmd
    }

    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.work.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, content).expect("write fixture file");
        path
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.work.join(rel)).expect("read file")
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_failure(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("error json output")
    }
}

/// `line 1\n` through `line n\n`.
pub fn numbered(n: usize) -> String {
    (1..=n).map(|k| format!("line {}\n", k)).collect()
}

pub fn numbered_except(n: usize, skip: std::ops::RangeInclusive<usize>) -> String {
    (1..=n)
        .filter(|k| !skip.contains(k))
        .map(|k| format!("line {}\n", k))
        .collect()
}
