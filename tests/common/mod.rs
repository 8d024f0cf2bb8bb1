#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const KB: usize = 1024;

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().join("site");
        fs::create_dir_all(&root).expect("create project root");
        Self { _tmp: tmp, root }
    }

    /// Binary run from inside the project root, with no arguments added.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("css-guard");
        cmd.current_dir(&self.root).env_remove("RUST_LOG");
        cmd
    }

    pub fn artifact_path(&self) -> PathBuf {
        self.root.join("static/css/styles.css")
    }

    /// Writes a stylesheet of exactly `bytes` bytes at the default location.
    pub fn write_css(&self, bytes: usize) -> PathBuf {
        let path = self.artifact_path();
        write_css_at(&path, bytes);
        path
    }

    pub fn write_file(&self, rel: &str, contents: &str) {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(path, contents).expect("write file");
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
            .code(1)
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

pub fn write_css_at(path: &Path, bytes: usize) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create css dir");
    }
    let rule = ".u{margin:0}\n";
    let mut css = rule.repeat(bytes / rule.len() + 1);
    css.truncate(bytes);
    fs::write(path, css).expect("write css");
}
