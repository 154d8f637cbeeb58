//! Shared harness for CLI specs.

#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tempfile::TempDir;

pub const SESSION: &str = "sess-spec";

/// Exit code for rejected requests.
pub const EXIT_INVALID: i32 = 2;
/// Exit code for missing agents.
pub const EXIT_NOT_FOUND: i32 = 3;

/// Path to the `roster` binary.
///
/// The binary belongs to another workspace package, so cargo does not hand
/// its path to this test crate. A workspace build puts it in the same
/// profile directory as this test executable (`target/<profile>/deps/..`).
/// When it is not there, it is built once into `target/specs-bin`.
/// `ROSTER_BIN` overrides both.
pub fn roster_bin() -> PathBuf {
    static BIN: OnceLock<PathBuf> = OnceLock::new();
    BIN.get_or_init(|| {
        if let Some(path) = std::env::var_os("ROSTER_BIN") {
            return PathBuf::from(path);
        }
        let exe = std::env::current_exe().unwrap();
        let profile_dir = exe
            .parent()
            .filter(|dir| dir.ends_with("deps"))
            .and_then(Path::parent)
            .or_else(|| exe.parent())
            .unwrap()
            .to_path_buf();
        let sibling = profile_dir.join(bin_name());
        if sibling.is_file() {
            return sibling;
        }
        build_roster(&profile_dir)
    })
    .clone()
}

fn bin_name() -> String {
    format!("roster{}", std::env::consts::EXE_SUFFIX)
}

/// `cargo build -p roster` into a separate target dir, so it never waits on
/// the lock held by the cargo invocation running these specs.
fn build_roster(profile_dir: &Path) -> PathBuf {
    let release = profile_dir.ends_with("release");
    let target = profile_dir.parent().unwrap_or(profile_dir).join("specs-bin");
    let cargo = std::env::var_os("CARGO").unwrap_or_else(|| "cargo".into());
    let mut build = std::process::Command::new(cargo);
    build
        .args(["build", "--quiet", "-p", "roster", "--bin", "roster", "--target-dir"])
        .arg(&target)
        .current_dir(env!("CARGO_MANIFEST_DIR"));
    if release {
        build.arg("--release");
    }
    let status = build.status().unwrap();
    assert!(status.success(), "building roster for specs failed: {status}");
    target.join(if release { "release" } else { "debug" }).join(bin_name())
}

/// `roster` with no state directory or session configured.
pub fn cli() -> Cmd {
    let mut cmd = Command::new(roster_bin());
    for key in ["ROSTER_STATE_DIR", "ROSTER_SESSION_ID", "CLAUDE_SESSION_ID", "ROSTER_LOG"] {
        cmd.env_remove(key);
    }
    Cmd { cmd }
}

/// An isolated state directory plus working directory.
pub struct Project {
    state: TempDir,
    work: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { state: tempfile::tempdir().unwrap(), work: tempfile::tempdir().unwrap() }
    }

    pub fn state_dir(&self) -> &Path {
        self.state.path()
    }

    /// Working directory as the binary sees it (symlinks resolved).
    pub fn work_dir(&self) -> PathBuf {
        std::fs::canonicalize(self.work.path()).unwrap()
    }

    /// `roster` in this project with ambient session [`SESSION`].
    pub fn roster(&self) -> Cmd {
        self.roster_without_session().env("ROSTER_SESSION_ID", SESSION)
    }

    pub fn roster_without_session(&self) -> Cmd {
        let mut cmd = cli();
        cmd.cmd.env("ROSTER_STATE_DIR", self.state.path()).current_dir(self.work.path());
        cmd
    }

    /// Write a raw file under the state directory.
    pub fn state_file(&self, rel: &str, contents: &str) {
        let path = self.state.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, contents).unwrap();
    }

    /// Create an agent and return its JSON document.
    pub fn create(&self, args: &[&str]) -> Value {
        let mut full = vec!["-o", "json", "create"];
        full.extend_from_slice(args);
        self.roster().args(&full).passes().json()["record"].clone()
    }

    /// Names from `roster list -o json [args]`, sorted.
    pub fn names(&self, args: &[&str]) -> Vec<String> {
        let mut full = vec!["-o", "json", "list"];
        full.extend_from_slice(args);
        let listed = self.roster().args(&full).passes().json();
        let mut names: Vec<String> = listed
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["name"].as_str().unwrap().to_string())
            .collect();
        names.sort();
        names
    }
}

pub struct Cmd {
    cmd: Command,
}

impl Cmd {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Run, asserting exit code 0.
    pub fn passes(mut self) -> Output {
        let output = Output::from(self.cmd.output().unwrap());
        assert_eq!(output.code, 0, "expected success\nstdout:\n{}\nstderr:\n{}", output.stdout, output.stderr);
        output
    }

    /// Run, asserting a non-zero exit code.
    pub fn fails(mut self) -> Output {
        let output = Output::from(self.cmd.output().unwrap());
        assert_ne!(output.code, 0, "expected failure\nstdout:\n{}", output.stdout);
        output
    }

    /// Run, asserting the exact exit code.
    pub fn exits(self, code: i32) -> Output {
        let output = self.fails();
        assert_eq!(output.code, code, "stderr:\n{}", output.stderr);
        output
    }
}

pub struct Output {
    pub code: i32,
    stdout: String,
    stderr: String,
}

impl From<std::process::Output> for Output {
    fn from(out: std::process::Output) -> Self {
        Self {
            code: out.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        }
    }
}

impl Output {
    pub fn stdout(&self) -> String {
        self.stdout.clone()
    }

    pub fn stderr(&self) -> String {
        self.stderr.clone()
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout lacks {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(!self.stdout.contains(needle), "stdout has {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr lacks {needle:?}:\n{}", self.stderr);
        self
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }
}
