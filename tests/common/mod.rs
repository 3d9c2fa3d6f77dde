// Test utility module for cyberdash integration tests
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use cyberdash::{Dataset, LoadReport};

// Binary execution result for tests that need to verify CLI behavior
#[derive(Debug)]
pub struct BinaryResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl BinaryResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap_or_else(|e| {
            panic!("stdout is not JSON ({e}):\n{}\nstderr:\n{}", self.stdout, self.stderr)
        })
    }
}

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

pub fn load_fixture(name: &str) -> (Dataset, LoadReport) {
    Dataset::load(&fixture_path(name)).expect("Failed to load fixture")
}

/// The 24-record reference dataset: 8 users, 3 concepts, 3 areas.
pub fn evaluations() -> Dataset {
    load_fixture("evaluations.json").0
}

/// Run the binary from `dir` with a clean environment for config and colors.
pub fn run_cyberdash_in(dir: &Path, args: &[&str]) -> BinaryResult {
    let output = Command::new(env!("CARGO_BIN_EXE_cyberdash"))
        .args(args)
        .current_dir(dir)
        .env_remove("CYBERDASH_DATA")
        .env_remove("RUST_LOG")
        .env_remove("CLICOLOR_FORCE")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute cyberdash");

    BinaryResult {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code: output.status.code().unwrap_or(-1),
    }
}

pub fn run_cyberdash(args: &[&str]) -> BinaryResult {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    run_cyberdash_in(dir.path(), args)
}
