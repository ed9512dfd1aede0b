//! Common test utilities for Strata CLI tests.
//!
//! Provides `TestProject` - an isolated project directory with helpers to
//! write fixture files and run the strata binary against it.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a strata CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated project directory for driving the binary.
pub struct TestProject {
    root: TempDir,
    strata_bin: PathBuf,
}

/// The mapping table exercised by the migration tests.
pub const STANDARD_MAPPING: &str = r#"{
  "lib/auth.ts": "@/infrastructure/auth",
  "lib/auth-options.ts": "@/infrastructure/auth",
  "lib/utils.ts": "@/application/common",
  "types/index.ts": "@/domain",
  "types/database.types.ts": "@/infrastructure/database"
}"#;

impl TestProject {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("create temp project"),
            strata_bin: PathBuf::from(env!("CARGO_BIN_EXE_strata")),
        }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Write a file under the project root, creating parent directories.
    pub fn write_file(&self, relative: &str, content: &str) -> &Self {
        let path = self.root.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(path, content).expect("write fixture file");
        self
    }

    /// Write the mapping table at its default location.
    pub fn write_mapping(&self, content: &str) -> &Self {
        self.write_file("tools/migration/layer-mapping.json", content)
    }

    /// Run strata from the project root.
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(&self.strata_bin)
            .current_dir(self.root.path())
            .args(args)
            // deterministic plain-ascii output for assertions
            .env("STRATA_NO_COLOR", "1")
            .env("TERM", "dumb")
            .output()
            .expect("failed to execute strata");

        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
