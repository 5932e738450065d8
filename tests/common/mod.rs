//! Shared testing utilities for tile-config CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const EXAMPLE_METADATA: &str = include_str!("../fixtures/example-product.yml");

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with an `out/` directory and the
    /// example metadata written to `metadata.yml`.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(work_dir.join("out")).expect("Failed to create test output directory");
        fs::write(work_dir.join("metadata.yml"), EXAMPLE_METADATA)
            .expect("Failed to write example metadata");

        Self { root, work_dir }
    }

    /// Directory used as the working directory for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Default output directory.
    pub fn out_dir(&self) -> PathBuf {
        self.work_dir.join("out")
    }

    /// Build a command for invoking the compiled `tile-config` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("tile-config").expect("Failed to locate tile-config binary");
        cmd.current_dir(self.work_dir()).env_remove("TILE_CONFIG_LOG");
        cmd
    }

    /// Write a file relative to the working directory.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Read a generated file as YAML.
    pub fn read_yaml(&self, path: impl AsRef<Path>) -> serde_yaml::Value {
        let content = fs::read_to_string(path.as_ref())
            .unwrap_or_else(|err| panic!("Failed to read {}: {err}", path.as_ref().display()));
        serde_yaml::from_str(&content).expect("Generated file should be valid YAML")
    }
}
