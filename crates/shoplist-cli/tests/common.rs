//! Common test utilities shared across integration tests.
//!
//! Clippy cannot track usage across integration test files, hence the
//! `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
    db_path: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".shoplist");
        let db_path = temp_dir.path().join("list.db");

        fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            _temp_dir: temp_dir,
            data_dir,
            db_path,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Command bound to this fixture's data dir, without a `--db` flag.
    pub fn bare_command(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("shoplist");
        cmd.env("SHOPLIST_PATH", self.data_dir())
            .env_remove("RUST_LOG")
            .current_dir(self._temp_dir.path());
        cmd
    }

    pub fn command(&self) -> Command {
        let mut cmd = self.bare_command();
        cmd.arg("--db").arg(self.db_path());
        cmd
    }

    pub fn add(&self, description: &str, quantity: &str) -> anyhow::Result<()> {
        let output = self
            .command()
            .arg("add")
            .arg(description)
            .arg(quantity)
            .output()?;

        if !output.status.success() {
            anyhow::bail!("add failed: {}", String::from_utf8_lossy(&output.stderr));
        }
        Ok(())
    }

    /// Items as JSON, from `list` (or `list --all`).
    pub fn list_json(&self, all: bool) -> anyhow::Result<Vec<serde_json::Value>> {
        let mut cmd = self.command();
        cmd.arg("list").arg("--format").arg("json");
        if all {
            cmd.arg("--all");
        }
        let output = cmd.output()?;

        if !output.status.success() {
            anyhow::bail!("list failed: {}", String::from_utf8_lossy(&output.stderr));
        }
        Ok(serde_json::from_slice(&output.stdout)?)
    }
}
