#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

/// Isolated config and data directories for one test.
pub struct Sandbox {
    config: TempDir,
    data: TempDir,
}

#[allow(dead_code)]
impl Sandbox {
    pub fn new() -> Self {
        Self {
            config: tempfile::tempdir().expect("failed to create config dir for tests"),
            data: tempfile::tempdir().expect("failed to create data dir for tests"),
        }
    }

    pub fn config_dir(&self) -> &Path {
        self.config.path()
    }

    pub fn store_path(&self) -> PathBuf {
        self.data.path().join("bookmarks.json")
    }

    /// A `ubm` command bound to this sandbox, without a terminal on stdin.
    pub fn ubm(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("ubm"));
        cmd.timeout(CMD_TIMEOUT);
        cmd.env("UBM_CONFIG_DIR", self.config.path());
        cmd.env("UBM_DATA_DIR", self.data.path());
        cmd.env("NO_COLOR", "1");
        cmd
    }

    /// Add a bookmark non-interactively and expect success.
    pub fn add(&self, url: &str, title: &str, category: &str) {
        self.ubm()
            .args(["add", url, title, "-c", category])
            .assert()
            .success();
    }

    /// Parsed `show --format json` output.
    pub fn bookmarks(&self) -> Vec<serde_json::Value> {
        let output = self
            .ubm()
            .args(["show", "--format", "json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&output).expect("show --format json should emit an array")
    }
}
