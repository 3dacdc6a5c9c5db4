//! Shared testing utilities for copygen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
///
/// Each context gets its own `$HOME`; credentials and config are supplied
/// per-command so tests never touch the real process environment.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `copygen` binary.
    ///
    /// `$HOME` points at the isolated directory and the credential and config
    /// environment variables start out unset.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("copygen").expect("Failed to locate copygen binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.home())
            .env_remove("GROQ_API_KEY")
            .env_remove("COPYGEN_CONFIG");
        cmd
    }

    /// Write `$HOME/.config/copygen/config.toml` pointing the API at `url`.
    ///
    /// Retries are kept fast; pass extra `[api]` lines through `extra`.
    pub fn write_api_config(&self, url: &str, extra: &str) {
        let config_dir = self.home().join(".config").join("copygen");
        fs::create_dir_all(&config_dir).expect("Failed to create config directory");

        let content = format!("[api]\napi_url = \"{}\"\nretry_delay_ms = 1\n{}", url, extra);
        fs::write(config_dir.join("config.toml"), content).expect("Failed to write config.toml");
    }
}
