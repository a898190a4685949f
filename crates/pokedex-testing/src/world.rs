//! TestWorld pattern for CLI integration tests.
//!
//! Gives every test its own temp directory (config file, log file) and a
//! clean environment, then runs the `pokedex` binary inside it.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated CLI environment.
///
/// # Example
/// ```no_run
/// use pokedex_testing::{MockPokeApi, TestWorld, fixtures};
///
/// let api = MockPokeApi::start(fixtures::starter_entities()).unwrap();
/// let world = TestWorld::new().with_api(&api);
///
/// let result = world.run(&["list", "--format", "json"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
    api_url: Option<String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");

        Self {
            temp_dir,
            config_path,
            env_vars: HashMap::new(),
            api_url: None,
        }
    }

    /// Point every command at the mock server.
    pub fn with_api(mut self, api: &crate::MockPokeApi) -> Self {
        self.api_url = Some(api.base_url());
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write `config.toml` content for this world.
    pub fn with_config(self, content: &str) -> Self {
        std::fs::write(&self.config_path, content).expect("Failed to write config");
        self
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Run `pokedex` with `args`.
    ///
    /// `--config` (and `--api-url` when a mock server is attached) are
    /// prepended so nothing touches the real user config or network.
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("pokedex")
            .map_err(|e| anyhow::anyhow!("Failed to find pokedex binary: {}", e))?;

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("POKEDEX_CONFIG");
        cmd.env_remove("POKEDEX_LOG");
        cmd.env_remove("RUST_LOG");
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd.arg("--config").arg(&self.config_path);
        if let Some(url) = &self.api_url {
            cmd.arg("--api-url").arg(url);
        }
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Captured outcome of a CLI run.
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
