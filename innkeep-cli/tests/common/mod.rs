//! Common test utilities for CLI integration tests.
//!
//! Every [`TestEnv`] gets its own user config directory and working
//! directory, and strips `INNKEEP_*` variables from the child environment
//! so the developer's own settings never leak into a test.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the CLI reads.
const INNKEEP_ENV_VARS: [&str; 6] = [
    "INNKEEP_CONFIG_DIR",
    "INNKEEP_HOTEL_NAME",
    "INNKEEP_LOG_MODE",
    "INNKEEP_MAX_COST_PER_NIGHT",
    "INNKEEP_MAX_ROOM_ID",
    "INNKEEP_OUTPUT_FORMAT",
];

/// Test environment with isolated configuration directories.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Directory passed as `--config-dir`
    pub config_dir: PathBuf,
    /// Working directory of the child process
    pub work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with empty config and work directories.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_dir = temp_dir.path().join("config");
        let work_dir = temp_dir.path().join("work");
        fs::create_dir_all(&config_dir).expect("Failed to create config dir");
        fs::create_dir_all(&work_dir).expect("Failed to create work dir");

        Self {
            temp_dir,
            config_dir,
            work_dir,
        }
    }

    /// Get a command builder with a clean environment but no flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("innkeep").expect("Failed to find innkeep binary");
        cmd.current_dir(&self.work_dir);
        for var in INNKEEP_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with `--config-dir` pointing at this
    /// environment's config directory.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd
    }

    /// Run an interactive session fed with `script` and return its stdout.
    ///
    /// # Panics
    /// Panics if the session exits unsuccessfully.
    pub fn session(&self, script: &str) -> String {
        let output = self
            .command()
            .write_stdin(script)
            .output()
            .expect("Failed to run session");

        assert!(
            output.status.success(),
            "Session failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }

    /// Write the user `config.yaml`.
    pub fn write_user_config(&self, yaml: &str) -> PathBuf {
        let path = self.config_dir.join("config.yaml");
        fs::write(&path, yaml).expect("Failed to write user config");
        path
    }

    /// Write a project `innkeep.yaml` into the working directory.
    pub fn write_project_config(&self, yaml: &str) -> PathBuf {
        let path = self.work_dir.join("innkeep.yaml");
        fs::write(&path, yaml).expect("Failed to write project config");
        path
    }

    /// Write an arbitrary file under the temporary directory.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
