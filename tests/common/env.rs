//! Test environment for isolated hierslice CLI runs.
//!
//! Each `TestEnv` owns a temp directory used as working directory, HOME and
//! config dir, so no user settings leak into a test.

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running the hierslice binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as a single JSON document
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(self.stdout.trim()).unwrap_or_else(|e| {
            panic!("stdout is not JSON ({}):\n{}", e, self.stdout);
        })
    }

    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

pub struct TestEnv {
    pub dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Empty environment with no node list
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_hierslice")),
        }
    }

    /// Environment with `nodes.json` written from the given JSON
    pub fn with_nodes(nodes_json: &str) -> Self {
        let env = Self::new();
        env.write("nodes.json", nodes_json);
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let home = self.path("home");
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.dir.path())
            .args(args)
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env_remove("HIERSLICE_SINGLE_SELECT")
            .env_remove("HIERSLICE_LOG")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute hierslice");
        to_result(output)
    }

    /// Parsed state file, or `Null` when it was never written
    pub fn state(&self) -> serde_json::Value {
        let path = self.path("hierslice.state.json");
        if !path.exists() {
            return serde_json::Value::Null;
        }
        let content = std::fs::read_to_string(path).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    /// A persisted `general.<name>` property
    pub fn property(&self, name: &str) -> Option<String> {
        self.state()["properties"]["general"][name]
            .as_str()
            .map(str::to_string)
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
