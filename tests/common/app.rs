//! Runs the `imgclr` binary inside a scratch directory.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// A temporary directory plus helpers to run the binary against it.
pub struct TestWorkspace {
    dir: TempDir,
}

/// Captured result of one binary invocation.
pub struct CliOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CliOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Absolute path of `name` inside the workspace.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a text file (e.g. a config) and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    /// Run `imgclr` with `args`, working directory set to the workspace.
    ///
    /// `RUST_LOG` and `IMGCLR_CONFIG` are cleared so the host environment
    /// cannot change the outcome.
    pub fn run(&self, args: &[&str]) -> CliOutput {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> CliOutput {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_imgclr"));
        cmd.args(args)
            .current_dir(self.dir.path())
            .env_remove("RUST_LOG")
            .env_remove("IMGCLR_CONFIG");
        for (key, value) in env {
            cmd.env(key, value);
        }
        let output = cmd.output().expect("Failed to run imgclr binary");
        CliOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
