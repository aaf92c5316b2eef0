//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a gantry command rooted in the test project directory.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("gantry").expect("failed to find gantry binary");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run gantry with the given arguments.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd().args(args).output().expect("failed to run gantry")
    }

    /// Shortcut for `gantry init`.
    pub fn init_cmd(&self) -> Output {
        self.run(&["init"])
    }

    /// Shortcut for `gantry add` with a plain run-mode value.
    pub fn add_run(&self, name: &str, value: &str) -> Output {
        self.run(&["add", name, "--value", value])
    }

    /// Shortcut for `gantry add --secret` with vault and secret name.
    pub fn add_secret(&self, name: &str, vault: &str, secret_name: &str) -> Output {
        self.run(&[
            "add",
            name,
            "--secret",
            "--vault",
            vault,
            "--secret-name",
            secret_name,
        ])
    }

    /// Shortcut for `gantry add --mode build`.
    pub fn add_build(&self, name: &str) -> Output {
        self.run(&["add", name, "--mode", "build"])
    }

    /// Shortcut for `gantry rm`.
    pub fn rm(&self, mode: &str, id: &str) -> Output {
        self.run(&["rm", id, "--mode", mode])
    }

    /// Shortcut for `gantry list --json`, parsed.
    pub fn list_json(&self, mode: &str) -> serde_json::Value {
        let output = self.run(&["list", "--json", "--mode", mode]);
        assert!(
            output.status.success(),
            "failed to list variables: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("list --json produced invalid JSON")
    }

    /// Write a settings file into the project directory and import it.
    pub fn import_file(&self, mode: &str, name: &str, contents: &str) -> Output {
        std::fs::write(self.dir.path().join(name), contents).expect("failed to write fixture");
        self.run(&["import", name, "--mode", mode])
    }

    /// Shortcut for `gantry generate`.
    pub fn generate(&self, mode: &str, format: &str) -> Output {
        self.run(&["generate", format, "--mode", mode])
    }
}
