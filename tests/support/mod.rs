//! Test support utilities for gantry integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod commands;

use tempfile::TempDir;

/// Test environment with an isolated temp project directory.
///
/// Each test gets its own temporary directory holding the workspace.
/// No process-global state is mutated — child processes use
/// `.current_dir()` so tests can safely run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment with a workspace initialized.
    pub fn init() -> Self {
        let t = Self::new();
        let output = t.init_cmd();
        assert!(
            output.status.success(),
            "failed to initialize workspace: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Create a test environment with run-mode variables set.
    pub fn with_run_vars(vars: &[(&str, &str)]) -> Self {
        let t = Self::init();
        for (name, value) in vars {
            let output = t.add_run(name, value);
            assert!(
                output.status.success(),
                "failed to add variable {}: {}",
                name,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        t
    }

    /// Create a test environment with build-mode variables set.
    pub fn with_build_vars(names: &[&str]) -> Self {
        let t = Self::init();
        for name in names {
            let output = t.add_build(name);
            assert!(
                output.status.success(),
                "failed to add variable {}: {}",
                name,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        t
    }
}
