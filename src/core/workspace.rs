//! Workspace file management.
//!
//! Handles reading and writing `.gantry.toml` workspace files. The file
//! holds one variable set per mode plus metadata; everything else in the
//! crate operates on the in-memory sets.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::grammar::Mode;
use crate::core::set::VariableSet;
use crate::error::{ConfigError, Result};

/// Project workspace stored in `.gantry.toml`
#[derive(Debug, Serialize, Deserialize)]
pub struct Workspace {
    /// Metadata about the workspace
    pub gantry: Meta,
    /// Build-time variable set
    #[serde(default)]
    pub build: VariableSet,
    /// Run-time variable set
    #[serde(default)]
    pub run: VariableSet,
}

/// Metadata section of the workspace file
#[derive(Debug, Serialize, Deserialize)]
pub struct Meta {
    /// Version of gantry that wrote the file
    pub version: String,
}

impl Workspace {
    /// Create a new empty workspace with current version
    pub fn new() -> Self {
        Self {
            gantry: Meta {
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            build: VariableSet::new(),
            run: VariableSet::new(),
        }
    }

    /// Path to the workspace file in the current directory
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Check if a workspace file exists in the current directory
    pub fn exists() -> bool {
        Self::config_path().exists()
    }

    /// Initialize a new workspace in the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::AlreadyInitialized` if `.gantry.toml` exists.
    pub fn init() -> Result<Self> {
        if Self::exists() {
            return Err(ConfigError::AlreadyInitialized.into());
        }

        let workspace = Self::new();
        workspace.save()?;
        Ok(workspace)
    }

    /// Load the workspace from `.gantry.toml`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if the file doesn't exist,
    /// or `ConfigError::Parse` if the TOML is malformed.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Err(ConfigError::NotInitialized.into());
        }
        Self::load_from(path)
    }

    /// Load a workspace from an explicit path.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading workspace");

        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let workspace: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        debug!(
            build = workspace.build.len(),
            run = workspace.run.len(),
            "workspace loaded"
        );

        Ok(workspace)
    }

    /// Save the workspace to `.gantry.toml`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization or the write fails.
    pub fn save(&self) -> Result<()> {
        self.save_to(Self::config_path())
    }

    /// Save the workspace to an explicit path.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path.as_ref(), contents).map_err(ConfigError::WriteFile)?;
        Ok(())
    }

    /// The variable set for a mode.
    pub fn set(&self, mode: Mode) -> &VariableSet {
        match mode {
            Mode::Build => &self.build,
            Mode::Run => &self.run,
        }
    }

    /// Mutable variable set for a mode.
    pub fn set_mut(&mut self, mode: Mode) -> &mut VariableSet {
        match mode {
            Mode::Build => &mut self.build,
            Mode::Run => &mut self.run,
        }
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
