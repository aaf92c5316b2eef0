//! Constants used throughout gantry.
//!
//! Centralizes magic strings and file names.

/// Workspace file name (.gantry.toml).
pub const CONFIG_FILE: &str = ".gantry.toml";

/// Sentinel prefix that marks a run-time value as a key-vault reference.
pub const KEYVAULT_PREFIX: &str = "@Microsoft.KeyVault";
