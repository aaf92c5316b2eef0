//! Error types for gantry operations.
//!
//! One top-level [`Error`] wraps the per-concern enums so call sites can
//! return `crate::error::Result` and convert with `?`.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Variable(#[from] VariableError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Workspace file problems.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("not initialized: run `gantry init` first")]
    NotInitialized,

    #[error("already initialized: .gantry.toml exists")]
    AlreadyInitialized,

    #[error("failed to read workspace: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to write workspace: {0}")]
    WriteFile(#[source] std::io::Error),

    #[error("workspace parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("workspace serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Field-level validation failures from the create/edit form.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("name is required")]
    EmptyName,

    #[error("invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("value is required for {0}")]
    EmptyValue(String),

    #[error("vault name is required for secret {0}")]
    MissingVault(String),

    #[error("secret name is required for secret {0}")]
    MissingSecretName(String),

    #[error("{0} is stored as a secret: set --vault and --secret-name instead of a value")]
    UnexpectedValue(String),
}

/// Import-transform failures.
///
/// Zero matches in the input is not an error; only the matching machinery
/// itself failing surfaces here.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid settings pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("malformed vault reference: {0}")]
    VaultRef(String),
}

/// Record-level failures.
#[derive(Error, Debug)]
pub enum VariableError {
    #[error("no variable with id {0}")]
    NotFound(u64),

    #[error("format `{format}` is not available in {mode} mode")]
    FormatMode { format: String, mode: String },
}
