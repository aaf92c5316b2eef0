//! Export transforms.
//!
//! Renders the current record list into provider-specific text: docker
//! build flags, Dockerfile directives, or `-NAME VALUE` application
//! settings. Secret records always serialize their vault reference,
//! never a raw secret value.

use crate::core::grammar::Mode;
use crate::core::record::Variable;
use crate::error::{Result, VariableError};

/// Output format for `generate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// `--build-arg NAME=$(NAME)` flags for docker build
    BuildArgs,
    /// Dockerfile `ARG NAME` directives
    DockerfileArg,
    /// Dockerfile `ENV NAME=$NAME` directives
    DockerfileEnv,
    /// `-NAME VALUE` application settings pairs
    AppSettings,
}

impl Format {
    /// The mode this format belongs to.
    pub fn mode(&self) -> Mode {
        match self {
            Format::BuildArgs | Format::DockerfileArg | Format::DockerfileEnv => Mode::Build,
            Format::AppSettings => Mode::Run,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::BuildArgs => "build-args",
            Format::DockerfileArg => "dockerfile-arg",
            Format::DockerfileEnv => "dockerfile-env",
            Format::AppSettings => "app-settings",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render records into the requested format.
///
/// # Errors
///
/// Returns `VariableError::FormatMode` if the format does not belong to
/// the mode being exported.
pub fn render(format: Format, mode: Mode, records: &[Variable]) -> Result<String> {
    if format.mode() != mode {
        return Err(VariableError::FormatMode {
            format: format.to_string(),
            mode: mode.to_string(),
        }
        .into());
    }

    let mut out = String::new();
    for record in records {
        match format {
            Format::BuildArgs => {
                out.push_str(&format!("--build-arg {}=$({}) ", record.name, record.name));
            }
            Format::DockerfileArg => {
                out.push_str(&format!("ARG {}\n", record.name));
            }
            Format::DockerfileEnv => {
                out.push_str(&format!("ENV {}=${}\n", record.name, record.name));
            }
            Format::AppSettings => {
                out.push_str(&format!(
                    "-{} {} ",
                    record.name,
                    record.value.as_deref().unwrap_or_default()
                ));
            }
        }
    }

    Ok(out)
}
