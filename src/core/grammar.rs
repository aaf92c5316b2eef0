//! Import transforms.
//!
//! Parses free-text provider configuration into variable records: docker
//! `--build-arg NAME` tokens in build mode, `-NAME VALUE` application
//! settings in run mode. Input that matches nothing yields an empty list,
//! not an error.

use regex::Regex;

use crate::core::record::VaultRef;
use crate::error::{ParseError, Result};

/// Which variable set a command operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Build-time arguments (name-only, docker build)
    Build,
    /// Run-time application settings (name/value or secret reference)
    Run,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Build => "build",
            Mode::Run => "run",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A variable parsed out of imported text, before it is assigned an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedVariable {
    pub name: String,
    pub value: Option<String>,
    pub secret: bool,
}

/// Parse provider settings text into variables, one per matched token,
/// in input order.
///
/// # Errors
///
/// Returns `ParseError::Pattern` if the grammar pattern fails to compile.
pub fn parse(mode: Mode, input: &str) -> Result<Vec<ParsedVariable>> {
    match mode {
        Mode::Build => parse_build(input),
        Mode::Run => parse_run(input),
    }
}

/// Scan for `--build-arg NAME` tokens. Names are uppercase env-var style.
fn parse_build(input: &str) -> Result<Vec<ParsedVariable>> {
    let pattern = Regex::new(r"--build-arg\s+([A-Z0-9_]+)").map_err(ParseError::Pattern)?;

    let parsed = pattern
        .captures_iter(input)
        .map(|caps| ParsedVariable {
            name: caps[1].to_string(),
            value: None,
            secret: false,
        })
        .collect();

    Ok(parsed)
}

/// Scan for `-NAME VALUE` tokens. The value runs until the next `-` and is
/// trimmed; values carrying the key-vault prefix are flagged as secrets.
fn parse_run(input: &str) -> Result<Vec<ParsedVariable>> {
    let pattern = Regex::new(r"-(\S+)\s+([^-]+)").map_err(ParseError::Pattern)?;

    let parsed = pattern
        .captures_iter(input)
        .map(|caps| {
            let value = caps[2].trim().to_string();
            let secret = VaultRef::is_reference(&value);
            ParsedVariable {
                name: caps[1].to_string(),
                value: Some(value),
                secret,
            }
        })
        .collect();

    Ok(parsed)
}
