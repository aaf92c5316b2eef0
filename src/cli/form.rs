//! Create/edit form shared by `add` and `edit`.
//!
//! Flags fill the form fields up front; on a terminal, fields that are
//! still undetermined are collected interactively with dialoguer, with
//! the current values offered as defaults when editing. Off a terminal,
//! missing required fields surface as validation errors.

use std::io::{self, IsTerminal};

use dialoguer::{Confirm, Input};

use crate::core::grammar::Mode;
use crate::core::record::{Variable, VaultRef};
use crate::core::validation;
use crate::error::{Result, ValidationError};

/// Raw form fields as given on the command line.
#[derive(Debug, Default)]
pub struct Fields {
    pub name: Option<String>,
    pub value: Option<String>,
    pub secret: Option<bool>,
    pub vault: Option<String>,
    pub secret_name: Option<String>,
}

/// A validated form submission with the record value already composed.
#[derive(Debug)]
pub struct Submission {
    pub name: String,
    pub value: Option<String>,
    pub secret: bool,
}

/// Resolve the form into a submission.
///
/// # Errors
///
/// Returns `ValidationError` for missing or malformed fields, and
/// `ParseError` if an edited secret's stored reference cannot be
/// decomposed.
pub fn resolve(mode: Mode, fields: Fields, existing: Option<&Variable>) -> Result<Submission> {
    match mode {
        Mode::Build => resolve_build(fields, existing),
        Mode::Run => resolve_run(fields, existing),
    }
}

/// Build-time records are name-only.
fn resolve_build(fields: Fields, existing: Option<&Variable>) -> Result<Submission> {
    let tty = io::stdin().is_terminal();

    let name = match fields.name {
        Some(name) => name,
        None if tty => prompt_text("Name", existing.map(|v| v.name.as_str()))?,
        None => existing
            .map(|v| v.name.clone())
            .ok_or(ValidationError::EmptyName)?,
    };
    validation::validate_name(&name)?;

    Ok(Submission {
        name,
        value: None,
        secret: false,
    })
}

fn resolve_run(fields: Fields, existing: Option<&Variable>) -> Result<Submission> {
    let tty = io::stdin().is_terminal();

    let name = match fields.name {
        Some(name) => name,
        None if tty => prompt_text("Name", existing.map(|v| v.name.as_str()))?,
        None => existing
            .map(|v| v.name.clone())
            .ok_or(ValidationError::EmptyName)?,
    };
    validation::validate_name(&name)?;

    // Flags imply intent: an explicit value means plain, an explicit
    // vault or secret name means secret. Only a bare invocation asks.
    let secret = match fields.secret {
        Some(secret) => secret,
        None if fields.value.is_some() => false,
        None if fields.vault.is_some() || fields.secret_name.is_some() => true,
        None => match existing {
            Some(v) => v.secret,
            None if tty => Confirm::new()
                .with_prompt("Store as a key-vault secret?")
                .default(false)
                .interact()?,
            None => false,
        },
    };

    if secret {
        // Decompose the stored reference for defaults (the edit path)
        let prior_ref = match existing {
            Some(v) if v.secret && (fields.vault.is_none() || fields.secret_name.is_none()) => {
                Some(v.vault_ref()?)
            }
            _ => None,
        };

        let vault = resolve_field(
            fields.vault,
            prior_ref.as_ref().map(|r| r.vault.as_str()),
            tty,
            "Vault name",
        )?;
        let secret_name = resolve_field(
            fields.secret_name,
            prior_ref.as_ref().map(|r| r.secret.as_str()),
            tty,
            "Secret name",
        )?;

        validation::validate_fields(
            &name,
            true,
            fields.value.as_deref(),
            vault.as_deref(),
            secret_name.as_deref(),
        )?;

        // validate_fields guarantees both parts are present here
        let reference = VaultRef::new(vault.unwrap_or_default(), secret_name.unwrap_or_default());
        Ok(Submission {
            name,
            value: Some(reference.to_string()),
            secret: true,
        })
    } else {
        let prior_value = existing.filter(|v| !v.secret).and_then(|v| v.value.clone());
        let value = resolve_field(fields.value, prior_value.as_deref(), tty, "Value")?;

        validation::validate_fields(&name, false, value.as_deref(), None, None)?;

        Ok(Submission {
            name,
            value,
            secret: false,
        })
    }
}

/// A field from flag, prompt, or prior value, in that order.
fn resolve_field(
    flag: Option<String>,
    prior: Option<&str>,
    tty: bool,
    prompt: &str,
) -> Result<Option<String>> {
    match flag {
        Some(value) => Ok(Some(value)),
        None if tty => Ok(Some(prompt_text(prompt, prior)?)),
        None => Ok(prior.map(str::to_string)),
    }
}

fn prompt_text(prompt: &str, default: Option<&str>) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    Ok(input.interact_text()?)
}
