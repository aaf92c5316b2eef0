//! Edit command.
//!
//! Mutates a record in place. Editing an existing secret decomposes its
//! stored vault reference so the vault and secret-name fields can be
//! offered back as defaults.

use tracing::info;

use crate::cli::form::{self, Fields};
use crate::cli::output;
use crate::core::grammar::Mode;
use crate::core::workspace::Workspace;
use crate::error::{Result, VariableError};

/// Edit a variable in the selected set.
#[allow(clippy::too_many_arguments)]
pub fn execute(
    mode: Mode,
    id: u64,
    name: Option<String>,
    value: Option<String>,
    secret: bool,
    plain: bool,
    vault: Option<String>,
    secret_name: Option<String>,
) -> Result<()> {
    let mut workspace = Workspace::load()?;

    let existing = workspace
        .set(mode)
        .get(id)
        .ok_or(VariableError::NotFound(id))?
        .clone();

    let secret_flag = if secret {
        Some(true)
    } else if plain {
        Some(false)
    } else {
        None
    };

    let fields = Fields {
        name,
        value,
        secret: secret_flag,
        vault,
        secret_name,
    };
    let submission = form::resolve(mode, fields, Some(&existing))?;

    info!("updating {} variable {}", mode, id);

    workspace.set_mut(mode).update(
        id,
        submission.name.clone(),
        submission.value,
        submission.secret,
    )?;
    workspace.save()?;

    output::success(&format!("updated {}", output::key(&submission.name)));
    Ok(())
}
