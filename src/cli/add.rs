//! Add command.
//!
//! Creates a variable record through the shared form: flags when given,
//! interactive prompts on a terminal.

use tracing::info;

use crate::cli::form::{self, Fields};
use crate::cli::output;
use crate::core::grammar::Mode;
use crate::core::workspace::Workspace;
use crate::error::Result;

/// Add a variable to the selected set.
pub fn execute(
    mode: Mode,
    name: Option<String>,
    value: Option<String>,
    secret: bool,
    vault: Option<String>,
    secret_name: Option<String>,
) -> Result<()> {
    let mut workspace = Workspace::load()?;

    let fields = Fields {
        name,
        value,
        secret: secret.then_some(true),
        vault,
        secret_name,
    };
    let submission = form::resolve(mode, fields, None)?;

    info!("adding {} variable: {}", mode, submission.name);

    let id = workspace
        .set_mut(mode)
        .add(submission.name.clone(), submission.value, submission.secret)?;
    workspace.save()?;

    output::success(&format!(
        "added {} (id {})",
        output::key(&submission.name),
        id
    ));
    Ok(())
}
