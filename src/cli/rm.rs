//! Rm command - remove one variable by id.

use tracing::info;

use crate::cli::output;
use crate::core::grammar::Mode;
use crate::core::workspace::Workspace;
use crate::error::Result;

/// Remove a variable from the selected set.
pub fn execute(mode: Mode, id: u64) -> Result<()> {
    info!("removing {} variable {}", mode, id);

    let mut workspace = Workspace::load()?;
    let removed = workspace.set_mut(mode).remove(id)?;
    workspace.save()?;

    output::success(&format!("removed: {}", output::key(&removed.name)));
    Ok(())
}
