//! Init command - create the gantry workspace.

use tracing::info;

use crate::cli::output;
use crate::core::constants;
use crate::core::workspace::Workspace;
use crate::error::Result;

/// Initialize gantry in the current directory.
pub fn execute() -> Result<()> {
    let _workspace = Workspace::init()?;
    info!("workspace created");

    output::success(&format!("initialized {}", constants::CONFIG_FILE));
    output::hint("add variables with: gantry add");
    Ok(())
}
