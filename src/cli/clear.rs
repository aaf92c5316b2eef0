//! Clear command - remove every variable in a set.

use std::io::{self, IsTerminal};

use dialoguer::Confirm;
use tracing::info;

use crate::cli::output;
use crate::core::grammar::Mode;
use crate::core::workspace::Workspace;
use crate::error::Result;

/// Clear the selected set after confirmation.
pub fn execute(mode: Mode, yes: bool) -> Result<()> {
    let mut workspace = Workspace::load()?;

    let count = workspace.set(mode).len();
    if count == 0 {
        output::dimmed("nothing to clear");
        return Ok(());
    }

    let confirmed = yes
        || (io::stdin().is_terminal()
            && Confirm::new()
                .with_prompt(format!("Remove all {} {} variables?", count, mode))
                .default(false)
                .interact()?);

    if !confirmed {
        output::warn("aborted (pass --yes to confirm)");
        return Ok(());
    }

    info!("clearing {} {} variables", count, mode);

    workspace.set_mut(mode).clear();
    workspace.save()?;

    output::success(&format!("cleared {} variables", count));
    Ok(())
}
