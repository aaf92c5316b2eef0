//! Generate command - render variables into a provider format.

use crate::cli::output;
use crate::core::grammar::Mode;
use crate::core::render::{self, Format};
use crate::core::workspace::Workspace;
use crate::error::Result;

/// Render the selected set to stdout.
///
/// Plain output for scripting - no decoration.
pub fn execute(mode: Mode, format: Format) -> Result<()> {
    let workspace = Workspace::load()?;
    let rendered = render::render(format, mode, workspace.set(mode).records())?;

    output::raw(&rendered);
    Ok(())
}
