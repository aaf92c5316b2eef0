//! Import command - parse provider settings text into variables.

use std::io::Read;

use tracing::info;

use crate::cli::output;
use crate::core::grammar::{self, Mode};
use crate::core::workspace::Workspace;
use crate::error::Result;

/// Import variables from a file or stdin into the selected set.
///
/// Input that matches nothing leaves the set untouched and is not an
/// error.
pub fn execute(mode: Mode, path: Option<&str>) -> Result<()> {
    let mut workspace = Workspace::load()?;

    let input = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let parsed = grammar::parse(mode, &input)?;
    if parsed.is_empty() {
        output::warn("no variables found in input");
        return Ok(());
    }

    info!("importing {} {} variables", parsed.len(), mode);

    let names = workspace.set_mut(mode).extend(parsed);
    workspace.save()?;

    output::success(&format!("imported {} variables", names.len()));
    for name in &names {
        output::list_item(name);
    }
    Ok(())
}
