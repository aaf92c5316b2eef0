//! List command - table or JSON listing with search.

use crate::cli::output;
use crate::core::grammar::Mode;
use crate::core::workspace::Workspace;
use crate::error::Result;

/// List variables in the selected set, optionally filtered.
pub fn execute(mode: Mode, search: Option<&str>, json: bool) -> Result<()> {
    let workspace = Workspace::load()?;
    let set = workspace.set(mode);
    let records = set.search(search.unwrap_or(""));

    if json {
        let result = serde_json::json!({
            "mode": mode.to_string(),
            "count": records.len(),
            "variables": records,
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if records.is_empty() {
        if set.is_empty() {
            output::dimmed("no variables stored");
        } else {
            output::dimmed("no variables match");
        }
    } else {
        println!();
        output::header(&format!("{} {} variables", records.len(), mode));
        output::rule();
        for record in records {
            let mut line = format!("  {:>3}  {}", record.id, output::key(&record.name));
            if let Some(value) = &record.value {
                line.push_str(&format!("  {}", value));
            }
            if record.secret {
                line.push_str(&format!("  {}", output::badge("[secret]")));
            }
            println!("{}", line);
        }
    }

    Ok(())
}
