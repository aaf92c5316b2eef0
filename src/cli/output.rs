//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (console handles tty detection and NO_COLOR):
//! - Green: success
//! - Red: errors
//! - Yellow: warnings, secret badges
//! - Cyan: names, commands, hints
//! - Bold: headers, important values
//! - Dimmed: secondary info

use console::style;
use std::fmt::Display;

const RULE_WIDTH: usize = 56;

/// Print a success message with checkmark (green).
///
/// Example: `✓ initialized`
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// Print an error message to stderr (red).
///
/// Example: `✗ not initialized`
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Print a warning message (yellow).
///
/// Example: `⚠ no variables found in input`
pub fn warn(msg: &str) {
    println!("{} {}", style("⚠").yellow(), msg);
}

/// Print a hint message (cyan).
///
/// Example: `→ run: gantry init`
pub fn hint(msg: &str) {
    println!("{} {}", style("→").cyan(), style(msg).cyan());
}

/// Print a bold section header.
pub fn header(title: &str) {
    println!("{}", style(title).bold());
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  mode:  run`
pub fn kv(label: &str, value: impl Display) {
    println!("  {}  {}", style(label).dim(), style(value).bold());
}

/// Print a list item with bullet.
///
/// Example: `  • DATABASE_URL`
pub fn list_item(item: &str) {
    println!("  • {}", item);
}

/// Print a horizontal rule separator.
pub fn rule() {
    println!("{}", style("─".repeat(RULE_WIDTH)).dim());
}

/// Print a dimmed/secondary message.
///
/// Example: `no variables stored`
pub fn dimmed(msg: &str) {
    println!("{}", style(msg).dim());
}

/// Format a variable name in cyan.
///
/// Returns a styled string that can be used inline.
pub fn key(k: &str) -> String {
    style(k).cyan().to_string()
}

/// Format a yellow badge, e.g. `[secret]`.
pub fn badge(text: &str) -> String {
    style(text).yellow().to_string()
}

/// Print raw text with no decoration or trailing newline.
///
/// Used for generated output that scripts consume.
pub fn raw(text: &str) {
    print!("{}", text);
}
