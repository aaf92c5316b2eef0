//! Command-line interface.

pub mod add;
pub mod clear;
pub mod completions;
pub mod edit;
pub mod form;
pub mod generate;
pub mod import;
pub mod init;
pub mod list;
pub mod output;
pub mod rm;

use clap::{Parser, Subcommand};

use crate::core::grammar::Mode;
use crate::core::render::Format;

/// Gantry - compose, edit, and export application environment variables.
#[derive(Parser)]
#[command(
    name = "gantry",
    about = "Compose, edit, and export application environment variables",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Variable set to operate on
    #[arg(short, long, global = true, value_enum, default_value_t = Mode::Run)]
    pub mode: Mode,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize a gantry workspace in the current directory
    Init,

    /// Add an environment variable
    Add {
        /// Variable name (prompted when omitted on a terminal)
        name: Option<String>,

        /// Plain value (run mode, non-secret)
        #[arg(long)]
        value: Option<String>,

        /// Store as a key-vault secret reference
        #[arg(long)]
        secret: bool,

        /// Vault name (with --secret)
        #[arg(long)]
        vault: Option<String>,

        /// Secret name inside the vault (with --secret)
        #[arg(long)]
        secret_name: Option<String>,
    },

    /// Edit an existing variable in place
    Edit {
        /// Record id (see `gantry list`)
        id: u64,

        /// New variable name
        #[arg(long)]
        name: Option<String>,

        /// New plain value
        #[arg(long)]
        value: Option<String>,

        /// Convert to a key-vault secret reference
        #[arg(long, conflicts_with = "plain")]
        secret: bool,

        /// Convert to a plain value
        #[arg(long)]
        plain: bool,

        /// New vault name
        #[arg(long)]
        vault: Option<String>,

        /// New secret name inside the vault
        #[arg(long)]
        secret_name: Option<String>,
    },

    /// Remove a variable
    Rm {
        /// Record id
        id: u64,
    },

    /// Remove all variables in the selected set
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// List variables
    List {
        /// Filter by case-insensitive substring of name or value
        #[arg(long)]
        search: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Import variables from provider settings text
    Import {
        /// Path to a settings file (reads stdin when omitted)
        path: Option<String>,
    },

    /// Render variables into a provider format on stdout
    Generate {
        /// Output format
        #[arg(value_enum)]
        format: Format,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, mode: Mode) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Init => init::execute(),
        Add {
            name,
            value,
            secret,
            vault,
            secret_name,
        } => add::execute(mode, name, value, secret, vault, secret_name),
        Edit {
            id,
            name,
            value,
            secret,
            plain,
            vault,
            secret_name,
        } => edit::execute(mode, id, name, value, secret, plain, vault, secret_name),
        Rm { id } => rm::execute(mode, id),
        Clear { yes } => clear::execute(mode, yes),
        List { search, json } => list::execute(mode, search.as_deref(), json),
        Import { path } => import::execute(mode, path.as_deref()),
        Generate { format } => generate::execute(mode, format),
        Completions { shell } => completions::execute(shell),
    }
}
