//! Gantry - compose, edit, and export application environment variables.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Create the .gantry.toml workspace
//! │   ├── add           # Add a variable (interactive form or flags)
//! │   ├── edit          # Edit a variable in place
//! │   ├── rm / clear    # Delete one / all variables
//! │   ├── list          # Table or JSON listing with search
//! │   ├── import        # Parse provider settings text into variables
//! │   ├── generate      # Render variables into a provider format
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── record        # Variable + VaultRef types
//!     ├── set           # VariableSet: CRUD, id counter, search
//!     ├── grammar       # Import transforms (mode mini-grammars)
//!     ├── render        # Export transforms (provider formats)
//!     ├── validation    # Field-level input validation
//!     └── workspace     # .gantry.toml management
//! ```
//!
//! # Features
//!
//! - Two variable sets per workspace: build-time args and run-time settings
//! - Bidirectional text transforms for docker and app-settings grammars
//! - Key-vault secret references instead of raw secret values
//! - Monotonic record ids that survive deletions

pub mod cli;
pub mod core;
pub mod error;
