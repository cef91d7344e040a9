//! User interface and interaction
//!
//! This module contains all components related to user interaction,
//! including CLI parsing, result printouts, and shell completion
//! generation.

pub mod cli;
pub mod output;

// Re-export commonly used items
pub use cli::{Cli, Commands, cli_to_overrides, print_completions};
