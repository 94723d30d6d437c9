//! Command-line interface definition.
//!
//! This module provides:
//! - Argument parsing (clap derive)
//! - Shell completions generation

pub mod args;
pub mod completions;

pub use args::{Cli, Commands, OutputFormat};
pub use completions::{completion_install_instructions, generate_completions, shell_from_str};
