//! Configuration management for chores.
//!
//! This module handles loading configuration from `~/.chores/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, GeneralConfig, ReplConfig};
