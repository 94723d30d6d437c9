//! Path resolution for chores configuration and data files.
//!
//! All chores data is stored in `~/.chores/`:
//! - `config.yaml` - Main configuration file
//! - `tasks.json` - The task list

use std::path::PathBuf;

use crate::error::ChoresError;

/// Paths to chores configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.chores/`
    pub root: PathBuf,
    /// Config file: `~/.chores/config.yaml`
    pub config_file: PathBuf,
    /// Task list: `~/.chores/tasks.json`
    pub data_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ChoresError> {
        let home = std::env::var("HOME").map_err(|_| {
            ChoresError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".chores")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            data_file: root.join("tasks.json"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), ChoresError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                ChoresError::Config(format!("Failed to create directory {:?}: {}", self.root, e))
            })?;
        }

        Ok(())
    }
}
