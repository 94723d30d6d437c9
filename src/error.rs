//! Error types for chores.

use thiserror::Error;

/// All errors that chores can produce.
#[derive(Error, Debug)]
pub enum ChoresError {
    /// Configuration could not be loaded or is malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The task file exists but could not be understood.
    #[error("Storage error: {0}")]
    Storage(String),

    /// A 1-based task index outside the current list.
    #[error("No task numbered {index}: the list has {len} item(s)")]
    TaskIndex {
        /// The index the user asked for.
        index: i64,
        /// How many tasks the list holds.
        len: usize,
    },

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Shell completion generation failed.
    #[error("Completion error: {0}")]
    Completion(String),

    /// Underlying I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
