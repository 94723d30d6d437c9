//! Output formatting for chores.
//!
//! This module provides formatters for displaying task data in the two
//! supported formats: colored text for people, JSON for scripts.

mod json;
mod pretty;

use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::error::ChoresError;
use crate::task::Task;

pub use json::*;
pub use pretty::*;

/// What a mutating command did to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    /// A task was appended to the list.
    Added,
    /// A task was marked as done.
    MarkedDone,
    /// A task was marked as not done.
    MarkedNotDone,
    /// A task was removed from the list.
    Removed,
}

impl TaskAction {
    /// Heading for pretty output.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::MarkedDone => "Marked as done",
            Self::MarkedNotDone => "Marked as not done",
            Self::Removed => "Removed",
        }
    }

    /// Verb for JSON output.
    #[must_use]
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Added => "add",
            Self::MarkedDone => "mark",
            Self::MarkedNotDone => "unmark",
            Self::Removed => "delete",
        }
    }
}

/// Format a numbered task listing based on output format
///
/// # Errors
///
/// Returns `ChoresError::Parse` if JSON serialization fails.
pub fn format_tasks(
    items: &[(usize, &Task)],
    title: &str,
    format: OutputFormat,
) -> Result<String, ChoresError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(items, title)),
        OutputFormat::Json => format_tasks_json(items, title),
    }
}

/// Format the outcome of a mutating command based on output format
///
/// # Errors
///
/// Returns `ChoresError::Parse` if JSON serialization fails.
pub fn format_task(
    action: TaskAction,
    index: usize,
    task: &Task,
    format: OutputFormat,
) -> Result<String, ChoresError> {
    match format {
        OutputFormat::Pretty => Ok(format_task_pretty(action, index, task)),
        OutputFormat::Json => format_task_json(action, index, task),
    }
}

/// Format a rejected command's message based on output format
///
/// The message itself is passed through verbatim in both formats.
///
/// # Errors
///
/// Returns `ChoresError::Parse` if JSON serialization fails.
pub fn format_rejection(message: &str, format: OutputFormat) -> Result<String, ChoresError> {
    match format {
        OutputFormat::Pretty => Ok(message.red().to_string()),
        OutputFormat::Json => format_error_json(message),
    }
}
