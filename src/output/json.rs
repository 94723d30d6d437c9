//! JSON output formatting for chores.
//!
//! This module renders task data as pretty-printed JSON for scripting.

use serde::Serialize;
use serde_json::json;

use crate::error::ChoresError;
use crate::output::TaskAction;
use crate::task::Task;

/// A task wearing its 1-based display index for output.
#[derive(Serialize)]
struct IndexedTask<'a> {
    index: usize,
    #[serde(flatten)]
    task: &'a Task,
}

/// Format a numbered task listing as JSON
///
/// # Errors
///
/// Returns `ChoresError::Parse` if JSON serialization fails.
pub fn format_tasks_json(items: &[(usize, &Task)], list_name: &str) -> Result<String, ChoresError> {
    let items: Vec<IndexedTask> = items
        .iter()
        .map(|(index, task)| IndexedTask {
            index: *index,
            task,
        })
        .collect();

    let output = json!({
        "list": list_name,
        "count": items.len(),
        "items": items
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the outcome of a mutating command as JSON
///
/// # Errors
///
/// Returns `ChoresError::Parse` if JSON serialization fails.
pub fn format_task_json(
    action: TaskAction,
    index: usize,
    task: &Task,
) -> Result<String, ChoresError> {
    let output = json!({
        "action": action.verb(),
        "index": index,
        "task": task
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a rejected command's message as JSON
///
/// # Errors
///
/// Returns `ChoresError::Parse` if JSON serialization fails.
pub fn format_error_json(message: &str) -> Result<String, ChoresError> {
    let output = json!({
        "error": message
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
