//! Task persistence for chores.
//!
//! The whole task list lives in one pretty-printed JSON document,
//! by default `~/.chores/tasks.json`.

use std::path::PathBuf;

use crate::config::Paths;
use crate::error::ChoresError;
use crate::task::TaskList;

/// File-backed store for the task list.
pub struct TaskStore {
    /// Path to the JSON document.
    data_file: PathBuf,
}

impl TaskStore {
    /// Create a store at the default location, creating `~/.chores/`
    /// if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined or
    /// the data directory cannot be created.
    pub fn new() -> Result<Self, ChoresError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;

        Ok(Self {
            data_file: paths.data_file,
        })
    }

    /// Create a store at a custom path (for `--data-file` and testing).
    #[must_use]
    pub fn with_path(data_file: PathBuf) -> Self {
        Self { data_file }
    }

    /// Load the task list.
    ///
    /// A missing file is simply an empty list. An existing file that
    /// cannot be read or parsed is an error; it is never silently
    /// replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<TaskList, ChoresError> {
        if !self.data_file.exists() {
            return Ok(TaskList::new());
        }

        let content = std::fs::read_to_string(&self.data_file).map_err(ChoresError::Io)?;
        serde_json::from_str(&content).map_err(|e| {
            ChoresError::Storage(format!(
                "Failed to parse task file {}: {e}",
                self.data_file.display()
            ))
        })
    }

    /// Write the task list out as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the
    /// file cannot be written.
    pub fn save(&self, tasks: &TaskList) -> Result<(), ChoresError> {
        if let Some(parent) = self.data_file.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(ChoresError::Io)?;
            }
        }

        let content = serde_json::to_string_pretty(tasks)?;
        std::fs::write(&self.data_file, content).map_err(ChoresError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_date_or_datetime;
    use crate::task::{Task, TaskKind};
    use tempfile::TempDir;

    fn store_in(temp_dir: &TempDir) -> TaskStore {
        TaskStore::with_path(temp_dir.path().join("tasks.json"))
    }

    #[test]
    fn test_load_missing_file_is_empty_list() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        let list = store.load().unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        let mut list = TaskList::new();
        list.add(Task::new(TaskKind::Todo, "read".to_string()));
        list.add(Task::new(
            TaskKind::Deadline {
                by: parse_date_or_datetime("2024-12-01 23:59").unwrap(),
            },
            "submit report".to_string(),
        ));
        list.mark(1).unwrap();

        store.save(&list).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded.len(), 2);
        assert!(loaded.tasks()[0].is_done());
        assert!(!loaded.tasks()[1].is_done());
        assert_eq!(loaded.tasks()[1].description, "submit report");
        match &loaded.tasks()[1].kind {
            TaskKind::Deadline { by } => assert!(by.has_time()),
            other => panic!("expected deadline, got {other:?}"),
        }
    }

    #[test]
    fn test_file_is_a_json_array() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        let mut list = TaskList::new();
        list.add(Task::new(TaskKind::Todo, "read".to_string()));
        store.save(&list).unwrap();

        let content = std::fs::read_to_string(temp_dir.path().join("tasks.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert!(value.is_array());
        assert_eq!(value.as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_file_is_an_error_not_a_reset() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        std::fs::write(temp_dir.path().join("tasks.json"), "this is not json").unwrap();

        let result = store.load();
        assert!(matches!(result, Err(ChoresError::Storage(_))));

        // The broken file is still there for the user to inspect
        let content = std::fs::read_to_string(temp_dir.path().join("tasks.json")).unwrap();
        assert_eq!(content, "this is not json");
    }

    #[test]
    fn test_save_creates_missing_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let store = TaskStore::with_path(temp_dir.path().join("nested/dir/tasks.json"));

        store.save(&TaskList::new()).unwrap();
        assert!(temp_dir.path().join("nested/dir/tasks.json").exists());
    }
}
