//! Task types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::DateOrDateTime;

/// What kind of task this is, along with its schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TaskKind {
    /// An unscheduled task.
    Todo,
    /// A task due by a date or date-time.
    Deadline {
        /// When it is due.
        by: DateOrDateTime,
    },
    /// A task spanning a start and an end.
    Event {
        /// When it starts.
        from: DateOrDateTime,
        /// When it ends.
        to: DateOrDateTime,
    },
}

/// A single task: a description, a done flag, and a kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Free-text description, stored exactly as given.
    pub description: String,
    /// Completion flag. Every task starts not done.
    #[serde(default)]
    pub done: bool,
    /// Kind and schedule.
    #[serde(flatten)]
    pub kind: TaskKind,
}

impl Task {
    /// Create a task that is not yet done.
    #[must_use]
    pub fn new(kind: TaskKind, description: String) -> Self {
        Self {
            description,
            done: false,
            kind,
        }
    }

    /// Mark the task as done. Marking a done task again changes nothing.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Mark the task as not done. Unmarking an open task changes nothing.
    pub fn mark_not_done(&mut self) {
        self.done = false;
    }

    /// Whether the task is done.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Status label shown in listings.
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        if self.done {
            "Done!"
        } else {
            "Not Done"
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.status_label(), self.description)
    }
}
