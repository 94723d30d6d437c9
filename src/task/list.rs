//! The ordered task list and its queries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ChoresError;
use crate::task::types::{Task, TaskKind};

/// The ordered task catalogue.
///
/// Order is insertion order, and every index shown to or taken from the
/// user is 1-based. Methods taking an `i64` index validate it here, so
/// callers can pass whatever the parser produced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Append a task at the end of the list.
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// All tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// All tasks paired with their 1-based display indices.
    #[must_use]
    pub fn numbered(&self) -> Vec<(usize, &Task)> {
        self.tasks
            .iter()
            .enumerate()
            .map(|(i, task)| (i + 1, task))
            .collect()
    }

    /// Translate a 1-based user index into a vec position.
    fn position(&self, index: i64) -> Result<usize, ChoresError> {
        let len = self.tasks.len();
        match usize::try_from(index) {
            Ok(i) if i >= 1 && i <= len => Ok(i - 1),
            _ => Err(ChoresError::TaskIndex { index, len }),
        }
    }

    /// Mark the task at a 1-based index as done and return its position.
    ///
    /// # Errors
    ///
    /// Returns [`ChoresError::TaskIndex`] if the index is outside the list.
    pub fn mark(&mut self, index: i64) -> Result<usize, ChoresError> {
        let position = self.position(index)?;
        self.tasks[position].mark_done();
        Ok(position)
    }

    /// Mark the task at a 1-based index as not done and return its position.
    ///
    /// # Errors
    ///
    /// Returns [`ChoresError::TaskIndex`] if the index is outside the list.
    pub fn unmark(&mut self, index: i64) -> Result<usize, ChoresError> {
        let position = self.position(index)?;
        self.tasks[position].mark_not_done();
        Ok(position)
    }

    /// Remove the task at a 1-based index.
    ///
    /// Returns the position it occupied and the task itself. Later tasks
    /// shift down one position.
    ///
    /// # Errors
    ///
    /// Returns [`ChoresError::TaskIndex`] if the index is outside the list.
    pub fn remove(&mut self, index: i64) -> Result<(usize, Task), ChoresError> {
        let position = self.position(index)?;
        Ok((position, self.tasks.remove(position)))
    }

    /// Case-insensitive substring search over descriptions.
    ///
    /// Matches keep the 1-based indices they have in the full list.
    #[must_use]
    pub fn find(&self, phrase: &str) -> Vec<(usize, &Task)> {
        let needle = phrase.to_lowercase();
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.description.to_lowercase().contains(&needle))
            .map(|(i, task)| (i + 1, task))
            .collect()
    }

    /// Tasks scheduled on a calendar day.
    ///
    /// Deadlines match on their due day, events match every day from
    /// start to end inclusive, and plain todos never match. Matches keep
    /// the 1-based indices they have in the full list.
    #[must_use]
    pub fn on_date(&self, day: NaiveDate) -> Vec<(usize, &Task)> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| match &task.kind {
                TaskKind::Todo => false,
                TaskKind::Deadline { by } => by.date() == day,
                TaskKind::Event { from, to } => from.date() <= day && day <= to.date(),
            })
            .map(|(i, task)| (i + 1, task))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_date_or_datetime;

    fn todo(description: &str) -> Task {
        Task::new(TaskKind::Todo, description.to_string())
    }

    fn deadline(description: &str, by: &str) -> Task {
        Task::new(
            TaskKind::Deadline {
                by: parse_date_or_datetime(by).unwrap(),
            },
            description.to_string(),
        )
    }

    fn event(description: &str, from: &str, to: &str) -> Task {
        Task::new(
            TaskKind::Event {
                from: parse_date_or_datetime(from).unwrap(),
                to: parse_date_or_datetime(to).unwrap(),
            },
            description.to_string(),
        )
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ==================== Basic Operations ====================

    #[test]
    fn test_add_appends_in_order() {
        let mut list = TaskList::new();
        assert!(list.is_empty());

        list.add(todo("first"));
        list.add(todo("second"));

        assert_eq!(list.len(), 2);
        assert_eq!(list.tasks()[0].description, "first");
        assert_eq!(list.tasks()[1].description, "second");
    }

    #[test]
    fn test_numbered_counts_from_one() {
        let mut list = TaskList::new();
        list.add(todo("first"));
        list.add(todo("second"));

        let numbered = list.numbered();
        assert_eq!(numbered[0].0, 1);
        assert_eq!(numbered[1].0, 2);
    }

    // ==================== Index Bounds ====================

    #[test]
    fn test_mark_and_unmark_by_index() {
        let mut list = TaskList::new();
        list.add(todo("read"));

        let position = list.mark(1).unwrap();
        assert_eq!(position, 0);
        assert!(list.tasks()[0].is_done());

        list.unmark(1).unwrap();
        assert!(!list.tasks()[0].is_done());
    }

    #[test]
    fn test_out_of_range_indices_are_rejected() {
        let mut list = TaskList::new();
        list.add(todo("read"));

        for index in [0, -1, 2, 100] {
            let err = list.mark(index).unwrap_err();
            match err {
                ChoresError::TaskIndex { index: i, len } => {
                    assert_eq!(i, index);
                    assert_eq!(len, 1);
                }
                other => panic!("expected TaskIndex, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_remove_returns_task_and_shifts_the_rest() {
        let mut list = TaskList::new();
        list.add(todo("first"));
        list.add(todo("second"));
        list.add(todo("third"));

        let (position, removed) = list.remove(2).unwrap();
        assert_eq!(position, 1);
        assert_eq!(removed.description, "second");

        // "third" moved down into index 2
        assert_eq!(list.len(), 2);
        assert_eq!(list.tasks()[1].description, "third");
        list.mark(2).unwrap();
        assert!(list.tasks()[1].is_done());
    }

    #[test]
    fn test_remove_from_empty_list() {
        let mut list = TaskList::new();
        assert!(list.remove(1).is_err());
    }

    // ==================== Find ====================

    #[test]
    fn test_find_is_case_insensitive_substring_match() {
        let mut list = TaskList::new();
        list.add(todo("Read a BOOK"));
        list.add(todo("wash the car"));
        list.add(todo("book flights"));

        let matches = list.find("bOOk");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].0, 1);
        assert_eq!(matches[1].0, 3);
    }

    #[test]
    fn test_find_without_matches() {
        let mut list = TaskList::new();
        list.add(todo("read"));
        assert!(list.find("garden").is_empty());
    }

    // ==================== On Date ====================

    #[test]
    fn test_deadline_matches_only_its_day() {
        let mut list = TaskList::new();
        list.add(deadline("pay rent", "2024-12-01"));

        assert_eq!(list.on_date(day(2024, 12, 1)).len(), 1);
        assert!(list.on_date(day(2024, 11, 30)).is_empty());
        assert!(list.on_date(day(2024, 12, 2)).is_empty());
    }

    #[test]
    fn test_deadline_with_time_matches_its_calendar_day() {
        let mut list = TaskList::new();
        list.add(deadline("submit", "2024-12-01 23:59"));

        assert_eq!(list.on_date(day(2024, 12, 1)).len(), 1);
    }

    #[test]
    fn test_event_matches_every_day_of_its_span() {
        let mut list = TaskList::new();
        list.add(event("conference", "2024-12-01 09:00", "2024-12-03"));

        assert_eq!(list.on_date(day(2024, 12, 1)).len(), 1);
        assert_eq!(list.on_date(day(2024, 12, 2)).len(), 1);
        assert_eq!(list.on_date(day(2024, 12, 3)).len(), 1);
        assert!(list.on_date(day(2024, 11, 30)).is_empty());
        assert!(list.on_date(day(2024, 12, 4)).is_empty());
    }

    #[test]
    fn test_todos_never_match_a_date() {
        let mut list = TaskList::new();
        list.add(todo("read"));
        assert!(list.on_date(day(2024, 12, 1)).is_empty());
    }
}
