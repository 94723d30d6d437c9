use colored::Colorize;

use crate::output::TaskAction;
use crate::task::{Task, TaskKind};

/// Format a numbered task listing as a pretty table
pub fn format_tasks_pretty(items: &[(usize, &Task)], title: &str) -> String {
    if items.is_empty() {
        return format!("{} (0 items)\n  No items", title);
    }

    let mut output = format!("{} ({} items)\n", title, items.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for (index, task) in items {
        output.push_str(&format_task_line(*index, task));
        output.push('\n');
    }

    output
}

/// Format the outcome of a mutating command: a heading plus the task line
pub fn format_task_pretty(action: TaskAction, index: usize, task: &Task) -> String {
    let heading = format!("{}:", action.heading());
    format!("{}\n{}", heading.green().bold(), format_task_line(index, task))
}

/// One listing line: `2. [Done!] pay rent  (by: 2024-12-01)`
fn format_task_line(index: usize, task: &Task) -> String {
    let marker = format!("[{}]", task.status_label());
    let marker = if task.is_done() {
        marker.green()
    } else {
        marker.white()
    };

    let mut line = format!("{}. {} {}", index, marker, task.description.bold());

    // Add the schedule if present
    match &task.kind {
        TaskKind::Todo => {}
        TaskKind::Deadline { by } => {
            line.push_str(&format!("  {}", format!("(by: {by})").yellow()));
        }
        TaskKind::Event { from, to } => {
            line.push_str(&format!("  {}", format!("(from: {from} to: {to})").yellow()));
        }
    }

    line
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

    fn numbered(tasks: &[Task]) -> Vec<(usize, &Task)> {
        tasks.iter().enumerate().map(|(i, t)| (i + 1, t)).collect()
    }

    #[test]
    fn test_format_tasks_pretty_empty_list() {
        let output = format_tasks_pretty(&[], "Tasks");

        assert!(output.contains("Tasks (0 items)"));
        assert!(output.contains("No items"));
    }

    #[test]
    fn test_format_tasks_pretty_single_open_task() {
        let tasks = vec![todo("Buy groceries")];
        let output = format_tasks_pretty(&numbered(&tasks), "Tasks");

        assert!(output.contains("Tasks (1 items)"));
        assert!(output.contains("1."));
        assert!(output.contains("[Not Done]"));
        assert!(output.contains("Buy groceries"));
    }

    #[test]
    fn test_format_tasks_pretty_done_task() {
        let mut task = todo("Finished task");
        task.mark_done();
        let tasks = vec![task];
        let output = format_tasks_pretty(&numbered(&tasks), "Tasks");

        assert!(output.contains("[Done!]"));
        assert!(output.contains("Finished task"));
    }

    #[test]
    fn test_format_tasks_pretty_with_deadline() {
        let tasks = vec![deadline("Pay rent", "2024-12-01")];
        let output = format_tasks_pretty(&numbered(&tasks), "Tasks");

        assert!(output.contains("Pay rent"));
        assert!(output.contains("(by: 2024-12-01)"));
    }

    #[test]
    fn test_format_tasks_pretty_with_event_span() {
        let tasks = vec![Task::new(
            TaskKind::Event {
                from: parse_date_or_datetime("2024-12-01 09:00").unwrap(),
                to: parse_date_or_datetime("2024-12-03").unwrap(),
            },
            "Conference".to_string(),
        )];
        let output = format_tasks_pretty(&numbered(&tasks), "Tasks");

        assert!(output.contains("Conference"));
        assert!(output.contains("(from: 2024-12-01 09:00 to: 2024-12-03)"));
    }

    #[test]
    fn test_format_tasks_pretty_keeps_original_indices() {
        let tasks = vec![todo("third match")];
        let items = vec![(3, &tasks[0])];
        let output = format_tasks_pretty(&items, "Matching tasks");

        assert!(output.contains("3."));
        assert!(!output.contains("1."));
    }

    #[test]
    fn test_format_tasks_pretty_separator_line() {
        let tasks = vec![todo("Test")];
        let output = format_tasks_pretty(&numbered(&tasks), "Tasks");

        assert!(output.contains("─"));
    }

    #[test]
    fn test_format_tasks_pretty_unicode_descriptions() {
        let tasks = vec![todo("Plan fête 🎉")];
        let output = format_tasks_pretty(&numbered(&tasks), "Tasks");

        assert!(output.contains("Plan fête 🎉"));
    }

    #[test]
    fn test_format_task_pretty_added() {
        let task = todo("read a book");
        let output = format_task_pretty(TaskAction::Added, 1, &task);

        assert!(output.contains("Added:"));
        assert!(output.contains("1."));
        assert!(output.contains("read a book"));
    }

    #[test]
    fn test_format_task_pretty_removed_keeps_old_index() {
        let task = todo("gone");
        let output = format_task_pretty(TaskAction::Removed, 2, &task);

        assert!(output.contains("Removed:"));
        assert!(output.contains("2."));
    }
}
