//! Command dispatch against the task list.
//!
//! A [`Session`] owns the task list, its store, and the output format,
//! and turns parsed commands into responses. The same dispatch serves
//! the interactive loop and `chores exec`.

use crate::cli::args::OutputFormat;
use crate::core::{parse, ParsedCommand};
use crate::error::ChoresError;
use crate::output::{self, TaskAction};
use crate::storage::TaskStore;
use crate::task::{Task, TaskKind, TaskList};

/// Usage summary shown by the `help` command.
const HELP_TEXT: &str = "\
Commands:
  list                         show every task
  todo <task name>             add a plain task
  deadline <description> /by <date/time>
                               add a task with a due date
  event <description> /from <date/time> /to <date/time>
                               add a task spanning a time range
  mark <task index>            mark a task as done
  unmark <task index>          mark a task as not done
  delete <task index>          remove a task
  find <search phrase>         search task descriptions
  view <date>                  show tasks scheduled on a date
  help                         show this message
  bye                          end the session

Dates are yyyy-MM-dd, or yyyy-MM-dd HH:mm with a time of day.";

/// Farewell line for `bye` and for end of input.
pub(crate) const FAREWELL: &str = "Bye. Hope to see you again soon!";

/// Result of handling one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Text to show the user. May be empty.
    pub text: String,
    /// Whether the session should end.
    pub quit: bool,
}

impl Response {
    fn show(text: String) -> Self {
        Self { text, quit: false }
    }
}

/// A running task session.
pub struct Session {
    list: TaskList,
    store: TaskStore,
    format: OutputFormat,
}

impl Session {
    /// Open a session, loading the task list from the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the task file exists but cannot be read.
    pub fn open(store: TaskStore, format: OutputFormat) -> Result<Self, ChoresError> {
        let list = store.load()?;
        Ok(Self {
            list,
            store,
            format,
        })
    }

    /// Number of tasks currently in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Parse and execute one line of input.
    ///
    /// Rejected input and out-of-range indices become user-facing text
    /// and leave the session running. Mutating commands persist the list
    /// before returning.
    ///
    /// # Errors
    ///
    /// Returns an error only for infrastructure failures: the task list
    /// cannot be saved, or output cannot be serialized.
    pub fn handle_line(&mut self, input: &str) -> Result<Response, ChoresError> {
        match parse(input) {
            ParsedCommand::List => {
                let text = output::format_tasks(&self.list.numbered(), "Tasks", self.format)?;
                Ok(Response::show(text))
            }
            ParsedCommand::Bye => Ok(Response {
                text: FAREWELL.to_string(),
                quit: true,
            }),
            ParsedCommand::Help => Ok(Response::show(HELP_TEXT.to_string())),
            ParsedCommand::Find { phrase } => {
                let matches = self.list.find(&phrase);
                let text = output::format_tasks(&matches, "Matching tasks", self.format)?;
                Ok(Response::show(text))
            }
            ParsedCommand::View { date } => {
                let day = date.date();
                let matches = self.list.on_date(day);
                let title = format!("Tasks on {day}");
                let text = output::format_tasks(&matches, &title, self.format)?;
                Ok(Response::show(text))
            }
            ParsedCommand::Todo { description } => self.add(Task::new(TaskKind::Todo, description)),
            ParsedCommand::Deadline { description, by } => {
                self.add(Task::new(TaskKind::Deadline { by }, description))
            }
            ParsedCommand::Event {
                description,
                from,
                to,
            } => self.add(Task::new(TaskKind::Event { from, to }, description)),
            ParsedCommand::Mark { index } => self.set_done(index, true),
            ParsedCommand::Unmark { index } => self.set_done(index, false),
            ParsedCommand::Delete { index } => self.delete(index),
            ParsedCommand::Invalid { message } => {
                let text = output::format_rejection(&message, self.format)?;
                Ok(Response::show(text))
            }
        }
    }

    fn add(&mut self, task: Task) -> Result<Response, ChoresError> {
        self.list.add(task);
        self.store.save(&self.list)?;

        let index = self.list.len();
        let task = &self.list.tasks()[index - 1];
        let text = output::format_task(TaskAction::Added, index, task, self.format)?;
        Ok(Response::show(text))
    }

    fn set_done(&mut self, index: i64, done: bool) -> Result<Response, ChoresError> {
        let result = if done {
            self.list.mark(index)
        } else {
            self.list.unmark(index)
        };

        match result {
            Ok(position) => {
                self.store.save(&self.list)?;

                let action = if done {
                    TaskAction::MarkedDone
                } else {
                    TaskAction::MarkedNotDone
                };
                let task = &self.list.tasks()[position];
                let text = output::format_task(action, position + 1, task, self.format)?;
                Ok(Response::show(text))
            }
            Err(e) => {
                let text = output::format_rejection(&e.to_string(), self.format)?;
                Ok(Response::show(text))
            }
        }
    }

    fn delete(&mut self, index: i64) -> Result<Response, ChoresError> {
        match self.list.remove(index) {
            Ok((position, task)) => {
                self.store.save(&self.list)?;

                let text =
                    output::format_task(TaskAction::Removed, position + 1, &task, self.format)?;
                Ok(Response::show(text))
            }
            Err(e) => {
                let text = output::format_rejection(&e.to_string(), self.format)?;
                Ok(Response::show(text))
            }
        }
    }
}
