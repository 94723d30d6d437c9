//! Free-text command parser.
//!
//! Turns a raw line like "deadline pay rent /by 2024-12-01" into a
//! structured [`ParsedCommand`]. Parsing itself never fails: anything
//! the grammar rejects comes back as [`ParsedCommand::Invalid`]
//! carrying the message to show the user.

use crate::core::{parse_date_or_datetime, DateOrDateTime};

/// Command keywords recognized as the first word of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    List,
    Bye,
    Help,
    Find,
    View,
    Todo,
    Deadline,
    Event,
    Mark,
    Unmark,
    Delete,
}

impl Keyword {
    /// Match the first token of a line, case-insensitively.
    fn from_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "list" => Some(Self::List),
            "bye" => Some(Self::Bye),
            "help" => Some(Self::Help),
            "find" => Some(Self::Find),
            "view" => Some(Self::View),
            "todo" => Some(Self::Todo),
            "deadline" => Some(Self::Deadline),
            "event" => Some(Self::Event),
            "mark" => Some(Self::Mark),
            "unmark" => Some(Self::Unmark),
            "delete" => Some(Self::Delete),
            _ => None,
        }
    }
}

/// A user command, parsed from one line of free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    /// Show every task.
    List,
    /// End the session.
    Bye,
    /// Show usage for all commands.
    Help,
    /// Search task descriptions for a phrase.
    Find {
        /// Search phrase, case-insensitive at match time.
        phrase: String,
    },
    /// Show tasks scheduled on a day.
    View {
        /// The day to look at. A time of day, if given, is ignored.
        date: DateOrDateTime,
    },
    /// Add a plain task.
    Todo {
        /// Task description, original casing preserved.
        description: String,
    },
    /// Add a task with a due date.
    Deadline {
        /// Task description.
        description: String,
        /// When it is due.
        by: DateOrDateTime,
    },
    /// Add a task spanning a time range.
    Event {
        /// Task description. May be empty.
        description: String,
        /// When it starts.
        from: DateOrDateTime,
        /// When it ends.
        to: DateOrDateTime,
    },
    /// Mark a task as done, by 1-based index.
    Mark {
        /// Index as typed, including zero or negatives.
        index: i64,
    },
    /// Mark a task as not done, by 1-based index.
    Unmark {
        /// Index as typed, including zero or negatives.
        index: i64,
    },
    /// Remove a task, by 1-based index.
    Delete {
        /// Index as typed, including zero or negatives.
        index: i64,
    },
    /// Anything the grammar rejects.
    Invalid {
        /// The message to show the user, verbatim.
        message: String,
    },
}

fn invalid(message: impl Into<String>) -> ParsedCommand {
    ParsedCommand::Invalid {
        message: message.into(),
    }
}

/// Parse one line of user input.
///
/// The first whitespace-delimited token picks the command and is matched
/// case-insensitively; the remaining tokens are its arguments. Unknown
/// keywords, missing arguments, and malformed dates all come back as
/// [`ParsedCommand::Invalid`] rather than an error.
#[must_use]
pub fn parse(input: &str) -> ParsedCommand {
    let tokens: Vec<&str> = input.split_whitespace().collect();

    let first = match tokens.first() {
        Some(token) => *token,
        None => return invalid("No user input"),
    };

    let keyword = match Keyword::from_token(first) {
        Some(keyword) => keyword,
        None => return invalid("Could not understand your command!"),
    };

    match keyword {
        // Extra tokens after these are ignored
        Keyword::List => ParsedCommand::List,
        Keyword::Bye => ParsedCommand::Bye,
        Keyword::Help => ParsedCommand::Help,
        Keyword::Find => parse_find(&tokens),
        Keyword::View => parse_view(&tokens),
        Keyword::Todo => parse_todo(&tokens),
        Keyword::Deadline => parse_deadline(&tokens),
        Keyword::Event => parse_event(&tokens),
        Keyword::Mark => parse_indexed(&tokens, "Mark", |index| ParsedCommand::Mark { index }),
        Keyword::Unmark => parse_indexed(&tokens, "Unmark", |index| ParsedCommand::Unmark { index }),
        Keyword::Delete => parse_indexed(&tokens, "Delete", |index| ParsedCommand::Delete { index }),
    }
}

fn parse_find(tokens: &[&str]) -> ParsedCommand {
    if tokens.len() > 1 {
        ParsedCommand::Find {
            phrase: tokens[1..].join(" "),
        }
    } else {
        invalid("Find command missing search phrase. Usage: find <search phrase>")
    }
}

fn parse_view(tokens: &[&str]) -> ParsedCommand {
    if tokens.len() == 2 {
        match parse_date_or_datetime(tokens[1]) {
            Some(date) => ParsedCommand::View { date },
            None => invalid("Invalid date format. Usage: view <date>"),
        }
    } else {
        invalid("View command missing date. Usage: view <date>")
    }
}

fn parse_todo(tokens: &[&str]) -> ParsedCommand {
    if tokens.len() > 1 {
        ParsedCommand::Todo {
            description: tokens[1..].join(" "),
        }
    } else {
        invalid("Todo command missing the task name. Usage: todo <task name>")
    }
}

fn parse_deadline(tokens: &[&str]) -> ParsedCommand {
    // The first `/by` splits the line; later copies land in the date text
    let by = tokens.iter().position(|token| *token == "/by");

    match by {
        Some(by) if by > 1 && by < tokens.len() - 1 => {
            let description = tokens[1..by].join(" ");
            match parse_date_or_datetime(&tokens[by + 1..].join(" ")) {
                Some(date) => ParsedCommand::Deadline {
                    description,
                    by: date,
                },
                None => invalid("Deadline invalid date!"),
            }
        }
        _ => invalid("Deadline command is missing the task description or date/time component. Usage: deadline <task description> /by <date/time>"),
    }
}

fn parse_event(tokens: &[&str]) -> ParsedCommand {
    // The last `/from` and `/to` split the line; earlier copies land in
    // the description
    let mut from_marker = None;
    let mut to_marker = None;
    for (i, token) in tokens.iter().enumerate() {
        match *token {
            "/from" => from_marker = Some(i),
            "/to" => to_marker = Some(i),
            _ => {}
        }
    }

    match (from_marker, to_marker) {
        (Some(from), Some(to)) if from < to && to < tokens.len() - 1 => {
            let description = tokens[1..from].join(" ");
            let from_date = parse_date_or_datetime(&tokens[from + 1..to].join(" "));
            let to_date = parse_date_or_datetime(&tokens[to + 1..].join(" "));
            match (from_date, to_date) {
                (Some(from), Some(to)) => ParsedCommand::Event {
                    description,
                    from,
                    to,
                },
                _ => invalid("Invalid date or date-time format for 'event' command. It should be in the yyyy-MM-dd or yyyy-MM-dd HH:mm format!"),
            }
        }
        _ => invalid("Event command is missing the task description, 'from,' or 'to' components. Usage: event <task description> /from <date/time> /to <date/time>"),
    }
}

fn parse_indexed(tokens: &[&str], label: &str, build: fn(i64) -> ParsedCommand) -> ParsedCommand {
    if tokens.len() == 2 {
        match tokens[1].parse::<i64>() {
            Ok(index) => build(index),
            Err(_) => invalid(format!("{label} should be followed by a number!")),
        }
    } else {
        invalid(format!("{label} command missing Task Index"))
    }
}
