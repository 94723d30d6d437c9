//! The interactive read-eval-print loop.
//!
//! chores is conversational: it greets, then reads one command per line
//! until `bye` or end of input.

mod session;

pub use session::{Response, Session};

use std::io::{self, Write};

use colored::Colorize;

use crate::config::Config;
use crate::error::ChoresError;

/// Run the interactive loop until `bye` or end of input.
///
/// # Errors
///
/// Returns an error if reading input fails, the task list cannot be
/// saved, or output cannot be serialized.
pub fn run(mut session: Session, config: &Config) -> Result<(), ChoresError> {
    if config.repl.greeting {
        print_greeting(session.len());
    }

    let mut input = String::new();
    loop {
        print!("{}", config.repl.prompt);
        io::stdout().flush().map_err(ChoresError::Io)?;

        input.clear();
        let bytes_read = io::stdin().read_line(&mut input).map_err(ChoresError::Io)?;
        if bytes_read == 0 {
            // End of input gets the same goodbye as `bye`
            println!("\n{}", session::FAREWELL);
            break;
        }

        let response = session.handle_line(&input)?;
        if !response.text.is_empty() {
            println!("{}", response.text);
        }
        if response.quit {
            break;
        }
    }

    Ok(())
}

fn print_greeting(task_count: usize) {
    println!("{}", "Hello! I'm chores.".bold());
    if task_count == 1 {
        println!("You have 1 task.");
    } else {
        println!("You have {task_count} tasks.");
    }
    println!(
        "What can I do for you? Type {} for the command list.",
        "help".cyan()
    );
}
