use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "chores")]
#[command(about = "A chat-style task manager for your terminal")]
#[command(long_about = "chores - A chat-style task manager

Manage todos, deadlines, and events by typing commands the way you
would say them. Start the interactive session and chat with your
task list, or run a single command and get back to your shell.

QUICK START:
  chores                            Start the interactive session
  chores exec \"todo buy milk\"       Add a todo and exit
  chores exec list                  Show all tasks and exit
  chores exec \"deadline tax return /by 2024-04-15\"   Add a deadline

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  chores <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    /// When omitted, the default comes from ~/.chores/config.yaml.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Path to the task file
    ///
    /// Overrides the default location (~/.chores/tasks.json).
    /// Handy for keeping separate lists or pointing at a scratch file.
    #[arg(long, env = "CHORES_DATA_FILE", global = true)]
    pub data_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive session
    ///
    /// Opens a prompt where you type commands and get immediate replies.
    /// The session keeps going until you type 'bye' or close the input.
    /// Running 'chores' with no subcommand does the same thing.
    ///
    /// # Session Commands
    ///
    ///   list                                          Show all tasks
    ///   todo <description>                            Add a todo
    ///   deadline <description> /by <date>             Add a deadline
    ///   event <description> /from <date> /to <date>   Add an event
    ///   mark <number> / unmark <number>               Toggle a task
    ///   delete <number>                               Remove a task
    ///   find <phrase>                                 Search descriptions
    ///   view <date>                                   Tasks on a day
    ///   help                                          Show the command list
    ///   bye                                           Exit
    ///
    /// Dates are yyyy-MM-dd, with an optional HH:mm time of day.
    ///
    /// # Examples
    ///
    ///   chores repl
    ///   chores              Same thing, fewer keystrokes
    Repl,

    /// Run a single session command and exit
    ///
    /// Takes the same free-text commands as the interactive session,
    /// applies them to the task file, and prints the reply. Unquoted
    /// words are joined, so 'chores exec todo buy milk' works too.
    ///
    /// # Examples
    ///
    ///   chores exec list
    ///   chores exec "todo buy milk"
    ///   chores exec "deadline tax return /by 2024-04-15"
    ///   chores exec "event standup /from 2024-03-01 09:00 /to 2024-03-01 09:15"
    ///   chores exec "mark 1"
    ///   chores x list -o json     Short alias, JSON for scripting
    #[command(alias = "x")]
    Exec {
        /// The command to run, in session syntax
        #[arg(required = true)]
        line: Vec<String>,
    },

    /// Generate shell completions
    ///
    /// Outputs a completion script for the specified shell.
    /// Redirect to a file or source directly.
    ///
    /// # Examples
    ///
    ///   chores completions bash > ~/.bash_completion.d/chores
    ///   chores completions zsh > ~/.zfunc/_chores
    ///   chores completions fish --install   Show install instructions
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,

        /// Show installation instructions instead of the script
        #[arg(long, short = 'i')]
        install: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    // ==================== CLI Parsing Tests ====================

    #[test]
    fn test_cli_no_subcommand() {
        let cli = Cli::try_parse_from(["chores"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_repl_command() {
        let cli = Cli::try_parse_from(["chores", "repl"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Repl)));
    }

    #[test]
    fn test_cli_exec_command() {
        let cli = Cli::try_parse_from(["chores", "exec", "todo", "buy", "milk"]).unwrap();
        if let Some(Commands::Exec { line }) = cli.command {
            assert_eq!(line, vec!["todo", "buy", "milk"]);
        } else {
            panic!("Expected Exec command");
        }
    }

    #[test]
    fn test_cli_exec_alias() {
        let cli = Cli::try_parse_from(["chores", "x", "list"]).unwrap();
        if let Some(Commands::Exec { line }) = cli.command {
            assert_eq!(line, vec!["list"]);
        } else {
            panic!("Expected Exec command");
        }
    }

    #[test]
    fn test_cli_exec_requires_line() {
        assert!(Cli::try_parse_from(["chores", "exec"]).is_err());
    }

    #[test]
    fn test_cli_completions_command() {
        let cli = Cli::try_parse_from(["chores", "completions", "zsh"]).unwrap();
        if let Some(Commands::Completions { shell, install }) = cli.command {
            assert_eq!(shell, "zsh");
            assert!(!install);
        } else {
            panic!("Expected Completions command");
        }
    }

    #[test]
    fn test_cli_completions_install_flag() {
        let cli = Cli::try_parse_from(["chores", "completions", "bash", "--install"]).unwrap();
        if let Some(Commands::Completions { install, .. }) = cli.command {
            assert!(install);
        } else {
            panic!("Expected Completions command");
        }
    }

    // ==================== Output Format Tests ====================

    #[test]
    fn test_cli_output_format_unset() {
        let cli = Cli::try_parse_from(["chores"]).unwrap();
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_cli_output_format_json() {
        let cli = Cli::try_parse_from(["chores", "--output", "json"]).unwrap();
        assert!(matches!(cli.output, Some(OutputFormat::Json)));
    }

    #[test]
    fn test_cli_output_format_short() {
        let cli = Cli::try_parse_from(["chores", "-o", "pretty"]).unwrap();
        assert!(matches!(cli.output, Some(OutputFormat::Pretty)));
    }

    #[test]
    fn test_cli_output_format_global() {
        let cli = Cli::try_parse_from(["chores", "exec", "list", "-o", "json"]).unwrap();
        assert!(matches!(cli.output, Some(OutputFormat::Json)));
    }

    #[test]
    fn test_cli_data_file_flag() {
        let cli = Cli::try_parse_from(["chores", "--data-file", "/tmp/tasks.json"]).unwrap();
        assert_eq!(cli.data_file, Some(PathBuf::from("/tmp/tasks.json")));
    }

    #[test]
    fn test_output_format_default() {
        assert!(matches!(OutputFormat::default(), OutputFormat::Pretty));
    }
}
