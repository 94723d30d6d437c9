use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use chores::cli::args::{Cli, Commands};
use chores::cli::completions;
use chores::config::{ColorSetting, Config};
use chores::error::ChoresError;
use chores::repl::Session;
use chores::storage::TaskStore;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ChoresError> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {}
    }

    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        None | Some(Commands::Repl) => {
            let session = Session::open(open_store(cli.data_file)?, format)?;
            chores::repl::run(session, &config)?;
            String::new()
        }
        Some(Commands::Exec { line }) => {
            let mut session = Session::open(open_store(cli.data_file)?, format)?;
            session.handle_line(&line.join(" "))?.text
        }
        Some(Commands::Completions { shell, install }) => {
            let shell = completions::shell_from_str(&shell)
                .ok_or_else(|| ChoresError::Config(format!("Unknown shell: {shell}")))?;
            if install {
                completions::completion_install_instructions(shell)
            } else {
                completions::generate_completions(shell)?
            }
        }
    };

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

fn open_store(data_file: Option<PathBuf>) -> Result<TaskStore, ChoresError> {
    match data_file {
        Some(path) => Ok(TaskStore::with_path(path)),
        None => TaskStore::new(),
    }
}
