//! chores - A chat-style task manager for your terminal
//!
//! This crate provides a conversational command interface for managing
//! todos, deadlines, and events, stored as JSON in your home directory.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod repl;
pub mod storage;
pub mod task;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::ChoresError;
pub use repl::Session;
pub use task::{Task, TaskKind, TaskList};
