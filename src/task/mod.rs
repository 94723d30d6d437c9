//! Task model for chores.
//!
//! A task is a free-text description with a two-state done flag.
//! Deadlines and events add schedule payloads on top of that.

mod list;
mod types;

pub use list::TaskList;
pub use types::{Task, TaskKind};
