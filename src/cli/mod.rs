//! Command-line interface for studycheck.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, ConfigArgs, PYTHON_ENV};
pub use commands::{Command, CommandDispatcher, CommandResult};
