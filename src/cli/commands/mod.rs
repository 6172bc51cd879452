//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. A bare `studycheck` runs
//! [`check::CheckCommand`].

pub mod check;
pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod display;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
