//! studycheck - Environment readiness checker for the voice-conversion user study.
//!
//! Before a participant session, `studycheck` verifies that the workstation
//! has a recent enough Python, the required packages, the expected
//! directory layout with sample recordings per emotion category, and a
//! usable voice-conversion project checkout. It prints one line per check
//! and a single ready / not-ready verdict.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, layering, and validation
//! - [`error`] - Error types and result aliases
//! - [`python`] - Interpreter probing
//! - [`readiness`] - Checks, probes, and the run report
//! - [`sys`] - Home directory and path resolution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use studycheck::python::PythonVersion;
//!
//! let found = PythonVersion::parse("3.11.4").unwrap();
//! let minimum = PythonVersion::parse("3.8").unwrap();
//! assert!(found.at_least(&minimum));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod python;
pub mod readiness;
pub mod sys;
pub mod ui;

pub use error::{Result, StudyCheckError};
