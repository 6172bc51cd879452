//! Environment readiness checks.
//!
//! This module decides whether a study workstation is ready: it probes
//! the Python interpreter, packages, directory layout, sample audio and
//! model checkpoint, and folds the results into one verdict.
//!
//! # Modules
//!
//! - [`checker`] - [`ReadinessChecker`] and the [`Check`] definition
//! - [`probe`] - The [`Probe`] conditions behind each check
//! - [`status`] - [`CheckResult`] and the aggregated [`RunReport`]
//!
//! # Example
//!
//! ```no_run
//! use studycheck::config::StudyConfig;
//! use studycheck::python::SystemPython;
//! use studycheck::readiness::ReadinessChecker;
//!
//! let config = StudyConfig::default();
//! let python = SystemPython::new(config.python.executable.clone());
//! let report = ReadinessChecker::new(&config, std::path::Path::new("."), &python).run();
//! println!("ready: {}", report.is_ready());
//! ```

pub mod checker;
pub mod probe;
pub mod status;

pub use checker::{Check, ReadinessChecker};
pub use probe::{Probe, ProbeOutcome};
pub use status::{CheckGroup, CheckResult, RunReport, Severity};
