//! Access to the study's Python environment.
//!
//! - [`interpreter`] - The [`Interpreter`] trait and the process-backed [`SystemPython`]
//! - [`version`] - [`PythonVersion`] parsing and ordering

pub mod interpreter;
pub mod version;

pub use interpreter::{is_valid_module_name, Interpreter, SystemPython};
pub use version::PythonVersion;
