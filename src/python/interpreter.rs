//! Interpreter access used by the readiness probes.
//!
//! [`Interpreter`] is the seam between the checker and the Python
//! environment. [`SystemPython`] spawns the real interpreter; tests use
//! in-memory implementations.

use crate::error::{Result, StudyCheckError};
use crate::python::version::PythonVersion;
use regex::Regex;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::LazyLock;
use std::time::Instant;

/// Regex for a dotted Python module path, e.g. `torch` or `torch.nn`.
static MODULE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$")
        .expect("MODULE_REGEX must compile")
});

/// Whether `name` is safe to splice into an `import` statement.
pub fn is_valid_module_name(name: &str) -> bool {
    MODULE_REGEX.is_match(name)
}

/// Questions the readiness checker asks of a Python environment.
pub trait Interpreter {
    /// The interpreter's version.
    fn version(&self) -> Result<PythonVersion>;

    /// Whether `module` imports, optionally with `search_path` prepended to
    /// the module search path.
    fn can_import(&self, module: &str, search_path: Option<&Path>) -> Result<bool>;
}

/// The interpreter found on PATH (or at an explicit path).
///
/// `python -c` puts the working directory first on the module search
/// path, so imports resolve against `working_dir` when one is set.
#[derive(Debug, Clone)]
pub struct SystemPython {
    executable: String,
    working_dir: Option<PathBuf>,
}

impl SystemPython {
    /// Create a handle for `executable`.
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            working_dir: None,
        }
    }

    /// Run the interpreter from `dir`, normally the project root.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// The configured executable.
    pub fn executable(&self) -> &str {
        &self.executable
    }

    fn run(&self, args: &[&str], search_path: Option<&Path>) -> Result<Output> {
        let start = Instant::now();
        let mut cmd = Command::new(&self.executable);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }
        if let Some(dir) = search_path {
            cmd.env("PYTHONPATH", prepend_search_path(dir));
        }

        let output = cmd
            .output()
            .map_err(|e| StudyCheckError::InterpreterUnavailable {
                executable: self.executable.clone(),
                message: e.to_string(),
            })?;

        tracing::debug!(
            "{} {:?} exited with {:?} in {:?}",
            self.executable,
            args,
            output.status.code(),
            start.elapsed()
        );
        Ok(output)
    }
}

impl Interpreter for SystemPython {
    fn version(&self) -> Result<PythonVersion> {
        let output = self.run(&["--version"], None)?;
        // Python 2 and some distributions print the banner to stderr.
        let banner = format!(
            "{}{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        PythonVersion::from_banner(&banner)
    }

    fn can_import(&self, module: &str, search_path: Option<&Path>) -> Result<bool> {
        if !is_valid_module_name(module) {
            return Ok(false);
        }
        let statement = format!("import {}", module);
        let output = self.run(&["-c", &statement], search_path)?;
        if !output.status.success() {
            tracing::debug!(
                "import {} failed: {}",
                module,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(output.status.success())
    }
}

/// `dir` followed by any existing `PYTHONPATH` entries.
fn prepend_search_path(dir: &Path) -> OsString {
    let mut entries = vec![dir.to_path_buf()];
    if let Some(existing) = std::env::var_os("PYTHONPATH") {
        entries.extend(std::env::split_paths(&existing));
    }
    std::env::join_paths(entries).unwrap_or_else(|_| dir.as_os_str().to_os_string())
}
