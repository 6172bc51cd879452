//! Probes: the conditions behind each readiness check.
//!
//! A [`Probe`] inspects one piece of ambient state (the interpreter, a
//! path, a directory listing, an environment variable) and reports a
//! [`ProbeOutcome`]. Probes never fail: interpreter and filesystem errors
//! become a failed outcome with the error recorded in `details`.

use crate::python::{Interpreter, PythonVersion};
use std::fs;
use std::path::{Path, PathBuf};

/// How to check one condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Probe {
    /// Interpreter version is at least `minimum`
    InterpreterVersion { minimum: PythonVersion },

    /// Module imports, optionally with an extra search path
    Import {
        module: String,
        search_path: Option<PathBuf>,
    },

    /// File or directory exists
    PathExists(PathBuf),

    /// Path exists and is a directory
    DirExists(PathBuf),

    /// Directory holds at least one file with `extension`
    FileCount { dir: PathBuf, extension: String },

    /// Any of the candidate paths exists
    AnyPathExists(Vec<PathBuf>),

    /// Environment variable is set and non-empty
    EnvVarSet(String),
}

/// Result of evaluating a probe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProbeOutcome {
    /// Whether the condition held
    pub passed: bool,
    /// What was observed (version, file count, matched path)
    pub observed: Option<String>,
    /// Supporting detail lines
    pub details: Vec<String>,
}

impl ProbeOutcome {
    fn pass() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    fn fail() -> Self {
        Self::default()
    }

    fn from_bool(passed: bool) -> Self {
        Self {
            passed,
            ..Default::default()
        }
    }

    fn observed(mut self, value: impl Into<String>) -> Self {
        self.observed = Some(value.into());
        self
    }

    fn detail(mut self, line: impl Into<String>) -> Self {
        self.details.push(line.into());
        self
    }
}

impl Probe {
    /// Evaluate against the ambient filesystem and `interpreter`.
    pub fn evaluate(&self, interpreter: &dyn Interpreter) -> ProbeOutcome {
        match self {
            Probe::InterpreterVersion { minimum } => match interpreter.version() {
                Ok(version) => {
                    ProbeOutcome::from_bool(version.at_least(minimum)).observed(version.to_string())
                }
                Err(e) => ProbeOutcome::fail().detail(e.to_string()),
            },
            Probe::Import {
                module,
                search_path,
            } => match interpreter.can_import(module, search_path.as_deref()) {
                Ok(ok) => ProbeOutcome::from_bool(ok),
                Err(e) => ProbeOutcome::fail().detail(e.to_string()),
            },
            Probe::PathExists(path) => ProbeOutcome::from_bool(path.exists()),
            Probe::DirExists(path) => {
                if path.is_dir() {
                    ProbeOutcome::pass()
                } else if path.exists() {
                    ProbeOutcome::fail().detail(format!("not a directory: {}", path.display()))
                } else {
                    ProbeOutcome::fail()
                }
            }
            Probe::FileCount { dir, extension } => count_files(dir, extension),
            Probe::AnyPathExists(candidates) => match candidates.iter().find(|p| p.exists()) {
                Some(hit) => ProbeOutcome::pass().observed(hit.display().to_string()),
                None => candidates.iter().fold(ProbeOutcome::fail(), |outcome, p| {
                    outcome.detail(format!("not found: {}", p.display()))
                }),
            },
            Probe::EnvVarSet(name) => {
                let set = std::env::var_os(name).is_some_and(|v| !v.is_empty());
                ProbeOutcome::from_bool(set)
            }
        }
    }
}

/// Count regular files in `dir` whose extension matches, ignoring case.
///
/// `observed` carries the count; `details` lists the matched file names,
/// sorted.
fn count_files(dir: &Path, extension: &str) -> ProbeOutcome {
    let wanted = extension.trim_start_matches('.');
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            return ProbeOutcome::fail()
                .observed("0")
                .detail(format!("cannot read {}: {}", dir.display(), e))
        }
    };

    let mut names: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(wanted))
        })
        .filter_map(|path| path.file_name().map(|n| n.to_string_lossy().to_string()))
        .collect();
    names.sort();

    ProbeOutcome {
        passed: !names.is_empty(),
        observed: Some(names.len().to_string()),
        details: names,
    }
}
