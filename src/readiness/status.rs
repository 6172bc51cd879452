//! Check result types and the aggregated run report.
//!
//! Each evaluated check produces a [`CheckResult`]; results are appended
//! to a [`RunReport`] in evaluation order, which folds them into the
//! readiness verdict.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Whether a failing check blocks readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Failure flips the verdict to not ready.
    Required,
    /// Failure is reported but does not affect the verdict.
    Informational,
}

/// The ordered groups a run walks through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckGroup {
    Interpreter,
    Packages,
    Directories,
    Samples,
    ExternalProject,
    Checkpoint,
    HfToken,
}

impl CheckGroup {
    /// All groups in run order.
    pub const ALL: [CheckGroup; 7] = [
        CheckGroup::Interpreter,
        CheckGroup::Packages,
        CheckGroup::Directories,
        CheckGroup::Samples,
        CheckGroup::ExternalProject,
        CheckGroup::Checkpoint,
        CheckGroup::HfToken,
    ];

    /// 1-based position in the run.
    pub fn number(self) -> usize {
        Self::ALL.iter().position(|g| *g == self).unwrap_or(0) + 1
    }

    /// Heading printed before the group's results.
    pub fn title(self) -> &'static str {
        match self {
            Self::Interpreter => "Checking Python version...",
            Self::Packages => "Checking required packages...",
            Self::Directories => "Checking directory structure...",
            Self::Samples => "Checking sample audio files...",
            Self::ExternalProject => "Checking voice-conversion project setup...",
            Self::Checkpoint => "Checking model checkpoint...",
            Self::HfToken => "Checking Hugging Face token...",
        }
    }
}

/// Outcome of evaluating one check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    /// Human-readable label
    pub label: String,
    /// Whether the condition held
    pub passed: bool,
    /// Remediation hint, present only on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Whether failure blocks readiness
    pub severity: Severity,
    /// Group the check belongs to
    pub group: CheckGroup,
    /// Extra observations shown in verbose output (matched files, errors)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl CheckResult {
    /// Whether this result is a required check that failed.
    pub fn is_blocking(&self) -> bool {
        !self.passed && self.severity == Severity::Required
    }
}

/// Ordered results of one run plus the aggregate verdict.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    generated_at: DateTime<Utc>,
    ready: bool,
    results: Vec<CheckResult>,
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}

impl RunReport {
    /// Start an empty report. With nothing checked, the verdict is ready.
    pub fn new() -> Self {
        Self {
            generated_at: Utc::now(),
            ready: true,
            results: Vec::new(),
        }
    }

    /// Append a result, folding it into the verdict.
    pub fn push(&mut self, result: CheckResult) {
        if result.is_blocking() {
            self.ready = false;
        }
        self.results.push(result);
    }

    /// Whether every required check passed.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// All results in evaluation order.
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Results belonging to `group`, in order.
    pub fn in_group(&self, group: CheckGroup) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(move |r| r.group == group)
    }

    /// Required checks that failed.
    pub fn blocking_failures(&self) -> Vec<&CheckResult> {
        self.results.iter().filter(|r| r.is_blocking()).collect()
    }

    /// Informational checks that failed.
    pub fn informational_failures(&self) -> Vec<&CheckResult> {
        self.results
            .iter()
            .filter(|r| !r.passed && r.severity == Severity::Informational)
            .collect()
    }
}
