//! Check command implementation.
//!
//! `studycheck check` (also the bare `studycheck`) runs every readiness
//! check and prints the report. The exit code is 0 whenever the run
//! completes; `--strict` turns a not-ready verdict into exit code 1.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::CheckArgs;
use crate::config::{load_config, ModelLoadingConfig, StudyConfig};
use crate::error::{Result, StudyCheckError};
use crate::python::{Interpreter, SystemPython};
use crate::readiness::{ReadinessChecker, RunReport};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display;

/// Machine-readable report for `--json`.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a RunReport,
    python: &'a str,
    model_loading: &'a ModelLoadingConfig,
}

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Run the checks for `config` against `interpreter` and print the outcome.
    pub fn execute_with(
        &self,
        ui: &mut dyn UserInterface,
        config: &StudyConfig,
        interpreter: &dyn Interpreter,
        python: &str,
    ) -> Result<CommandResult> {
        let report = ReadinessChecker::new(config, &self.project_root, interpreter).run();

        if self.args.json {
            let json = JsonReport {
                report: &report,
                python,
                model_loading: &config.model_loading,
            };
            let text = serde_json::to_string_pretty(&json)
                .map_err(|e| StudyCheckError::Other(e.into()))?;
            ui.message(&text);
        } else {
            display::show_report(ui, &report, config);
        }

        if self.args.strict && !report.is_ready() {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;
        let executable = self
            .args
            .python
            .clone()
            .unwrap_or_else(|| config.python.executable.clone());
        tracing::debug!("Probing interpreter {}", executable);
        let interpreter = SystemPython::new(executable.clone()).in_dir(&self.project_root);
        self.execute_with(ui, &config, &interpreter, &executable)
    }
}
