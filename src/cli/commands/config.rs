//! Config command implementation.
//!
//! The `studycheck config` command shows the resolved configuration:
//! built-in defaults with every discovered file layered on top.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::{load_config, ConfigPaths};
use crate::error::{Result, StudyCheckError};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: ConfigArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    fn sources(&self) -> Vec<PathBuf> {
        match &self.config_path {
            Some(path) => vec![path.clone()],
            None => ConfigPaths::discover(&self.project_root)
                .all_existing()
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;

        if self.args.json {
            let json =
                serde_json::to_string_pretty(&config).map_err(|e| StudyCheckError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        let sources = self.sources();
        if sources.is_empty() {
            ui.message("# built-in defaults");
        } else {
            for path in &sources {
                ui.message(&format!("# {}", path.display()));
            }
        }
        ui.message("");

        let yaml = serde_yaml::to_string(&config).map_err(|e| StudyCheckError::Other(e.into()))?;
        ui.message(&yaml);

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".studycheck.yml"), config).unwrap();
        temp
    }

    #[test]
    fn no_config_files_shows_defaults() {
        let temp = TempDir::new().unwrap();
        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs::default());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.messages()[0], "# built-in defaults");
        assert!(ui.has_message("app_name: IUI 2025 User Study"));
    }

    #[test]
    fn shows_project_config_path() {
        let temp = setup_project("app_name: Pilot Study\n");
        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message(".studycheck.yml"));
        assert!(ui.has_message("app_name: Pilot Study"));
    }

    #[test]
    fn explicit_config_path_is_the_only_source() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("study.yml");
        fs::write(&path, "setup_doc: INSTALL.md\n").unwrap();
        let cmd = ConfigCommand::new(temp.path(), Some(&path), ConfigArgs::default());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("study.yml"));
        assert!(ui.has_message("setup_doc: INSTALL.md"));
    }

    #[test]
    fn json_output_is_parseable() {
        let temp = setup_project("packages: [numpy]\n");
        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs { json: true });
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.messages().len(), 1);
        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["packages"], serde_json::json!(["numpy"]));
        assert_eq!(value["python"]["min_version"], "3.8");
    }

    #[test]
    fn invalid_config_is_an_error() {
        let temp = setup_project("python:\n  min_version: three\n");
        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs::default());
        let mut ui = MockUI::new();

        assert!(cmd.execute(&mut ui).is_err());
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.yml");
        let cmd = ConfigCommand::new(temp.path(), Some(&path), ConfigArgs::default());
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, StudyCheckError::ConfigNotFound { .. }));
    }
}
