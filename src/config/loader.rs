//! Configuration file discovery and loading.
//!
//! Layers, lowest priority first:
//! 1. Built-in defaults ([`StudyConfig::default`])
//! 2. User global config (`~/.studycheck/config.yml`)
//! 3. Project config (`<project>/.studycheck.yml`)
//!
//! An explicit `--config` file replaces layers 2 and 3.

use crate::config::merger::merge_layers;
use crate::config::schema::StudyConfig;
use crate::config::validator::validate;
use crate::error::{Result, StudyCheckError};
use std::fs;
use std::path::{Path, PathBuf};

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = ".studycheck.yml";

/// Paths to configuration files in merge order.
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config: ~/.studycheck/config.yml
    pub user_global: Option<PathBuf>,

    /// Project config: <project>/.studycheck.yml
    pub project: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self::discover_with_home(project_root, crate::sys::home_dir().as_deref())
    }

    /// Discover config files with an explicit home directory.
    pub fn discover_with_home(project_root: &Path, home: Option<&Path>) -> Self {
        let user_global = home
            .map(|h| h.join(".studycheck").join("config.yml"))
            .filter(|p| p.is_file());
        let project = Some(project_root.join(PROJECT_CONFIG_FILE)).filter(|p| p.is_file());
        Self {
            user_global,
            project,
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.user_global.iter().chain(self.project.iter()).collect()
    }
}

/// Load a config file as a raw YAML value.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StudyCheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            StudyCheckError::Io(e)
        }
    })?;

    serde_yaml::from_str(&content).map_err(|e| StudyCheckError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Merge the given files over the defaults and validate the result.
pub fn load_from_paths(paths: &[&PathBuf]) -> Result<StudyConfig> {
    let base = serde_yaml::to_value(StudyConfig::default())
        .map_err(|e| StudyCheckError::Other(e.into()))?;

    let mut layers = Vec::new();
    for path in paths {
        let value = load_config_value(path)?;
        // An empty file parses as null and contributes nothing.
        if !value.is_null() {
            tracing::debug!("Loaded config layer {}", path.display());
            layers.push(value);
        }
    }

    let merged = merge_layers(base, &layers);
    let config: StudyConfig =
        serde_yaml::from_value(merged).map_err(|e| StudyCheckError::ConfigParseError {
            path: paths
                .last()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| PathBuf::from(PROJECT_CONFIG_FILE)),
            message: e.to_string(),
        })?;

    validate(&config)?;
    Ok(config)
}

/// Load config with optional path override.
///
/// With an override, that file alone is layered over the defaults and must
/// exist. Otherwise discovered files are used, and a project without any
/// config file simply gets the defaults.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<StudyConfig> {
    match config_override {
        Some(path) => {
            let path = path.to_path_buf();
            load_from_paths(&[&path])
        }
        None => {
            let paths = ConfigPaths::discover(project_root);
            load_from_paths(&paths.all_existing())
        }
    }
}
