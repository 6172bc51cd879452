//! Configuration validation rules.
//!
//! - `python.min_version` must parse as `major.minor`
//! - Package and dependency names must be dotted Python identifiers
//! - The sample extension must be non-empty
//! - Directory and category entries must be non-empty relative paths

use crate::config::schema::StudyConfig;
use crate::error::{Result, StudyCheckError};
use crate::python::{is_valid_module_name, PythonVersion};
use std::path::Path;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
        }
    }
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &StudyConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if PythonVersion::parse(&config.python.min_version).is_err() {
        errors.push(ValidationError::new(
            "min-version",
            format!(
                "python.min_version '{}' is not a major.minor version",
                config.python.min_version
            ),
        ));
    }

    if config.python.executable.trim().is_empty() {
        errors.push(ValidationError::new(
            "python-executable",
            "python.executable must not be empty".to_string(),
        ));
    }

    let modules = config
        .packages
        .iter()
        .chain(std::iter::once(&config.external_project.dependency));
    for module in modules {
        if !is_valid_module_name(module) {
            errors.push(ValidationError::new(
                "module-name",
                format!("'{}' is not a valid Python module name", module),
            ));
        }
    }

    if config.samples.extension.trim_start_matches('.').is_empty() {
        errors.push(ValidationError::new(
            "sample-extension",
            "samples.extension must not be empty".to_string(),
        ));
    }

    for dir in &config.directories {
        errors.extend(check_relative("directories", &dir.path));
    }
    for category in &config.samples.categories {
        errors.extend(check_relative("samples.categories", category));
    }
    errors.extend(check_relative("samples.root", &config.samples.root));
    errors.extend(check_relative(
        "external_project.path",
        &config.external_project.path,
    ));

    errors
}

fn check_relative(field: &str, value: &str) -> Option<ValidationError> {
    if value.trim().is_empty() {
        return Some(ValidationError::new(
            "empty-path",
            format!("{} contains an empty path", field),
        ));
    }
    if Path::new(value).is_absolute() {
        return Some(ValidationError::new(
            "absolute-path",
            format!("{} entry '{}' must be relative to the project", field, value),
        ));
    }
    None
}

/// Validate a configuration, failing with all messages joined.
pub fn validate(config: &StudyConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(StudyCheckError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
