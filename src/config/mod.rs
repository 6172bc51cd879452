//! Configuration loading, parsing, and validation for studycheck.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Layering in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use studycheck::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".studycheck.yml"), "packages: [numpy]").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.packages, vec!["numpy".to_string()]);
//! ```

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{load_config, ConfigPaths, PROJECT_CONFIG_FILE};
pub use schema::{
    CheckpointConfig, DirectoryConfig, ExternalProjectConfig, ModelLoadingConfig, PythonConfig,
    SamplesConfig, StudyConfig,
};
pub use validator::{validate, validate_config, ValidationError};
