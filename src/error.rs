//! Error types for studycheck operations.
//!
//! This module defines [`StudyCheckError`], the error type used for
//! configuration loading and command plumbing, and a [`Result`] alias.
//!
//! # Error Handling Strategy
//!
//! - Readiness checks never return these errors to the caller; a failing
//!   probe becomes a failed check in the report
//! - Use `anyhow::Error` (via `StudyCheckError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studycheck operations.
#[derive(Debug, Error)]
pub enum StudyCheckError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The Python interpreter could not be started.
    #[error("Python interpreter '{executable}' unavailable: {message}")]
    InterpreterUnavailable { executable: String, message: String },

    /// A version string could not be parsed.
    #[error("Cannot parse Python version from '{input}'")]
    VersionParseError { input: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for studycheck operations.
pub type Result<T> = std::result::Result<T, StudyCheckError>;
