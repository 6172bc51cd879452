//! Python version parsing and ordering.

use crate::error::{Result, StudyCheckError};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Regex for a bare version such as `3.8` or `3.11.4`.
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\.(\d+)(?:\.(\d+))?").expect("VERSION_REGEX must compile")
});

/// Regex for `python --version` output, e.g. `Python 3.11.4`.
static BANNER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Python\s+(\d+)\.(\d+)(?:\.(\d+))?").expect("BANNER_REGEX must compile")
});

/// A `major.minor.patch` interpreter version.
///
/// Ordering is lexicographic over the three components, so a `3.8`
/// minimum (patch 0) admits every `3.8.x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PythonVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl PythonVersion {
    /// Create a version.
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse `major.minor` or `major.minor.patch`; trailing text such as
    /// `rc1` is ignored.
    pub fn parse(input: &str) -> Result<Self> {
        Self::from_captures(&VERSION_REGEX, input)
    }

    /// Extract the version from interpreter `--version` output.
    pub fn from_banner(output: &str) -> Result<Self> {
        Self::from_captures(&BANNER_REGEX, output)
    }

    /// Whether this version satisfies `minimum`.
    pub fn at_least(&self, minimum: &PythonVersion) -> bool {
        self >= minimum
    }

    fn from_captures(regex: &Regex, input: &str) -> Result<Self> {
        let parse_err = || StudyCheckError::VersionParseError {
            input: input.trim().to_string(),
        };
        let caps = regex.captures(input).ok_or_else(parse_err)?;
        let component = |i: usize| -> Result<u32> {
            match caps.get(i) {
                Some(m) => m.as_str().parse().map_err(|_| parse_err()),
                None => Ok(0),
            }
        };
        Ok(Self::new(component(1)?, component(2)?, component(3)?))
    }
}

impl fmt::Display for PythonVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
