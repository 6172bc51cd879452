//! Output verbosity mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show every check plus supporting details (matched files, errors).
    Verbose,
    /// Show every check with its group heading.
    #[default]
    Normal,
    /// Show only failing checks and the closing banner.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows per-check details.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows passing checks and group headings.
    pub fn shows_passing(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
