//! Status vocabulary for check output.
//!
//! `StatusKind` is the single set of glyphs and colors used for check
//! lines, so every command renders pass/fail the same way.

use super::theme::StudyTheme;
use crate::readiness::CheckResult;

/// Status kinds used in check output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed.
    Success,
    /// Check failed.
    Failed,
}

impl StatusKind {
    /// Unicode glyph.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
        }
    }

    /// Styled glyph using the given theme.
    pub fn styled(self, theme: &StudyTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled glyph + message.
    pub fn format(self, theme: &StudyTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }
}

impl From<&CheckResult> for StatusKind {
    fn from(result: &CheckResult) -> Self {
        if result.passed {
            Self::Success
        } else {
            Self::Failed
        }
    }
}
