//! Visual theme and styling.

use console::Style;

/// studycheck's visual theme.
#[derive(Debug, Clone)]
pub struct StudyTheme {
    /// Style for passing checks and the ready banner (green).
    pub success: Style,
    /// Style for the not-ready banner (orange).
    pub warning: Style,
    /// Style for failing checks and errors (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for group headings (bold).
    pub heading: Style,
    /// Style for the header banner (magenta bold).
    pub header: Style,
    /// Style for remediation hints (magenta dim).
    pub hint: Style,
    /// Style for commands shown in output (dim italic).
    pub command: Style,
}

impl Default for StudyTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl StudyTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            heading: Style::new().bold(),
            header: Style::new().bold().magenta(),
            hint: Style::new().magenta().dim(),
            command: Style::new().dim().italic(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            heading: Style::new(),
            header: Style::new(),
            hint: Style::new(),
            command: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a remediation hint, indented under its check.
    pub fn format_hint(&self, hint: &str) -> String {
        format!("  {}", self.hint.apply_to(format!("→ {}", hint)))
    }

    /// Format a header banner between rules.
    pub fn format_header(&self, title: &str) -> String {
        let rule = "=".repeat(60);
        format!(
            "{}\n{}\n{}",
            self.dim.apply_to(&rule),
            self.header.apply_to(title),
            self.dim.apply_to(&rule)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
