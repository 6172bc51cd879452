//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal output
//! - [`MockUI`] for capturing output in tests
//! - [`StatusKind`] glyphs and the [`StudyTheme`] styles
//!
//! # Example
//!
//! ```
//! use studycheck::ui::{MockUI, StatusKind, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("Setup Verification");
//! ui.show_check(StatusKind::Success, "numpy");
//! assert_eq!(ui.checks().len(), 1);
//! ```

pub mod icons;
pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, StudyTheme};

/// Trait for user interface interactions.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header banner.
    fn show_header(&mut self, title: &str);

    /// Show a group heading.
    fn show_heading(&mut self, heading: &str);

    /// Show one check line: glyph + label.
    fn show_check(&mut self, kind: StatusKind, label: &str);

    /// Show a remediation hint under the previous check.
    fn show_hint(&mut self, hint: &str);

    /// Show a command the user can run.
    fn show_command(&mut self, command: &str);
}
