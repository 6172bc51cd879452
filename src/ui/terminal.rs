//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, OutputMode, StatusKind, StudyTheme, UserInterface};

/// Terminal UI implementation writing to stdout.
pub struct TerminalUI {
    term: Term,
    theme: StudyTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI, colored when stdout is a TTY.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            StudyTheme::new()
        } else {
            StudyTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.term, "{}\n", self.theme.format_header(title)).ok();
    }

    fn show_heading(&mut self, heading: &str) {
        writeln!(self.term, "{}", self.theme.heading.apply_to(heading)).ok();
    }

    fn show_check(&mut self, kind: StatusKind, label: &str) {
        writeln!(self.term, "{}", kind.format(&self.theme, label)).ok();
    }

    fn show_hint(&mut self, hint: &str) {
        writeln!(self.term, "{}", self.theme.format_hint(hint)).ok();
    }

    fn show_command(&mut self, command: &str) {
        writeln!(self.term, "  {}", self.theme.command.apply_to(command)).ok();
    }
}

/// Create the UI for the given output mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
