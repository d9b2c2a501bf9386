//! Terminal UI.

use console::Term;
use std::io::{self, Write};

use super::{should_use_colors, GiboTheme, OutputMode, UserInterface};

/// Terminal UI: results on stdout, diagnostics on stderr.
pub struct TerminalUI {
    stdout: io::Stdout,
    stderr: Term,
    theme: GiboTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            GiboTheme::new()
        } else {
            GiboTheme::plain()
        };

        Self {
            stdout: io::stdout(),
            stderr: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.stdout, "{}", msg).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.stderr, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.stderr, "{}", self.theme.format_error(msg)).ok();
    }

    fn writer(&mut self) -> &mut dyn Write {
        &mut self.stdout
    }
}

/// Create the UI for this process.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
