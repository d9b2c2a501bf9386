//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use gibo::ui::{MockUI, UserInterface};
//! use std::io::Write;
//!
//! let mut ui = MockUI::new();
//! ui.message("Updated");
//! writeln!(ui.writer(), "Go").unwrap();
//!
//! assert_eq!(ui.messages(), ["Updated"]);
//! assert_eq!(ui.output(), "Go\n");
//! ```

use std::io::Write;

use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    output: Vec<u8>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Everything written through [`UserInterface::writer`], lossily decoded.
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.output).to_string()
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn writer(&mut self) -> &mut dyn Write {
        &mut self.output
    }
}
