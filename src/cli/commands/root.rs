//! Root command implementation.
//!
//! The `gibo root` command prints where the mirror lives, without touching it.

use std::io::Write;

use crate::error::Result;
use crate::server::BoilerplateServer;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The root command implementation.
pub struct RootCommand<'a> {
    server: &'a BoilerplateServer,
}

impl<'a> RootCommand<'a> {
    /// Create a new root command.
    pub fn new(server: &'a BoilerplateServer) -> Self {
        Self { server }
    }
}

impl Command for RootCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        writeln!(ui.writer(), "{}", self.server.mirror_root().display())?;
        Ok(CommandResult::success())
    }
}
