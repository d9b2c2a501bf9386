//! Update command implementation.
//!
//! The `gibo update` command pulls the latest boilerplates into the mirror.

use crate::error::Result;
use crate::server::BoilerplateServer;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The update command implementation.
pub struct UpdateCommand<'a> {
    server: &'a BoilerplateServer,
}

impl<'a> UpdateCommand<'a> {
    /// Create a new update command.
    pub fn new(server: &'a BoilerplateServer) -> Self {
        Self { server }
    }
}

impl Command for UpdateCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let outcome = self.server.refresh_mirror()?;
        ui.message(outcome);
        Ok(CommandResult::success())
    }
}
