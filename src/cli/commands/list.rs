//! List command implementation.
//!
//! The `gibo list` command lists the names of all available boilerplates.

use std::io::Write;

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::server::BoilerplateServer;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand<'a> {
    server: &'a BoilerplateServer,
    args: ListArgs,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    pub fn new(server: &'a BoilerplateServer, args: ListArgs) -> Self {
        Self { server, args }
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let names = match self.server.try_list_names() {
            Ok(names) => names,
            Err(e) => {
                tracing::warn!("Could not list boilerplates: {}", e);
                ui.warning(&format!("Could not list boilerplates: {}", e));
                Vec::new()
            }
        };

        if self.args.json {
            let output = serde_json::to_string_pretty(&names).map_err(anyhow::Error::from)?;
            writeln!(ui.writer(), "{}", output)?;
            return Ok(CommandResult::success());
        }

        let out = ui.writer();
        for name in &names {
            writeln!(out, "{}", name)?;
        }
        out.flush()?;
        Ok(CommandResult::success())
    }
}
