//! Dump command implementation.
//!
//! The `gibo dump` command prints boilerplates, each preceded by its
//! provenance header.

use std::io::Write;

use crate::cli::args::DumpArgs;
use crate::error::Result;
use crate::server::BoilerplateServer;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The dump command implementation.
pub struct DumpCommand<'a> {
    server: &'a BoilerplateServer,
    args: DumpArgs,
}

impl<'a> DumpCommand<'a> {
    /// Create a new dump command.
    pub fn new(server: &'a BoilerplateServer, args: DumpArgs) -> Self {
        Self { server, args }
    }
}

impl Command for DumpCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        for (i, name) in self.args.names.iter().enumerate() {
            if i > 0 {
                writeln!(ui.writer())?;
            }
            self.server.fetch_and_render(name, ui.writer())?;
        }
        ui.writer().flush()?;
        Ok(CommandResult::success())
    }
}
