//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. All commands that touch the mirror
//! share the dispatcher's [`BoilerplateServer`](crate::server::BoilerplateServer).

pub mod completions;
pub mod dispatcher;
pub mod dump;
pub mod list;
pub mod root;
pub mod update;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
