//! Command-line interface for gibo.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations
//! - [`complete`] - Dynamic completion of boilerplate names

pub mod args;
pub mod commands;
pub mod complete;

pub use args::{Cli, Commands, CompletionsArgs, DumpArgs, ListArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
