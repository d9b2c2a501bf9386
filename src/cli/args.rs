//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::{ArgValueCompleter, Shell};

use super::complete::complete_boilerplate_name;

/// gibo - Easy access to gitignore boilerplates.
#[derive(Debug, Parser)]
#[command(name = "gibo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Dump one or more boilerplates to stdout
    Dump(DumpArgs),

    /// List available boilerplates
    List(ListArgs),

    /// Update the local mirror of boilerplates
    Update,

    /// Show the directory the boilerplates are mirrored into
    Root,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `dump` command.
#[derive(Debug, Clone, clap::Args)]
pub struct DumpArgs {
    /// Boilerplate names, matched case-insensitively (e.g. python, Go, macos)
    #[arg(
        required = true,
        value_name = "BOILERPLATE",
        add = ArgValueCompleter::new(complete_boilerplate_name)
    )]
    pub names: Vec<String>,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
