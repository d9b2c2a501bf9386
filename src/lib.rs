//! gibo - Easy access to gitignore boilerplates.
//!
//! gibo keeps a shallow clone of github.com/github/gitignore in the user cache
//! directory and serves boilerplates out of it by name.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Mirror location and remote settings
//! - [`error`] - Error types and result aliases
//! - [`mirror`] - The local git mirror: clone, revision, refresh
//! - [`registry`] - Case-insensitive lookup and listing of boilerplates
//! - [`server`] - Fetch, list and refresh operations used by the commands
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```no_run
//! use gibo::config::MirrorConfig;
//! use gibo::server::BoilerplateServer;
//!
//! let server = BoilerplateServer::new(MirrorConfig::from_env().unwrap());
//! server.fetch_and_render("rust", &mut std::io::stdout()).unwrap();
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod mirror;
pub mod registry;
pub mod server;
pub mod ui;

pub use error::{GiboError, Result};
