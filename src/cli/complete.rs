//! Dynamic shell completion of boilerplate names.
//!
//! Activated with `COMPLETE=<shell> gibo`, e.g.
//! `source <(COMPLETE=bash gibo)`. The shell then calls back into gibo to
//! complete `gibo dump <TAB>` with names from the mirror.

use std::ffi::OsStr;

use clap_complete::CompletionCandidate;

use crate::config::MirrorConfig;
use crate::server::BoilerplateServer;

/// Value completer for `dump` names, using the mirror for this process.
///
/// Completion never fails: without a usable mirror it offers nothing.
pub fn complete_boilerplate_name(current: &OsStr) -> Vec<CompletionCandidate> {
    match MirrorConfig::from_env() {
        Ok(config) => boilerplate_candidates(&BoilerplateServer::new(config), current),
        Err(e) => {
            tracing::debug!("No completions: {}", e);
            Vec::new()
        }
    }
}

/// Names in the mirror starting with `current`, ignoring case.
pub fn boilerplate_candidates(
    server: &BoilerplateServer,
    current: &OsStr,
) -> Vec<CompletionCandidate> {
    let prefix = current.to_string_lossy().to_lowercase();
    server
        .list_names()
        .into_iter()
        .filter(|name| name.to_lowercase().starts_with(&prefix))
        .map(CompletionCandidate::new)
        .collect()
}
