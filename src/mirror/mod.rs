//! Local mirror of the boilerplate remote.
//!
//! The mirror is a shallow git working copy. It is cloned on first use and
//! only ever changed again by [`MirrorStore::refresh`].

#[cfg(test)]
pub(crate) mod fixtures;
pub mod git;
pub mod store;

pub use git::GitOutput;
pub use store::{MirrorStore, RefreshOutcome};
