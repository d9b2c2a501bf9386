//! The on-disk working copy of the boilerplate remote.

use std::ffi::OsStr;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::config::MirrorConfig;
use crate::error::{GiboError, Result};

use super::git;

/// Non-error result of a refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// New commits were fetched and applied.
    Updated,
    /// The mirror already matched the remote.
    AlreadyCurrent,
}

impl RefreshOutcome {
    /// User-facing description of the outcome.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Updated => "Updated",
            Self::AlreadyCurrent => "Already up to date",
        }
    }
}

/// Owns the mirror directory: clone-if-absent, revision lookup and pull.
#[derive(Debug, Clone)]
pub struct MirrorStore {
    config: MirrorConfig,
}

impl MirrorStore {
    /// Create a store for the configured mirror.
    pub fn new(config: MirrorConfig) -> Self {
        Self { config }
    }

    /// Root directory of the mirror.
    pub fn root(&self) -> &Path {
        &self.config.root
    }

    /// The configuration this store was built with.
    pub fn config(&self) -> &MirrorConfig {
        &self.config
    }

    /// Make sure the mirror exists, cloning it if absent.
    pub fn ensure_exists(&self) -> Result<()> {
        let root = self.root();
        match fs::metadata(root) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(GiboError::NotADirectory {
                path: root.to_path_buf(),
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => self.clone_mirror(),
            Err(e) => Err(GiboError::Io {
                path: root.to_path_buf(),
                source: e,
            }),
        }
    }

    fn clone_mirror(&self) -> Result<()> {
        let root = self.root();
        fs::create_dir_all(root).map_err(|e| GiboError::Io {
            path: root.to_path_buf(),
            source: e,
        })?;

        tracing::info!("Cloning {} into {}", self.config.remote_url, root.display());
        let output = git::run(
            [
                OsStr::new("clone"),
                OsStr::new("--depth"),
                OsStr::new("1"),
                OsStr::new(&self.config.remote_url),
                root.as_os_str(),
            ],
            None,
        )?;

        if output.success {
            return Ok(());
        }

        // Another process finished cloning first.
        if output.stderr.contains("already exists") && root.join(".git").exists() {
            tracing::debug!("Mirror at {} was cloned concurrently", root.display());
            return Ok(());
        }

        // Only succeeds while empty; leaves no stale directory to block the next attempt.
        let _ = fs::remove_dir(root);
        Err(GiboError::Network {
            operation: "git clone".to_string(),
            message: output.failure_message(),
        })
    }

    /// Identifier of the mirror's current head commit.
    pub fn current_revision(&self) -> Result<String> {
        let root = self.root();
        if !root.join(".git").exists() {
            return Err(GiboError::Repository {
                message: format!("{} is not a git repository", root.display()),
            });
        }

        let output = git::run(["rev-parse", "--verify", "HEAD"], Some(root))?;
        if !output.success {
            return Err(GiboError::Repository {
                message: output.failure_message(),
            });
        }
        Ok(output.stdout_trimmed().to_string())
    }

    /// Pull the latest changes from the remote into the current branch.
    pub fn refresh(&self) -> Result<RefreshOutcome> {
        self.ensure_exists()?;
        let root = self.root();
        let before = self.current_revision()?;

        let fetch = git::run(["fetch", "origin"], Some(root))?;
        if !fetch.success {
            return Err(GiboError::Network {
                operation: "git fetch".to_string(),
                message: fetch.failure_message(),
            });
        }

        let merge = git::run(["merge", "--ff-only", "@{upstream}"], Some(root))?;
        if !merge.success {
            return Err(GiboError::Repository {
                message: merge.failure_message(),
            });
        }

        let after = self.current_revision()?;
        tracing::debug!("Mirror moved from {} to {}", before, after);
        if before == after {
            Ok(RefreshOutcome::AlreadyCurrent)
        } else {
            Ok(RefreshOutcome::Updated)
        }
    }
}
