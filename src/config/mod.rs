//! Mirror configuration.
//!
//! A [`MirrorConfig`] is resolved once by the entry point and handed to every
//! component that needs to know where the mirror lives or where it comes from.
//!
//! # Example
//!
//! ```
//! use gibo::config::MirrorConfig;
//!
//! let config = MirrorConfig::new("/tmp/gibo");
//! assert_eq!(config.suffix, ".gitignore");
//! assert!(config.remote_url.ends_with("gitignore.git"));
//! ```

use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::{GiboError, Result};

/// Name of the mirror directory inside the user cache directory.
pub const CACHE_SUBDIR: &str = "gibo";

/// Remote origin the mirror is cloned from.
pub const REMOTE_URL: &str = "https://github.com/github/gitignore.git";

/// Base URL for raw, revision-pinned file contents of the remote.
pub const RAW_WEB_ROOT: &str = "https://raw.github.com/github/gitignore/";

/// Suffix shared by every boilerplate file.
pub const BOILERPLATE_SUFFIX: &str = ".gitignore";

/// Environment variable overriding the mirror location.
pub const MIRROR_DIR_ENV: &str = "GIBO_BOILERPLATES";

const NO_CACHE_DIR_MESSAGE: &str = "gibo can't determine your user cache directory. \
     Please file an issue at https://github.com/simonwhitaker/gibo/issues";

/// Where the mirror lives and which remote it tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorConfig {
    /// Root directory of the local working copy.
    pub root: PathBuf,
    /// Clone URL of the remote origin.
    pub remote_url: String,
    /// Raw-content base URL used in provenance headers.
    pub web_root: String,
    /// File name suffix identifying boilerplates.
    pub suffix: String,
}

impl MirrorConfig {
    /// Create a config for the default remote, mirrored at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            remote_url: REMOTE_URL.to_string(),
            web_root: RAW_WEB_ROOT.to_string(),
            suffix: BOILERPLATE_SUFFIX.to_string(),
        }
    }

    /// Point the mirror at a different remote.
    pub fn with_remote(
        mut self,
        remote_url: impl Into<String>,
        web_root: impl Into<String>,
    ) -> Self {
        self.remote_url = remote_url.into();
        self.web_root = web_root.into();
        self
    }

    /// Resolve the config for this process.
    ///
    /// Honors `GIBO_BOILERPLATES`, falling back to the platform cache
    /// directory. Fails with [`GiboError::Environment`] when neither is
    /// available.
    pub fn from_env() -> Result<Self> {
        Self::from_override(std::env::var_os(MIRROR_DIR_ENV))
    }

    /// Resolve the config from an explicit override value.
    pub fn from_override(dir_override: Option<OsString>) -> Result<Self> {
        if let Some(dir) = dir_override.filter(|d| !d.is_empty()) {
            tracing::debug!("Using mirror directory from {}: {:?}", MIRROR_DIR_ENV, dir);
            return Ok(Self::new(dir));
        }

        default_mirror_dir()
            .map(Self::new)
            .ok_or_else(|| GiboError::Environment {
                message: NO_CACHE_DIR_MESSAGE.to_string(),
            })
    }
}

/// Get the default mirror directory, if the platform has a cache directory.
pub fn default_mirror_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(CACHE_SUBDIR))
}
