//! Provenance header printed above every served boilerplate.

use std::fmt;
use std::path::{Component, Path};

use crate::error::{GiboError, Result};

/// Marker that starts every header line.
pub const COMMENT_MARKER: &str = "###";

/// Fixed first header line.
pub const ATTRIBUTION: &str = "### Generated by gibo (https://github.com/simonwhitaker/gibo)";

/// Two comment lines naming where a boilerplate came from, then a blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvenanceHeader {
    /// Revision-pinned URL of the file on the remote.
    pub source_url: String,
}

impl ProvenanceHeader {
    /// Build the header for `relative_path` at `revision`.
    pub fn new(web_root: &str, revision: &str, relative_path: &str) -> Self {
        Self {
            source_url: format!("{}{}/{}", web_root, revision, relative_path),
        }
    }
}

impl fmt::Display for ProvenanceHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", ATTRIBUTION)?;
        writeln!(f, "{} {}", COMMENT_MARKER, self.source_url)?;
        writeln!(f)
    }
}

/// Path of `path` below `root`, joined with `/` whatever the host separator.
pub fn relative_url_path(root: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).map_err(|_| {
        GiboError::Other(anyhow::anyhow!(
            "{} is not inside the mirror at {}",
            path.display(),
            root.display()
        ))
    })?;

    let parts: Vec<_> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();
    Ok(parts.join("/"))
}
