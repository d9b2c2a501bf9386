//! The operations the command layer calls: fetch, list and refresh.
//!
//! Every operation makes sure the mirror exists first, so the very first
//! invocation of any command performs the initial clone.

pub mod header;

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::MirrorConfig;
use crate::error::{GiboError, Result};
use crate::mirror::MirrorStore;
use crate::registry::BoilerplateIndex;

pub use header::{relative_url_path, ProvenanceHeader, ATTRIBUTION, COMMENT_MARKER};

/// Serves boilerplates out of the local mirror.
#[derive(Debug, Clone)]
pub struct BoilerplateServer {
    store: MirrorStore,
    index: BoilerplateIndex,
}

impl BoilerplateServer {
    /// Create a server for the configured mirror.
    pub fn new(config: MirrorConfig) -> Self {
        let index = BoilerplateIndex::new(config.root.clone(), config.suffix.clone());
        Self {
            store: MirrorStore::new(config),
            index,
        }
    }

    /// Root directory of the mirror.
    pub fn mirror_root(&self) -> &Path {
        self.store.root()
    }

    /// Locate `name` in the mirror, cloning it first if needed.
    pub fn locate(&self, name: &str) -> Result<PathBuf> {
        self.store.ensure_exists()?;
        self.index.resolve(name)
    }

    /// Header describing where `path` came from at the current revision.
    pub fn provenance_header(&self, path: &Path) -> Result<ProvenanceHeader> {
        let revision = self.store.current_revision()?;
        let relative = relative_url_path(self.store.root(), path)?;
        Ok(ProvenanceHeader::new(
            &self.store.config().web_root,
            &revision,
            &relative,
        ))
    }

    /// Write the header and the verbatim contents of boilerplate `name`.
    pub fn fetch_and_render(&self, name: &str, out: &mut dyn Write) -> Result<()> {
        let path = self.locate(name)?;
        let header = self.provenance_header(&path)?;
        tracing::debug!("Serving {} from {}", name, path.display());

        let mut file = File::open(&path).map_err(|e| GiboError::Io {
            path: path.clone(),
            source: e,
        })?;
        write!(out, "{}", header)?;
        io::copy(&mut file, out)?;
        Ok(())
    }

    /// Sorted boilerplate names, cloning the mirror first if needed.
    pub fn try_list_names(&self) -> Result<Vec<String>> {
        self.store.ensure_exists()?;
        self.index.list_all()
    }

    /// Sorted boilerplate names, or nothing if the mirror is unusable.
    ///
    /// Never fails: listing backs shell completion and must not abort it.
    pub fn list_names(&self) -> Vec<String> {
        match self.try_list_names() {
            Ok(names) => names,
            Err(e) => {
                tracing::warn!("Could not list boilerplates: {}", e);
                Vec::new()
            }
        }
    }

    /// Pull the latest boilerplates and describe what happened.
    pub fn refresh_mirror(&self) -> Result<&'static str> {
        let outcome = self.store.refresh()?;
        tracing::info!("Mirror refresh: {}", outcome.message());
        Ok(outcome.message())
    }
}
