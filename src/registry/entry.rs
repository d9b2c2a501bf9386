//! A single boilerplate file in the mirror.

use std::path::{Path, PathBuf};

/// A boilerplate file, identified by its name with the suffix stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoilerplateEntry {
    /// Canonical name, e.g. `Python` for `Python.gitignore`.
    pub name: String,
    /// Location of the file inside the mirror.
    pub path: PathBuf,
}

impl BoilerplateEntry {
    /// Build an entry from a path if its file name carries `suffix`.
    ///
    /// The suffix match is case-sensitive. A bare suffix (a file named just
    /// `.gitignore`) is not a boilerplate.
    pub fn from_path(path: &Path, suffix: &str) -> Option<Self> {
        let file_name = path.file_name()?.to_string_lossy();
        let name = file_name.strip_suffix(suffix)?;
        if name.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            path: path.to_path_buf(),
        })
    }

    /// Case-folded key used for lookups.
    pub fn lookup_key(&self, suffix: &str) -> String {
        lookup_key(&self.name, suffix)
    }
}

/// Case-folded form of `name` + `suffix`.
pub fn lookup_key(name: &str, suffix: &str) -> String {
    format!("{}{}", name, suffix).to_lowercase()
}
