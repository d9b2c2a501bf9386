//! Name resolution and listing over the mirror's directory tree.
//!
//! Traversal is depth-first with siblings visited in file-name order, so the
//! first match for a name is the same on every platform. The `.git`
//! directory is never entered.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{GiboError, Result};

use super::entry::{lookup_key, BoilerplateEntry};

/// Index over the boilerplate files below a mirror root.
#[derive(Debug, Clone)]
pub struct BoilerplateIndex {
    root: PathBuf,
    suffix: String,
}

impl BoilerplateIndex {
    /// Create an index over `root` for files ending in `suffix`.
    pub fn new(root: impl Into<PathBuf>, suffix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            suffix: suffix.into(),
        }
    }

    fn walk(&self) -> impl Iterator<Item = walkdir::Result<DirEntry>> {
        WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !(entry.file_type().is_dir() && entry.file_name() == ".git"))
    }

    /// Find the file for `name`, ignoring case.
    ///
    /// `python`, `Python` and `PYTHON` all resolve to `Python.gitignore`.
    /// The walk stops at the first match. An empty name never matches, as
    /// a file named just `.gitignore` is not a boilerplate.
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        if name.is_empty() {
            return Err(GiboError::NotFound {
                name: String::new(),
            });
        }
        let wanted = lookup_key(name, &self.suffix);

        self.walk()
            .filter_map(|entry| entry.ok())
            .find(|entry| {
                !entry.file_type().is_dir()
                    && entry.file_name().to_string_lossy().to_lowercase() == wanted
            })
            .map(DirEntry::into_path)
            .ok_or_else(|| GiboError::NotFound {
                name: name.to_string(),
            })
    }

    /// Every boilerplate in the mirror, in traversal order.
    pub fn entries(&self) -> impl Iterator<Item = Result<BoilerplateEntry>> + '_ {
        self.walk().filter_map(move |entry| match entry {
            Ok(entry) if entry.file_type().is_dir() => None,
            Ok(entry) => BoilerplateEntry::from_path(entry.path(), &self.suffix).map(Ok),
            Err(e) => Some(Err(walk_error(e))),
        })
    }

    /// All boilerplate names, sorted byte-wise. Duplicates are kept.
    pub fn list_all(&self) -> Result<Vec<String>> {
        let mut names = self
            .entries()
            .map(|entry| entry.map(|e| e.name))
            .collect::<Result<Vec<_>>>()?;
        names.sort();
        Ok(names)
    }
}

fn walk_error(err: walkdir::Error) -> GiboError {
    let path = err.path().map(Path::to_path_buf);
    match (path, err.into_io_error()) {
        (Some(path), Some(source)) => GiboError::Io { path, source },
        (_, Some(source)) => GiboError::IoError(source),
        (_, None) => GiboError::Other(anyhow::anyhow!("directory traversal failed")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn mirror_with(files: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for file in files {
            let path = temp.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, format!("# {}\n", file)).unwrap();
        }
        temp
    }

    #[test]
    fn resolve_ignores_case() {
        let temp = mirror_with(&["Python.gitignore", "Go.gitignore"]);
        let index = BoilerplateIndex::new(temp.path(), ".gitignore");

        let expected = temp.path().join("Python.gitignore");
        assert_eq!(index.resolve("python").unwrap(), expected);
        assert_eq!(index.resolve("Python").unwrap(), expected);
        assert_eq!(index.resolve("PYTHON").unwrap(), expected);
    }

    #[test]
    fn resolve_searches_subdirectories() {
        let temp = mirror_with(&["Global/macOS.gitignore", "community/Rust/Bevy.gitignore"]);
        let index = BoilerplateIndex::new(temp.path(), ".gitignore");

        assert_eq!(
            index.resolve("macos").unwrap(),
            temp.path().join("Global").join("macOS.gitignore")
        );
        assert_eq!(
            index.resolve("bevy").unwrap(),
            temp.path()
                .join("community")
                .join("Rust")
                .join("Bevy.gitignore")
        );
    }

    #[test]
    fn resolve_missing_reports_requested_name() {
        let temp = mirror_with(&["Go.gitignore"]);
        let index = BoilerplateIndex::new(temp.path(), ".gitignore");

        let err = index.resolve("NoSuchThing").unwrap_err();

        match err {
            GiboError::NotFound { name } => assert_eq!(name, "NoSuchThing"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn resolve_prefers_first_in_traversal_order() {
        let temp = mirror_with(&["b/Go.gitignore", "a/Go.gitignore"]);
        let index = BoilerplateIndex::new(temp.path(), ".gitignore");

        assert_eq!(
            index.resolve("go").unwrap(),
            temp.path().join("a").join("Go.gitignore")
        );
    }

    #[test]
    fn resolve_skips_git_directory() {
        let temp = mirror_with(&[".git/Go.gitignore"]);
        let index = BoilerplateIndex::new(temp.path(), ".gitignore");

        assert!(matches!(
            index.resolve("go"),
            Err(GiboError::NotFound { .. })
        ));
    }

    #[test]
    fn resolve_ignores_directories() {
        let temp = mirror_with(&["Go.gitignore/README.md"]);
        let index = BoilerplateIndex::new(temp.path(), ".gitignore");

        assert!(index.resolve("go").is_err());
    }

    #[test]
    fn resolve_empty_name_skips_bare_suffix_file() {
        let temp = mirror_with(&[".gitignore", "Go.gitignore"]);
        let index = BoilerplateIndex::new(temp.path(), ".gitignore");

        assert!(matches!(
            index.resolve(""),
            Err(GiboError::NotFound { .. })
        ));
        assert_eq!(index.list_all().unwrap(), vec!["Go"]);
    }

    #[test]
    fn list_all_is_sorted() {
        let temp = mirror_with(&["python.gitignore", "Go.gitignore", "C++.gitignore"]);
        let index = BoilerplateIndex::new(temp.path(), ".gitignore");

        assert_eq!(index.list_all().unwrap(), vec!["C++", "Go", "python"]);
    }

    #[test]
    fn list_all_keeps_duplicates() {
        let temp = mirror_with(&["Go.gitignore", "community/go.gitignore"]);
        let index = BoilerplateIndex::new(temp.path(), ".gitignore");

        assert_eq!(index.list_all().unwrap(), vec!["Go", "go"]);
    }

    #[test]
    fn list_all_ignores_other_files() {
        let temp = mirror_with(&[
            "README.md",
            "LICENSE",
            ".gitignore",
            ".git/info/exclude.gitignore",
            "Global/Vim.gitignore",
        ]);
        let index = BoilerplateIndex::new(temp.path(), ".gitignore");

        assert_eq!(index.list_all().unwrap(), vec!["Vim"]);
    }

    #[test]
    fn list_all_of_missing_root_fails() {
        let temp = TempDir::new().unwrap();
        let index = BoilerplateIndex::new(temp.path().join("absent"), ".gitignore");

        assert!(index.list_all().is_err());
    }

    #[test]
    fn entries_carry_paths() {
        let temp = mirror_with(&["Global/JetBrains.gitignore"]);
        let index = BoilerplateIndex::new(temp.path(), ".gitignore");

        let entries: Vec<_> = index.entries().collect::<Result<_>>().unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "JetBrains");
        assert_eq!(
            entries[0].path,
            temp.path().join("Global").join("JetBrains.gitignore")
        );
    }
}
