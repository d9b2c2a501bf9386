//! Local bare-repository fixtures standing in for the remote origin.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::TempDir;

use crate::config::MirrorConfig;

use super::git::REPOSITORY_ENV_VARS;

/// Serialize git-process tests to avoid flaky failures under parallel execution.
pub(crate) static GIT_LOCK: Mutex<()> = Mutex::new(());

fn git(args: &[&str], cwd: &Path) {
    let mut cmd = std::process::Command::new("git");
    for var in REPOSITORY_ENV_VARS {
        cmd.env_remove(var);
    }
    let output = cmd
        .args(["-c", "user.name=Test", "-c", "user.email=test@test.com"])
        .args(args)
        .current_dir(cwd)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Create a bare repo on `main` whose first commit contains `files`.
pub(crate) fn create_remote(parent: &Path, files: &[(&str, &str)]) -> PathBuf {
    let bare_path = parent.join("remote.git");
    git(
        &[
            "init",
            "--bare",
            "--initial-branch=main",
            bare_path.to_str().unwrap(),
        ],
        parent,
    );
    push_files(parent, &bare_path, files, "Initial commit");
    bare_path
}

/// Commit `files` on top of the remote's `main` and push.
pub(crate) fn push_files(parent: &Path, bare_path: &Path, files: &[(&str, &str)], message: &str) {
    let work = TempDir::new_in(parent).unwrap();
    let work_dir = work.path().join("checkout");
    git(
        &[
            "clone",
            bare_path.to_str().unwrap(),
            work_dir.to_str().unwrap(),
        ],
        parent,
    );
    git(&["symbolic-ref", "HEAD", "refs/heads/main"], &work_dir);

    for (name, content) in files {
        let path = work_dir.join(name);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    git(&["add", "."], &work_dir);
    git(&["commit", "-m", message], &work_dir);
    git(&["push", "origin", "HEAD:main"], &work_dir);
}

/// A config whose mirror lives in `parent/mirror` and tracks `bare_path`.
pub(crate) fn mirror_config(parent: &Path, bare_path: &Path) -> MirrorConfig {
    MirrorConfig::new(parent.join("mirror")).with_remote(
        bare_path.to_string_lossy(),
        "https://raw.example.com/boilerplates/",
    )
}
