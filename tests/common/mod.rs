//! Git fixtures shared by the integration tests: a local bare repository
//! stands in for the boilerplate remote.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Mutex;

use tempfile::TempDir;

// Serialize git-process tests to avoid flaky failures under parallel execution
pub static GIT_LOCK: Mutex<()> = Mutex::new(());

const REPOSITORY_ENV_VARS: &[&str] = &[
    "GIT_DIR",
    "GIT_WORK_TREE",
    "GIT_INDEX_FILE",
    "GIT_OBJECT_DIRECTORY",
    "GIT_ALTERNATE_OBJECT_DIRECTORIES",
    "GIT_COMMON_DIR",
    "GIT_NAMESPACE",
];

fn git_command(cwd: &Path) -> Command {
    let mut cmd = Command::new("git");
    for var in REPOSITORY_ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.current_dir(cwd);
    cmd
}

/// Run git in `cwd`, panicking with its stderr on failure.
pub fn git(args: &[&str], cwd: &Path) {
    let output = git_command(cwd)
        .args(["-c", "user.name=Test", "-c", "user.email=test@test.com"])
        .args(args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Commit `files` to `parent/remote.git` on `main`, creating the remote if needed.
pub fn push_files(parent: &Path, files: &[(&str, &str)], message: &str) -> PathBuf {
    let bare = parent.join("remote.git");
    if !bare.exists() {
        git(
            &["init", "--bare", "--initial-branch=main", bare.to_str().unwrap()],
            parent,
        );
    }

    let work = TempDir::new_in(parent).unwrap();
    let work_dir = work.path().join("checkout");
    git(
        &["clone", bare.to_str().unwrap(), work_dir.to_str().unwrap()],
        parent,
    );
    git(&["symbolic-ref", "HEAD", "refs/heads/main"], &work_dir);
    for (name, content) in files {
        let path = work_dir.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    git(&["add", "."], &work_dir);
    git(&["commit", "-m", message], &work_dir);
    git(&["push", "origin", "HEAD:main"], &work_dir);
    bare
}

/// Clone `bare` into `dest`, the way gibo's first run would.
pub fn clone_into(bare: &Path, dest: &Path) {
    let parent = dest.parent().unwrap();
    fs::create_dir_all(parent).unwrap();
    git(
        &["clone", bare.to_str().unwrap(), dest.to_str().unwrap()],
        parent,
    );
}

/// Commit id checked out in `repo`.
pub fn head_of(repo: &Path) -> String {
    let output = git_command(repo).args(["rev-parse", "HEAD"]).output().unwrap();
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Create `files` (empty) below `root`, without any git history.
pub fn plain_mirror(root: &Path, files: &[&str]) {
    for file in files {
        let path = root.join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }
}
