// crates/infra/src/git.rs
use std::path::{Path, PathBuf};

use git_chunks_ports::discovery::UntrackedFileSource;
use git_chunks_shared_kernel::{InfrastructureError, Result};

/// Enumerates untracked files via `git ls-files`.
///
/// Output paths are joined to the root, sorted and deduplicated so the
/// downstream packing order is reproducible across git versions and
/// locales. Entry names are taken verbatim from the NUL-separated output;
/// only directories are filtered out. Everything else, including dangling
/// symlinks or files deleted mid-run, goes to the size probe and surfaces
/// as unmeasurable instead of vanishing from the report.
pub struct GitUntrackedSource;

impl UntrackedFileSource for GitUntrackedSource {
    fn untracked_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let output = std::process::Command::new("git")
            .args(["ls-files", "-z", "--others", "--exclude-standard"])
            .current_dir(root)
            .output()
            .map_err(|err| InfrastructureError::FileSystemOperation {
                operation: "spawn git".to_string(),
                path: root.to_path_buf(),
                source: err,
            })?;

        if !output.status.success() {
            return Err(InfrastructureError::GitError {
                operation: "ls-files".to_string(),
                details: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        let mut files = Vec::new();
        for entry in output.stdout.split(|&b| b == 0) {
            if entry.is_empty() {
                continue;
            }
            // Names are used as-is: whitespace is significant in file names.
            let path = root.join(String::from_utf8_lossy(entry).into_owned());
            if !path.is_dir() {
                files.push(path);
            }
        }
        files.sort();
        files.dedup();
        Ok(files)
    }
}

/// Whether `root` is inside a git working tree.
///
/// Used by configuration validation before the pipeline runs; an
/// unavailable git binary counts as "no".
pub fn is_worktree(root: &Path) -> bool {
    std::process::Command::new("git")
        .args(["rev-parse", "--is-inside-work-tree"])
        .current_dir(root)
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}
