// crates/ports/src/discovery.rs
use std::path::{Path, PathBuf};

use git_chunks_shared_kernel::Result;

/// Port for enumerating untracked files of a validated working tree.
///
/// Implementations return paths joined to `root`, in a stable order,
/// with directories already filtered out. A failure here is fatal for
/// the whole run; no chunks are produced.
pub trait UntrackedFileSource: Send + Sync {
    fn untracked_files(&self, root: &Path) -> Result<Vec<PathBuf>>;
}
