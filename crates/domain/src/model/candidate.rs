// crates/domain/src/model/candidate.rs
use std::path::PathBuf;

use git_chunks_shared_kernel::FileSize;

/// A discovered path together with the outcome of the size probe.
///
/// `size` is `None` exactly when every probing strategy failed; `failure`
/// then carries the last failure reason for the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub path: PathBuf,
    pub size: Option<FileSize>,
    pub failure: Option<String>,
}

impl FileCandidate {
    pub fn measured(path: impl Into<PathBuf>, size: FileSize) -> Self {
        Self { path: path.into(), size: Some(size), failure: None }
    }

    pub fn unmeasured(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self { path: path.into(), size: None, failure: Some(reason.into()) }
    }
}
