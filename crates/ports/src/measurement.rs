// crates/ports/src/measurement.rs
use std::{fmt, path::Path, path::PathBuf};

use git_chunks_shared_kernel::FileSize;
use serde::{Deserialize, Serialize};

/// Typed failure of a size probe. Never a panic and never an abort: the
/// caller re-classifies the file as unmeasurable and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeFailure {
    pub reason: String,
}

impl ProbeFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl fmt::Display for ProbeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl std::error::Error for ProbeFailure {}

pub type ProbeResult = std::result::Result<FileSize, ProbeFailure>;

/// Port for measuring file sizes.
///
/// `measure_many` must return one result per input path, in input order,
/// regardless of how an implementation schedules the probes; downstream
/// packing is order-sensitive.
pub trait SizeProbe: Send + Sync {
    fn measure(&self, path: &Path) -> ProbeResult;

    fn measure_many(&self, paths: &[PathBuf]) -> Vec<ProbeResult> {
        paths.iter().map(|path| self.measure(path)).collect()
    }
}
