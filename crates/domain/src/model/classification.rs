// crates/domain/src/model/classification.rs
use std::path::PathBuf;

use git_chunks_shared_kernel::FileSize;

/// The three mutually exclusive outcomes for a candidate file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Fits within the chunk limit and will be packed.
    Processable(FileSize),
    /// Exceeds the limit on its own; surfaced in the report, never packed.
    Oversized(FileSize),
    /// The size probe failed; the reason is kept for the report.
    Unmeasurable(String),
}

impl Classification {
    pub const fn is_processable(&self) -> bool {
        matches!(self, Self::Processable(_))
    }
}

/// A candidate path paired with its classification outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedFile {
    pub path: PathBuf,
    pub outcome: Classification,
}

/// An oversized or unmeasurable entry as it surfaces in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub detail: String,
}

impl ClassifiedFile {
    /// The report-facing view of a non-processable entry, if any.
    pub fn as_skipped(&self) -> Option<SkippedFile> {
        match &self.outcome {
            Classification::Processable(_) => None,
            Classification::Oversized(size) => Some(SkippedFile {
                path: self.path.clone(),
                detail: format!("{:#} exceeds the chunk limit", size),
            }),
            Classification::Unmeasurable(reason) => Some(SkippedFile {
                path: self.path.clone(),
                detail: reason.clone(),
            }),
        }
    }
}
