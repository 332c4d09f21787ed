// crates/domain/src/model/chunk.rs
use std::path::PathBuf;

use git_chunks_shared_kernel::FileSize;

/// One file slated for a chunk, with the size the probe reported for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkMember {
    pub path: PathBuf,
    pub size: FileSize,
}

impl ChunkMember {
    pub fn new(path: impl Into<PathBuf>, size: FileSize) -> Self {
        Self { path: path.into(), size }
    }
}

/// A bounded-size group of files slated for one commit.
///
/// Invariant: `total_size` equals the sum of member sizes and never exceeds
/// the limit the packer was given; members keep classification order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub index: usize,
    pub members: Vec<ChunkMember>,
    pub total_size: FileSize,
}

impl Chunk {
    pub(crate) fn sealed(index: usize, members: Vec<ChunkMember>, total_size: FileSize) -> Self {
        debug_assert_eq!(
            members.iter().map(|m| m.size).sum::<FileSize>(),
            total_size,
            "chunk total must equal the sum of member sizes"
        );
        Self { index, members, total_size }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
