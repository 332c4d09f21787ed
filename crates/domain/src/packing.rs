// crates/domain/src/packing.rs
use git_chunks_shared_kernel::{ChunkLimit, FileSize};

use crate::model::{Chunk, ChunkMember};

/// Greedy first-fit-to-current-chunk packing.
///
/// One chunk is open at a time; each file is appended while the running
/// total stays within the limit, otherwise the open chunk is emitted and a
/// new one starts with that file. A total exactly equal to the limit is
/// legal. No reordering or optimization pass: for a fixed input order and
/// limit the assignment is fully deterministic, which keeps the report
/// auditable. Empty input produces zero chunks.
///
/// Precondition: every member fits the limit on its own (the classifier
/// routes oversized files away before packing).
pub fn pack(members: Vec<ChunkMember>, limit: ChunkLimit) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut open: Vec<ChunkMember> = Vec::new();
    let mut open_total = FileSize::zero();

    for member in members {
        debug_assert!(limit.admits(member.size), "oversized member reached the packer");

        if !open.is_empty() && open_total.saturating_add(member.size).bytes() > limit.bytes() {
            chunks.push(Chunk::sealed(chunks.len(), std::mem::take(&mut open), open_total));
            open_total = FileSize::zero();
        }
        open_total += member.size;
        open.push(member);
    }

    if !open.is_empty() {
        chunks.push(Chunk::sealed(chunks.len(), open, open_total));
    }

    chunks
}
