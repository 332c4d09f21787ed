// crates/domain/src/model/run_stats.rs
use git_chunks_shared_kernel::FileSize;

/// Counters accumulated over a single run.
///
/// Owned by the run's [`StatsCollector`](crate::stats::StatsCollector);
/// handed out read-only once the run is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunStats {
    pub total_candidates: usize,
    pub processed_count: usize,
    pub unmeasurable_count: usize,
    pub oversized_count: usize,
    pub total_processable_size: FileSize,
    pub chunk_count: usize,
}

impl RunStats {
    /// Every candidate lands in exactly one of the three buckets.
    pub fn is_consistent(&self) -> bool {
        self.total_candidates
            == self.processed_count + self.unmeasurable_count + self.oversized_count
    }
}
