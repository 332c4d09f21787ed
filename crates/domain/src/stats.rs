// crates/domain/src/stats.rs
use crate::model::{Chunk, Classification, RunStats};

/// Sole owner and mutator of a run's [`RunStats`].
///
/// Observes every classification and every emitted chunk; `snapshot()` is
/// valid at any point and always satisfies
/// `total_candidates == processed + unmeasurable + oversized`.
#[derive(Debug, Default)]
pub struct StatsCollector {
    stats: RunStats,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_classification(&mut self, outcome: &Classification) {
        self.stats.total_candidates += 1;
        match outcome {
            Classification::Processable(size) => {
                self.stats.processed_count += 1;
                self.stats.total_processable_size += *size;
            }
            Classification::Oversized(_) => self.stats.oversized_count += 1,
            Classification::Unmeasurable(_) => self.stats.unmeasurable_count += 1,
        }
    }

    pub fn record_chunk(&mut self, _chunk: &Chunk) {
        self.stats.chunk_count += 1;
    }

    pub fn snapshot(&self) -> RunStats {
        self.stats
    }
}
