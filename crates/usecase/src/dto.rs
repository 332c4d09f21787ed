// crates/usecase/src/dto.rs
use std::path::PathBuf;

use chrono::{DateTime, Local};
use git_chunks_domain::model::{Chunk, RunStats, SkippedFile};
use git_chunks_ports::report::{
    ChunkDto, ChunkFileDto, ReportDto, RunStatsDto, SkippedFileDto,
};
use git_chunks_shared_kernel::ChunkLimit;

/// Output of one completed run: the ordered chunk list, the stats
/// snapshot and the skipped entries, all read-only from here on.
#[derive(Debug, Clone)]
pub struct ChunkPlan {
    pub root: PathBuf,
    pub limit: ChunkLimit,
    pub stats: RunStats,
    pub chunks: Vec<Chunk>,
    pub oversized: Vec<SkippedFile>,
    pub unmeasurable: Vec<SkippedFile>,
}

impl ChunkPlan {
    /// Convert the domain output into the DTO crossing the report port.
    pub fn to_report(&self, generated_at: DateTime<Local>) -> ReportDto {
        ReportDto {
            root: self.root.clone(),
            generated_at,
            limit: self.limit,
            stats: stats_to_dto(&self.stats),
            chunks: self.chunks.iter().map(chunk_to_dto).collect(),
            oversized: self.oversized.iter().map(skipped_to_dto).collect(),
            unmeasurable: self.unmeasurable.iter().map(skipped_to_dto).collect(),
        }
    }
}

fn stats_to_dto(stats: &RunStats) -> RunStatsDto {
    RunStatsDto {
        total_candidates: stats.total_candidates,
        processed_count: stats.processed_count,
        unmeasurable_count: stats.unmeasurable_count,
        oversized_count: stats.oversized_count,
        total_processable_bytes: stats.total_processable_size,
        chunk_count: stats.chunk_count,
    }
}

fn chunk_to_dto(chunk: &Chunk) -> ChunkDto {
    ChunkDto {
        index: chunk.index,
        total_bytes: chunk.total_size,
        files: chunk
            .members
            .iter()
            .map(|m| ChunkFileDto { path: m.path.clone(), bytes: m.size })
            .collect(),
    }
}

fn skipped_to_dto(skipped: &SkippedFile) -> SkippedFileDto {
    SkippedFileDto { path: skipped.path.clone(), detail: skipped.detail.clone() }
}
