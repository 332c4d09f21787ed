// crates/ports/src/report.rs
use std::path::PathBuf;

use chrono::{DateTime, Local};
use git_chunks_shared_kernel::{ChunkLimit, FileSize, Result};
use serde::{Deserialize, Serialize};

/// Run statistics as they cross the reporting boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RunStatsDto {
    pub total_candidates: usize,
    pub processed_count: usize,
    pub unmeasurable_count: usize,
    pub oversized_count: usize,
    pub total_processable_bytes: FileSize,
    pub chunk_count: usize,
}

/// One file inside a rendered chunk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkFileDto {
    pub path: PathBuf,
    pub bytes: FileSize,
}

/// One chunk as it appears in the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkDto {
    pub index: usize,
    pub total_bytes: FileSize,
    pub files: Vec<ChunkFileDto>,
}

/// A file the run skipped, with a human-readable reason.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedFileDto {
    pub path: PathBuf,
    pub detail: String,
}

/// Everything a renderer needs for one run, as plain read-only values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDto {
    pub root: PathBuf,
    pub generated_at: DateTime<Local>,
    pub limit: ChunkLimit,
    pub stats: RunStatsDto,
    pub chunks: Vec<ChunkDto>,
    pub oversized: Vec<SkippedFileDto>,
    pub unmeasurable: Vec<SkippedFileDto>,
}

/// Port for rendering the final report.
pub trait ReportSink: Send + Sync {
    fn render(&self, report: &ReportDto) -> Result<()>;
}
