//! # Domain
//!
//! Pure chunk-planning logic: classification of measured files, greedy
//! packing into size-bounded chunks, and run statistics. No I/O happens
//! here; paths arrive already probed and leave as plain values.

#![allow(clippy::multiple_crate_versions)]

pub mod classify;
pub mod model;
pub mod packing;
pub mod stats;

pub use classify::classify;
pub use model::{Chunk, ChunkMember, Classification, ClassifiedFile, FileCandidate, RunStats, SkippedFile};
pub use packing::pack;
pub use stats::StatsCollector;
