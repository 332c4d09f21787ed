// crates/domain/src/model.rs
pub mod candidate;
pub mod chunk;
pub mod classification;
pub mod run_stats;

pub use candidate::FileCandidate;
pub use chunk::{Chunk, ChunkMember};
pub use classification::{Classification, ClassifiedFile, SkippedFile};
pub use run_stats::RunStats;
