// crates/shared-kernel/src/value_objects/mod.rs
pub mod chunk_limit;
pub mod file_size;

pub use chunk_limit::ChunkLimit;
pub use file_size::FileSize;
