// crates/shared-kernel/src/value_objects/chunk_limit.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_objects::FileSize;

/// Maximum permitted cumulative byte size of a single chunk.
///
/// Construction rejects a zero limit, so code holding a `ChunkLimit` never
/// needs to re-validate it. Serialized as a plain byte count; deserialization
/// goes through the same validation as construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[must_use]
#[repr(transparent)]
#[serde(into = "u64", try_from = "u64")]
pub struct ChunkLimit(u64);

impl ChunkLimit {
    pub const DEFAULT_BYTES: u64 = 25 * 1024 * 1024;

    pub fn new(bytes: u64) -> DomainResult<Self> {
        if bytes == 0 {
            return Err(DomainError::InvalidChunkLimit {
                value: bytes,
                details: "limit must be a positive number of bytes".to_string(),
            });
        }
        Ok(Self(bytes))
    }

    #[inline]
    pub const fn bytes(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn as_size(self) -> FileSize {
        FileSize::new(self.0)
    }

    /// Whether a single file of `size` may ever be placed in a chunk.
    #[inline]
    pub const fn admits(self, size: FileSize) -> bool {
        size.bytes() <= self.0
    }
}

impl Default for ChunkLimit {
    fn default() -> Self {
        Self(Self::DEFAULT_BYTES)
    }
}

impl TryFrom<u64> for ChunkLimit {
    type Error = DomainError;

    fn try_from(bytes: u64) -> DomainResult<Self> {
        Self::new(bytes)
    }
}

impl From<ChunkLimit> for u64 {
    fn from(limit: ChunkLimit) -> Self {
        limit.bytes()
    }
}

impl fmt::Display for ChunkLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{:#}", self.as_size())
        } else {
            write!(f, "{}", self.0)
        }
    }
}
