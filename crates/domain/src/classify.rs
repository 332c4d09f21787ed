// crates/domain/src/classify.rs
use git_chunks_shared_kernel::ChunkLimit;

use crate::model::{Classification, ClassifiedFile, FileCandidate};

/// Partition probed candidates into processable, oversized and unmeasurable.
///
/// One-to-one and order-preserving: the n-th output classifies the n-th
/// input. Directories never reach this function; discovery only hands over
/// regular files and symlinks to regular files.
pub fn classify(candidates: Vec<FileCandidate>, limit: ChunkLimit) -> Vec<ClassifiedFile> {
    candidates
        .into_iter()
        .map(|candidate| classify_one(candidate, limit))
        .collect()
}

fn classify_one(candidate: FileCandidate, limit: ChunkLimit) -> ClassifiedFile {
    let outcome = match candidate.size {
        None => Classification::Unmeasurable(
            candidate.failure.unwrap_or_else(|| "size unavailable".to_string()),
        ),
        Some(size) if !limit.admits(size) => Classification::Oversized(size),
        Some(size) => Classification::Processable(size),
    };
    ClassifiedFile { path: candidate.path, outcome }
}

#[cfg(test)]
mod tests {
    use git_chunks_shared_kernel::FileSize;

    use super::*;

    fn limit(bytes: u64) -> ChunkLimit {
        ChunkLimit::new(bytes).expect("positive limit")
    }

    #[test]
    fn size_at_limit_is_processable_one_past_is_oversized() {
        let classified = classify(
            vec![
                FileCandidate::measured("at_limit.bin", FileSize::from(10)),
                FileCandidate::measured("past_limit.bin", FileSize::from(11)),
            ],
            limit(10),
        );

        assert_eq!(classified[0].outcome, Classification::Processable(FileSize::from(10)));
        assert_eq!(classified[1].outcome, Classification::Oversized(FileSize::from(11)));
    }

    #[test]
    fn missing_size_becomes_unmeasurable_with_reason() {
        let classified = classify(
            vec![FileCandidate::unmeasured("gone.txt", "permission denied")],
            limit(10),
        );

        assert_eq!(
            classified[0].outcome,
            Classification::Unmeasurable("permission denied".to_string())
        );
    }

    #[test]
    fn output_preserves_input_order() {
        let classified = classify(
            vec![
                FileCandidate::measured("a", FileSize::from(1)),
                FileCandidate::unmeasured("b", "io error"),
                FileCandidate::measured("c", FileSize::from(2)),
            ],
            limit(10),
        );

        let paths: Vec<_> = classified.iter().map(|c| c.path.to_string_lossy().into_owned()).collect();
        assert_eq!(paths, ["a", "b", "c"]);
    }
}
