// crates/usecase/src/orchestrator.rs
use std::path::Path;

use git_chunks_domain::{
    classify,
    model::{ChunkMember, Classification, FileCandidate},
    pack, StatsCollector,
};
use git_chunks_ports::{discovery::UntrackedFileSource, measurement::SizeProbe};
use git_chunks_shared_kernel::{ApplicationError, ChunkLimit, Result};

use crate::{dto::ChunkPlan, stage::StageTracker};

/// Orchestrates one chunk-planning run over a validated working tree.
///
/// Per-file probe failures are recovered locally and recorded in the
/// stats; only discovery failures are fatal, and a fatal run produces no
/// chunks at all.
pub struct PlanChunks<'a> {
    source: &'a dyn UntrackedFileSource,
    probe: &'a dyn SizeProbe,
}

impl<'a> PlanChunks<'a> {
    pub fn new(source: &'a dyn UntrackedFileSource, probe: &'a dyn SizeProbe) -> Self {
        Self { source, probe }
    }

    pub fn run(&self, root: &Path, limit: ChunkLimit) -> Result<ChunkPlan> {
        let mut stage = StageTracker::new();
        let mut collector = StatsCollector::new();

        let paths = match self.source.untracked_files(root) {
            Ok(paths) => paths,
            Err(err) => {
                stage.fail();
                return Err(ApplicationError::DiscoveryFailed {
                    reason: format!("cannot enumerate untracked files under '{}'", root.display()),
                    source: Some(Box::new(err)),
                }
                .into());
            }
        };
        tracing::info!(count = paths.len(), root = %root.display(), "untracked files discovered");

        stage.advance();
        let candidates = self.probe_all(paths);

        stage.advance();
        let classified = classify(candidates, limit);
        for file in &classified {
            collector.record_classification(&file.outcome);
        }

        stage.advance();
        let members: Vec<ChunkMember> = classified
            .iter()
            .filter_map(|file| match &file.outcome {
                Classification::Processable(size) => {
                    Some(ChunkMember::new(file.path.clone(), *size))
                }
                _ => None,
            })
            .collect();
        let chunks = pack(members, limit);
        for chunk in &chunks {
            collector.record_chunk(chunk);
        }

        stage.advance();
        let stats = collector.snapshot();
        tracing::info!(
            total = stats.total_candidates,
            processed = stats.processed_count,
            oversized = stats.oversized_count,
            unmeasurable = stats.unmeasurable_count,
            chunks = stats.chunk_count,
            "run complete"
        );

        let mut oversized = Vec::new();
        let mut unmeasurable = Vec::new();
        for file in &classified {
            if let Some(skipped) = file.as_skipped() {
                match &file.outcome {
                    Classification::Oversized(_) => oversized.push(skipped),
                    _ => unmeasurable.push(skipped),
                }
            }
        }

        Ok(ChunkPlan { root: root.to_path_buf(), limit, stats, chunks, oversized, unmeasurable })
    }

    fn probe_all(&self, paths: Vec<std::path::PathBuf>) -> Vec<FileCandidate> {
        let results = self.probe.measure_many(&paths);
        debug_assert_eq!(results.len(), paths.len(), "probe must answer every path in order");

        paths
            .into_iter()
            .zip(results)
            .map(|(path, result)| match result {
                Ok(size) => FileCandidate::measured(path, size),
                Err(failure) => {
                    tracing::debug!(path = %path.display(), reason = %failure, "size probe failed");
                    FileCandidate::unmeasured(path, failure.reason)
                }
            })
            .collect()
    }
}
