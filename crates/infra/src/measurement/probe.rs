// crates/infra/src/measurement/probe.rs
use std::path::{Path, PathBuf};

use git_chunks_ports::measurement::{ProbeFailure, ProbeResult, SizeProbe};
use git_chunks_shared_kernel::FileSize;

use crate::measurement::strategies::{default_strategies, SizeStrategy};

#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 16;

/// [`SizeProbe`] that walks an ordered strategy chain per file.
///
/// The first successful strategy wins; if every strategy fails, the last
/// failure is returned as the probe's reason. Probing a batch preserves
/// input order even when the `parallel` feature fans the work out.
pub struct StrategyProbe {
    strategies: Vec<Box<dyn SizeStrategy>>,
    jobs: usize,
}

impl StrategyProbe {
    pub fn new() -> Self {
        Self::with_strategies(default_strategies())
    }

    pub fn with_strategies(strategies: Vec<Box<dyn SizeStrategy>>) -> Self {
        Self { strategies, jobs: 1 }
    }

    /// Number of worker threads for batch probing. Only effective with the
    /// `parallel` feature; a value of 1 keeps probing sequential.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }
}

impl Default for StrategyProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl SizeProbe for StrategyProbe {
    fn measure(&self, path: &Path) -> ProbeResult {
        let mut last_failure: Option<ProbeFailure> = None;
        for strategy in &self.strategies {
            match strategy.measure(path) {
                Ok(bytes) => return Ok(FileSize::from(bytes)),
                Err(err) => {
                    tracing::debug!(
                        strategy = strategy.name(),
                        path = %path.display(),
                        error = %err,
                        "size strategy failed"
                    );
                    last_failure = Some(ProbeFailure::new(format!("{}: {err}", strategy.name())));
                }
            }
        }
        Err(last_failure
            .unwrap_or_else(|| ProbeFailure::new("no measurement strategies configured")))
    }

    #[cfg(feature = "parallel")]
    fn measure_many(&self, paths: &[PathBuf]) -> Vec<ProbeResult> {
        use rayon::prelude::*;

        if self.jobs == 1 || paths.len() < PARALLEL_THRESHOLD {
            return paths.iter().map(|path| self.measure(path)).collect();
        }

        // A dedicated pool instead of the global one; the chosen job count
        // stays local to this probe.
        let pool = match rayon::ThreadPoolBuilder::new().num_threads(self.jobs).build() {
            Ok(pool) => pool,
            Err(err) => {
                tracing::warn!(error = %err, "thread pool unavailable, probing sequentially");
                return paths.iter().map(|path| self.measure(path)).collect();
            }
        };

        // par_iter + collect keeps results in input order.
        pool.install(|| paths.par_iter().map(|path| self.measure(path)).collect())
    }

    #[cfg(not(feature = "parallel"))]
    fn measure_many(&self, paths: &[PathBuf]) -> Vec<ProbeResult> {
        paths.iter().map(|path| self.measure(path)).collect()
    }
}
