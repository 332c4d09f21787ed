// src/config.rs
use std::path::PathBuf;

use git_chunks_infra::git::is_worktree;
use git_chunks_shared_kernel::{path::logical_absolute, ChunkLimit, PresentationError};

use crate::cli::{parsers::parse_size, Args, OutputFormat};

/// Validated run configuration.
///
/// Construction performs every whole-run precondition check: size-literal
/// parsing, positive limit, and root validation (exists, is a directory,
/// is a git working tree). The pipeline itself never re-validates.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub root: PathBuf,
    pub limit: ChunkLimit,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub jobs: usize,
}

impl AppConfig {
    pub fn from_args(args: Args) -> anyhow::Result<Self> {
        let bytes = parse_size(&args.limit)?;
        let limit = ChunkLimit::new(bytes)?;

        let root = logical_absolute(&args.path.unwrap_or_else(|| PathBuf::from(".")));
        validate_root(&root)?;

        let jobs = args.jobs.unwrap_or_else(num_cpus::get).max(1);

        Ok(Self { root, limit, format: args.format, output: args.output, jobs })
    }
}

fn validate_root(root: &PathBuf) -> Result<(), PresentationError> {
    if !root.is_dir() {
        return Err(PresentationError::InvalidRoot {
            path: root.clone(),
            reason: "not an existing directory".to_string(),
        });
    }
    if !is_worktree(root) {
        return Err(PresentationError::InvalidRoot {
            path: root.clone(),
            reason: "not a git working tree".to_string(),
        });
    }
    Ok(())
}
