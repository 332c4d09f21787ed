// src/cli/args.rs
use std::path::PathBuf;

use clap::Parser;

use crate::cli::value_enum::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "git_chunks",
    version,
    about = "Groups untracked files of a git working tree into size-bounded commit chunks"
)]
pub struct Args {
    /// Repository root (must be a git working tree)
    pub path: Option<PathBuf>,

    /// Maximum chunk size: plain bytes or a suffixed literal like 25MiB, 512K
    #[arg(long, default_value = "25MiB")]
    pub limit: String,

    /// Report format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Also write the report to this file (atomically)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Number of size-probe threads
    #[arg(long)]
    pub jobs: Option<usize>,
}
