// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;

fn main() -> Result<()> {
    git_chunks::logging::init();
    git_chunks::bootstrap::run()
}
