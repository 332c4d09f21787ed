// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod git;
pub mod measurement;
pub mod persistence;
pub mod report;
