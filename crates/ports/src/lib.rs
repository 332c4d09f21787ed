//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`discovery`]: enumeration of untracked files from the VCS
//! - [`measurement`]: per-file size probing
//! - [`report`]: rendering of the final chunk report
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod discovery;
pub mod measurement;
pub mod report;
