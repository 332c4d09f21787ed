//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and infrastructure adapters
//! to implement the chunk-planning run:
//!
//! - [`orchestrator`]: discovery → probing → classifying → packing
//! - [`stage`]: the strictly sequential whole-run state machine
//! - [`dto`]: the run output handed to the reporting collaborator
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;
pub mod stage;

pub use dto::ChunkPlan;
pub use orchestrator::PlanChunks;
pub use stage::{RunStage, StageTracker};
