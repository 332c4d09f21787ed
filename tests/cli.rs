//! CLI smoke tests.

#[path = "cli/smoke_tests.rs"]
mod smoke_tests;
