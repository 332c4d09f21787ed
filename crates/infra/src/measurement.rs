// crates/infra/src/measurement.rs
pub mod probe;
pub mod strategies;

pub use probe::StrategyProbe;
pub use strategies::{default_strategies, SizeStrategy};
