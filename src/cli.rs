// src/cli.rs
pub mod args;
pub mod parsers;
pub mod value_enum;

pub use args::Args;
pub use value_enum::OutputFormat;
