// crates/infra/src/persistence.rs
pub mod file_writer;

pub use file_writer::FileWriter;
