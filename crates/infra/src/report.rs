// crates/infra/src/report.rs
pub mod json;
pub mod text;

pub use json::JsonReportRenderer;
pub use text::TextReportRenderer;
