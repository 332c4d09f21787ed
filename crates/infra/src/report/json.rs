// crates/infra/src/report/json.rs
use std::path::PathBuf;

use git_chunks_ports::report::{ReportDto, ReportSink};
use git_chunks_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileWriter;

/// Structured JSON rendering of the chunk report.
///
/// Printed to stdout, or persisted to `output` instead when a path is
/// given (machine consumers usually want one or the other, not both).
pub struct JsonReportRenderer {
    output: Option<PathBuf>,
}

impl JsonReportRenderer {
    pub fn new(output: Option<PathBuf>) -> Self {
        Self { output }
    }
}

impl ReportSink for JsonReportRenderer {
    fn render(&self, report: &ReportDto) -> Result<()> {
        let json = serde_json::to_string_pretty(report)
            .map_err(InfrastructureError::from)?;

        match &self.output {
            Some(path) => {
                FileWriter::atomic_write(path, json.as_bytes()).map_err(|err| {
                    InfrastructureError::FileWrite { path: path.clone(), source: err }
                })?;
            }
            None => println!("{json}"),
        }
        Ok(())
    }
}
