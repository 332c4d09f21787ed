// crates/infra/src/report/text.rs
use std::{fmt::Write as _, path::PathBuf};

use git_chunks_ports::report::{ReportDto, ReportSink};
use git_chunks_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileWriter;

const RULE_HEAVY: &str = "================================================================================";
const RULE_LIGHT: &str = "--------------------------------------------------------------------------------";

/// Human-readable chunking report: header, summary statistics, per-chunk
/// details and the trailing list of skipped files.
///
/// Always printed to stdout; additionally persisted to `output` when set.
pub struct TextReportRenderer {
    output: Option<PathBuf>,
}

impl TextReportRenderer {
    pub fn new(output: Option<PathBuf>) -> Self {
        Self { output }
    }
}

impl ReportSink for TextReportRenderer {
    fn render(&self, report: &ReportDto) -> Result<()> {
        let rendered = render_text(report);
        print!("{rendered}");

        if let Some(path) = &self.output {
            FileWriter::atomic_write(path, rendered.as_bytes()).map_err(|err| {
                InfrastructureError::FileWrite { path: path.clone(), source: err }
            })?;
        }
        Ok(())
    }
}

fn render_text(report: &ReportDto) -> String {
    let mut out = String::new();
    let stats = &report.stats;

    let _ = writeln!(out, "{RULE_HEAVY}");
    let _ = writeln!(out, "Git Repository Chunking Report");
    let _ = writeln!(out, "Repository: {}", report.root.display());
    let _ = writeln!(out, "Generated: {}", report.generated_at.format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(out, "{RULE_LIGHT}");
    let _ = writeln!(out, "Summary Statistics:");
    let _ = writeln!(out, "  Total files processed: {}", stats.total_candidates);
    let _ = writeln!(out, "  Successfully processed files: {}", stats.processed_count);
    let _ = writeln!(out, "  Files that couldn't be measured: {}", stats.unmeasurable_count);
    let _ = writeln!(out, "  Files too large (>{:#}): {}", report.limit, stats.oversized_count);
    let _ = writeln!(
        out,
        "  Total size of processable files: {:.2} MiB",
        stats.total_processable_bytes.megabytes()
    );
    let _ = writeln!(out, "  Total chunks created: {}", stats.chunk_count);
    let _ = writeln!(out, "{RULE_LIGHT}");

    let _ = writeln!(out, "\nChunk Details:");
    for chunk in &report.chunks {
        let _ = writeln!(
            out,
            "\nChunk #{} ({} files, {:.2} MiB):",
            chunk.index + 1,
            chunk.files.len(),
            chunk.total_bytes.megabytes()
        );
        for file in &chunk.files {
            let _ = writeln!(out, "  - {} ({:#})", file.path.display(), file.bytes);
        }
    }

    if !report.oversized.is_empty() || !report.unmeasurable.is_empty() {
        let _ = writeln!(out, "{RULE_LIGHT}");
        let _ = writeln!(out, "\nFiles that couldn't be processed:");
        for skipped in report.oversized.iter().chain(&report.unmeasurable) {
            let _ = writeln!(out, "  - {} ({})", skipped.path.display(), skipped.detail);
        }
    }

    let _ = writeln!(out, "{RULE_HEAVY}");
    out
}
