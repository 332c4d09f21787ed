// src/bootstrap.rs
use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser as _;

use git_chunks_infra::{
    git::GitUntrackedSource,
    measurement::StrategyProbe,
    report::{JsonReportRenderer, TextReportRenderer},
};
use git_chunks_ports::report::ReportSink;
use git_chunks_usecase::PlanChunks;

use crate::{
    cli::{Args, OutputFormat},
    config::AppConfig,
};

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::from_args(args)?;
    run_with_config(config)
}

pub fn run_with_config(config: AppConfig) -> Result<()> {
    tracing::info!(
        version = crate::VERSION,
        root = %config.root.display(),
        limit = %format!("{:#}", config.limit),
        jobs = config.jobs,
        "starting chunk planning"
    );

    let source = GitUntrackedSource;
    let probe = StrategyProbe::new().with_jobs(config.jobs);
    let plan = PlanChunks::new(&source, &probe)
        .run(&config.root, config.limit)
        .context("chunk planning failed")?;

    if plan.stats.total_candidates == 0 {
        tracing::info!("no untracked files found in the repository");
    } else if plan.chunks.is_empty() {
        tracing::warn!(
            oversized = plan.stats.oversized_count,
            unmeasurable = plan.stats.unmeasurable_count,
            "no chunks could be created"
        );
    }

    let report = plan.to_report(Local::now());
    let sink: Box<dyn ReportSink> = match config.format {
        OutputFormat::Table => Box::new(TextReportRenderer::new(config.output.clone())),
        OutputFormat::Json => Box::new(JsonReportRenderer::new(config.output.clone())),
    };
    sink.render(&report).context("report rendering failed")?;

    Ok(())
}
