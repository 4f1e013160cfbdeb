//! CLI command handlers

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::generate;
use colored::Colorize;
use std::io;
use std::path::Path;
use tracing::{error, info};

use crate::playlist::{
    load_jobs, run_job, JobDescriptor, JobError, LoftyTagReader, TagReader, WriteOutcome,
};

/// How the batch reacts to failing jobs
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Render playlists without writing them
    pub dry_run: bool,
    /// Log scan failures and move on instead of aborting
    pub keep_going: bool,
}

/// Counts of what happened to each job of a batch
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub written: usize,
    pub empty: usize,
    pub dry_run: usize,
    /// Jobs whose playlist could not be written
    pub ignored: usize,
    /// Jobs whose folders could not be scanned (only with `keep_going`)
    pub failed: usize,
    pub tracks: usize,
}

/// Run every job in order
///
/// Write failures are logged and the batch continues. Scan failures abort the
/// batch unless `keep_going` is set.
pub fn run_batch<R>(
    reader: &R,
    jobs: &[JobDescriptor],
    options: BatchOptions,
) -> Result<BatchSummary>
where
    R: TagReader + ?Sized,
{
    let mut summary = BatchSummary::default();

    for job in jobs {
        let playlist = job.playlist_path();

        match run_job(reader, job, options.dry_run) {
            Ok(report) => {
                summary.tracks += report.tracks;
                match report.outcome {
                    WriteOutcome::Written => summary.written += 1,
                    WriteOutcome::Empty => summary.empty += 1,
                    WriteOutcome::DryRun => summary.dry_run += 1,
                }
            }
            Err(JobError::Write(e)) => {
                info!(
                    "Error occurred when writing playlist '{}'. Ignoring: {:#}",
                    playlist.display(),
                    anyhow::Error::new(e)
                );
                summary.ignored += 1;
            }
            Err(JobError::Scan(e)) if options.keep_going => {
                error!(
                    "Error occurred when scanning folders for playlist '{}'. Skipping: {:#}",
                    playlist.display(),
                    anyhow::Error::new(e)
                );
                summary.failed += 1;
            }
            Err(JobError::Scan(e)) => {
                return Err(e).with_context(|| {
                    format!(
                        "Failed to scan folders for playlist '{}'",
                        playlist.display()
                    )
                });
            }
        }
    }

    Ok(summary)
}

/// Handle playlist generation from a JSON job file
pub fn generate_playlists(json: &Path, options: BatchOptions) -> Result<()> {
    let jobs = load_jobs(json)?;
    info!("Generating {} playlists from {}", jobs.len(), json.display());

    let summary = run_batch(&LoftyTagReader, &jobs, options)?;

    println!();
    if options.dry_run {
        println!(
            "{} {} playlists rendered, none written",
            "[DRY RUN]".yellow(),
            summary.dry_run
        );
    }
    println!(
        "{} {} written, {} empty, {} tracks",
        "Done:".green().bold(),
        summary.written,
        summary.empty,
        summary.tracks
    );
    if summary.ignored > 0 || summary.failed > 0 {
        println!(
            "  {}",
            format!(
                "{} playlists ignored, {} failed to scan",
                summary.ignored, summary.failed
            )
            .red()
        );
    }

    Ok(())
}

/// Handle the `--completions` flag
pub fn completion(shell: clap_complete::Shell) {
    let mut cmd = super::Cli::command();
    generate(shell, &mut cmd, "m3ugen", &mut io::stdout());
}
