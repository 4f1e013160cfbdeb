//! Per-job orchestration: scan every folder, then write one playlist

use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

use super::job::JobDescriptor;
use super::scanner::{scan_directory, ScanError, TrackMetadata};
use super::tags::TagReader;
use super::writer::{write_playlist, WriteError, WriteOutcome};

/// Result of a job that ran to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobReport {
    pub playlist: PathBuf,
    pub tracks: usize,
    pub outcome: WriteOutcome,
}

#[derive(Debug, Error)]
pub enum JobError {
    #[error("scan failed")]
    Scan(#[from] ScanError),

    #[error("playlist write failed")]
    Write(#[from] WriteError),
}

/// Run one job
///
/// All folders feed a single track list in folder order, so one bad file
/// stops the job before anything is written.
pub fn run_job<R>(reader: &R, job: &JobDescriptor, dry_run: bool) -> Result<JobReport, JobError>
where
    R: TagReader + ?Sized,
{
    let mut tracks: Vec<TrackMetadata> = Vec::new();

    for dir in job.folder_paths() {
        let found = scan_directory(reader, &dir, &mut tracks)?;
        debug!(
            "Found {} mp3 files in {} ({} total)",
            found,
            dir.display(),
            tracks.len()
        );
    }

    let playlist = job.playlist_path();
    let outcome = write_playlist(&playlist, &tracks, &job.root_folder, dry_run)?;

    Ok(JobReport {
        playlist,
        tracks: tracks.len(),
        outcome,
    })
}
