//! Playlist writing

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use super::scanner::TrackMetadata;
use crate::utils::{generate_extm3u, relativize, ExtInf};

/// What [`write_playlist`] did with the playlist file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was written (or overwritten)
    Written,
    /// No tracks, the file was left untouched
    Empty,
    /// Rendered but not written
    DryRun,
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("{} has no {field} to write", path.display())]
    MissingField { path: PathBuf, field: &'static str },

    #[error("failed to write playlist {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Render the playlist document for `tracks`
///
/// Track paths have `root_folder` removed so the playlist can sit in the root
/// folder and refer to its tracks relatively. Paths that are not valid UTF-8
/// are written lossily: each invalid sequence becomes U+FFFD before the root
/// folder is removed, so the line still appears but may not resolve.
pub fn render_playlist(
    tracks: &[TrackMetadata],
    root_folder: &str,
) -> Result<String, WriteError> {
    let entries = tracks
        .iter()
        .map(|track| {
            let missing = |field: &'static str| WriteError::MissingField {
                path: track.filename.clone(),
                field,
            };
            Ok::<_, WriteError>(ExtInf {
                seconds: track.length,
                artist: track.artist.first().ok_or_else(|| missing("artist"))?,
                title: track.title.first().ok_or_else(|| missing("title"))?,
                location: relativize(&track.filename.to_string_lossy(), root_folder),
            })
        })
        .collect::<Result<Vec<_>, WriteError>>()?;

    Ok(generate_extm3u(&entries))
}

/// Write `tracks` as an extended M3U playlist at `path`
///
/// Nothing is written when `tracks` is empty or `dry_run` is set. An existing
/// file is overwritten.
pub fn write_playlist(
    path: &Path,
    tracks: &[TrackMetadata],
    root_folder: &str,
    dry_run: bool,
) -> Result<WriteOutcome, WriteError> {
    if tracks.is_empty() {
        info!("No mp3 files found for playlist '{}'.", path.display());
        return Ok(WriteOutcome::Empty);
    }

    let content = render_playlist(tracks, root_folder)?;

    if dry_run {
        info!(
            "Dry run: would write playlist '{}' ({} tracks)",
            path.display(),
            tracks.len()
        );
        debug!("{}", content);
        return Ok(WriteOutcome::DryRun);
    }

    info!("Writing playlist '{}'...", path.display());

    fs::write(path, content).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Wrote M3U: {} ({} tracks)", path.display(), tracks.len());
    Ok(WriteOutcome::Written)
}
