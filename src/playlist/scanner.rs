//! Directory scanning

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use super::tags::{TagData, TagError, TagReader};

/// Metadata of one discovered track
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackMetadata {
    /// Scan directory joined with the file name
    pub filename: PathBuf,
    /// Duration in whole seconds, truncated
    pub length: u64,
    /// Track number without any `/total` suffix
    pub tracknumber: String,
    pub artist: Vec<String>,
    pub title: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to list directory {}", dir.display())]
    ListDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Tags(#[from] TagError),

    #[error("{} has no {tag} tag", path.display())]
    MissingTag { path: PathBuf, tag: &'static str },
}

impl TrackMetadata {
    /// Build a record from raw tags, requiring track number, artist and title
    pub fn from_tags(filename: PathBuf, tags: TagData) -> Result<Self, ScanError> {
        let Some(raw_track) = tags.track_number.as_deref() else {
            return Err(ScanError::MissingTag {
                path: filename,
                tag: "tracknumber",
            });
        };
        let tracknumber = parse_track_number(raw_track).to_string();

        if tags.artists.is_empty() {
            return Err(ScanError::MissingTag {
                path: filename,
                tag: "artist",
            });
        }
        if tags.titles.is_empty() {
            return Err(ScanError::MissingTag {
                path: filename,
                tag: "title",
            });
        }

        Ok(Self {
            filename,
            length: tags.duration.as_secs(),
            tracknumber,
            artist: tags.artists,
            title: tags.titles,
        })
    }
}

/// Take the part of a track number before the first `/` (`"3/12"` -> `"3"`)
pub fn parse_track_number(raw: &str) -> &str {
    raw.split_once('/').map_or(raw, |(number, _)| number)
}

/// Match `*.mp3` the way a shell glob would: extension in any case, no dotfiles
///
/// Names are compared as raw OS strings, so names that are not valid UTF-8
/// still match.
fn is_mp3(path: &Path) -> bool {
    let visible = path
        .file_name()
        .is_some_and(|name| !name.as_encoded_bytes().starts_with(b"."));

    visible
        && path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("mp3"))
}

/// Scan one directory (non-recursive) and append a record per MP3 to `tracks`
///
/// Files are visited in the order the file system lists them. The first file
/// that cannot be read, or lacks a required tag, stops the scan.
///
/// Returns the number of records appended.
pub fn scan_directory<R>(
    reader: &R,
    dir: &Path,
    tracks: &mut Vec<TrackMetadata>,
) -> Result<usize, ScanError>
where
    R: TagReader + ?Sized,
{
    info!("Processing directory '{}'...", dir.display());

    let list_err = |source: std::io::Error| ScanError::ListDir {
        dir: dir.to_path_buf(),
        source,
    };

    let mut found = 0;
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        let path = dir.join(entry.file_name());

        if !is_mp3(&path) || !path.is_file() {
            continue;
        }

        let tags = reader.read_tags(&path)?;
        let track = TrackMetadata::from_tags(path, tags)?;
        debug!("{:?}", track);

        tracks.push(track);
        found += 1;
    }

    Ok(found)
}
