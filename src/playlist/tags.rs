//! Tag reading
//!
//! The scanner only sees the [`TagReader`] trait, so the tag library behind it
//! can be swapped (or faked in tests) without touching scanning or writing.

use lofty::file::{AudioFile, TaggedFileExt};
use lofty::tag::ItemKey;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Raw metadata returned by a [`TagReader`]
///
/// Nothing is validated here: missing values stay `None` or empty and the
/// scanner decides which ones are required.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagData {
    /// Decoded audio duration
    pub duration: Duration,
    /// Raw track number value, possibly in `n/total` form
    pub track_number: Option<String>,
    pub artists: Vec<String>,
    pub titles: Vec<String>,
}

#[derive(Debug, Error)]
pub enum TagError {
    #[error("failed to read tags from {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("{} has no tags", path.display())]
    NoTags { path: PathBuf },
}

/// Reads duration and tags from an audio file
pub trait TagReader {
    fn read_tags(&self, path: &Path) -> Result<TagData, TagError>;
}

/// [`TagReader`] backed by lofty
#[derive(Debug, Clone, Copy, Default)]
pub struct LoftyTagReader;

impl TagReader for LoftyTagReader {
    fn read_tags(&self, path: &Path) -> Result<TagData, TagError> {
        let tagged_file = lofty::read_from_path(path).map_err(|e| TagError::Unreadable {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

        let duration = tagged_file.properties().duration();

        let tag = tagged_file
            .primary_tag()
            .or_else(|| tagged_file.first_tag())
            .ok_or_else(|| TagError::NoTags {
                path: path.to_path_buf(),
            })?;

        let data = TagData {
            duration,
            track_number: tag.get_string(&ItemKey::TrackNumber).map(str::to_string),
            artists: tag
                .get_strings(&ItemKey::TrackArtist)
                .map(str::to_string)
                .collect(),
            titles: tag
                .get_strings(&ItemKey::TrackTitle)
                .map(str::to_string)
                .collect(),
        };

        debug!("Read tags from {}: {:?}", path.display(), data);
        Ok(data)
    }
}
