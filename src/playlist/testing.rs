//! Test doubles

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::tags::{TagData, TagError, TagReader};

/// [`TagReader`] that serves canned tags keyed by file name
///
/// Files without an entry fail with [`TagError::NoTags`].
#[derive(Debug, Default)]
pub struct FakeTagReader {
    tags: HashMap<String, TagData>,
}

impl FakeTagReader {
    pub fn with_tags(mut self, file_name: &str, data: TagData) -> Self {
        self.tags.insert(file_name.to_string(), data);
        self
    }

    pub fn with_track(
        self,
        file_name: &str,
        seconds: f64,
        track_number: &str,
        artist: &str,
        title: &str,
    ) -> Self {
        self.with_tags(
            file_name,
            TagData {
                duration: Duration::from_secs_f64(seconds),
                track_number: Some(track_number.to_string()),
                artists: vec![artist.to_string()],
                titles: vec![title.to_string()],
            },
        )
    }
}

impl TagReader for FakeTagReader {
    fn read_tags(&self, path: &Path) -> Result<TagData, TagError> {
        path.file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| self.tags.get(name))
            .cloned()
            .ok_or_else(|| TagError::NoTags {
                path: PathBuf::from(path),
            })
    }
}
