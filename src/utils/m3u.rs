//! Extended M3U rendering

/// One `#EXTINF` entry of an extended M3U playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtInf<'a> {
    /// Duration in whole seconds
    pub seconds: u64,
    pub artist: &'a str,
    pub title: &'a str,
    /// Path line written after the `#EXTINF` line
    pub location: String,
}

/// Generate extended M3U playlist content
///
/// Writes the `#EXTM3U` header followed by an `#EXTINF` line and a path line
/// per entry, in the order given.
pub fn generate_extm3u(entries: &[ExtInf<'_>]) -> String {
    let mut content = String::from("#EXTM3U\n");
    for entry in entries {
        content.push_str(&format!(
            "#EXTINF:{},{} - {}\n",
            entry.seconds, entry.artist, entry.title
        ));
        content.push_str(&entry.location);
        content.push('\n');
    }
    content
}

/// Strip the root folder from a track path
///
/// Every occurrence of `root_folder` is removed, not only a leading one, so a
/// nested folder that repeats the root's name is collapsed as well.
pub fn relativize(path: &str, root_folder: &str) -> String {
    path.replace(root_folder, "")
}
