//! Job file loading

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One playlist to generate
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobDescriptor {
    /// Playlist file name, relative to `root_folder`
    pub m3u_filename: String,
    /// Folder the playlist and its track paths are relative to
    pub root_folder: String,
    /// Folders to scan, relative to `root_folder`
    pub folders: Vec<String>,
}

impl JobDescriptor {
    /// Path of the playlist file
    pub fn playlist_path(&self) -> PathBuf {
        Path::new(&self.root_folder).join(&self.m3u_filename)
    }

    /// Paths of the folders to scan, in order
    pub fn folder_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.folders
            .iter()
            .map(|folder| Path::new(&self.root_folder).join(folder))
    }
}

/// Load the list of jobs from a JSON file
pub fn load_jobs(path: &Path) -> Result<Vec<JobDescriptor>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read job file {}", path.display()))?;

    let jobs: Vec<JobDescriptor> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse job file {}", path.display()))?;

    debug!("Loaded {} jobs from {}", jobs.len(), path.display());
    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_jobs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jobs.json");
        fs::write(
            &path,
            r#"[
                {"m3u_filename": "all.m3u", "root_folder": "/lib/", "folders": ["a", "b"]},
                {
                    "m3u_filename": "rock.m3u",
                    "root_folder": "/rock/",
                    "folders": [],
                    "note": "ignored"
                }
            ]"#,
        )
        .unwrap();

        let jobs = load_jobs(&path).unwrap();

        assert_eq!(jobs.len(), 2);
        assert_eq!(
            jobs[0],
            JobDescriptor {
                m3u_filename: "all.m3u".to_string(),
                root_folder: "/lib/".to_string(),
                folders: vec!["a".to_string(), "b".to_string()],
            }
        );
        assert!(jobs[1].folders.is_empty());
    }

    #[test]
    fn test_load_jobs_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_jobs(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read job file"));
    }

    #[test]
    fn test_load_jobs_rejects_missing_field() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jobs.json");
        fs::write(&path, r#"[{"m3u_filename": "all.m3u", "folders": []}]"#).unwrap();

        let err = load_jobs(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse job file"));
    }

    #[test]
    fn test_paths_join_root_folder() {
        let job = JobDescriptor {
            m3u_filename: "all.m3u".to_string(),
            root_folder: "/lib/".to_string(),
            folders: vec!["a".to_string(), "b/c".to_string()],
        };

        assert_eq!(job.playlist_path(), PathBuf::from("/lib/all.m3u"));
        assert_eq!(
            job.folder_paths().collect::<Vec<_>>(),
            vec![PathBuf::from("/lib/a"), PathBuf::from("/lib/b/c")]
        );
    }

    #[test]
    fn test_paths_without_trailing_separator() {
        let job = JobDescriptor {
            m3u_filename: "all.m3u".to_string(),
            root_folder: "/lib".to_string(),
            folders: vec!["a".to_string()],
        };

        assert_eq!(job.playlist_path(), PathBuf::from("/lib/all.m3u"));
        assert_eq!(job.folder_paths().next(), Some(PathBuf::from("/lib/a")));
    }
}
