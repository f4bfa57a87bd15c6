// Local filesystem adapter - Discovery and deletion on the host filesystem

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::domain::errors::*;
use crate::domain::rules::ResolutionPolicy;
use crate::ports::*;

/// Local filesystem adapter
pub struct FsLocalAdapter;

impl FsLocalAdapter {
    /// Create new local filesystem adapter
    pub fn new() -> Self {
        Self
    }

    /// Walk `root` recursively, keeping files (or symlinks to files) with a
    /// video extension. Entries are visited sorted by file name so batches are
    /// reproducible.
    fn walk_videos(root: &Path) -> Vec<PathBuf> {
        let mut videos = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                    continue;
                }
            };
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            if is_file && ResolutionPolicy::is_video_path(entry.path()) {
                videos.push(entry.into_path());
            }
        }
        debug!("Discovered {} video files under {}", videos.len(), root.display());
        videos
    }
}

impl Default for FsLocalAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FsPort for FsLocalAdapter {
    async fn directory_exists(&self, dir_path: &Path) -> Result<bool, DomainError> {
        match tokio::fs::metadata(dir_path).await {
            Ok(metadata) => Ok(metadata.is_dir()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(DomainError::FsFail(format!(
                "Failed to read {}: {}",
                dir_path.display(),
                e
            ))),
        }
    }

    async fn list_video_files(&self, dir_path: &Path) -> Result<Vec<PathBuf>, DomainError> {
        let root = dir_path.to_path_buf();
        tokio::task::spawn_blocking(move || Self::walk_videos(&root))
            .await
            .map_err(|e| DomainError::InternalError(format!("Directory walk aborted: {}", e)))
    }

    async fn delete_file(&self, file_path: &Path) -> Result<(), DomainError> {
        tokio::fs::remove_file(file_path).await.map_err(|e| {
            DomainError::FsFail(format!("Failed to delete {}: {}", file_path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_list_video_files_recursive_and_filtered() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("season1/extras")).unwrap();
        fs::write(root.join("b.MKV"), b"x").unwrap();
        fs::write(root.join("a.mp4"), b"x").unwrap();
        fs::write(root.join("notes.txt"), b"x").unwrap();
        fs::write(root.join("season1/ep1.webm"), b"x").unwrap();
        fs::write(root.join("season1/extras/bts.Mov"), b"x").unwrap();
        fs::write(root.join("season1/cover.jpg"), b"x").unwrap();
        // A directory that merely looks like a video is not a file
        fs::create_dir_all(root.join("folder.avi")).unwrap();

        let adapter = FsLocalAdapter::new();
        let files = adapter.list_video_files(root).await.unwrap();
        let relative: Vec<String> = files
            .iter()
            .map(|p| {
                p.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();

        assert_eq!(
            relative,
            vec!["a.mp4", "b.MKV", "season1/ep1.webm", "season1/extras/bts.Mov"]
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_list_video_files_follows_symlinked_files() {
        let temp_dir = TempDir::new().unwrap();
        let real = temp_dir.path().join("real");
        let scan = temp_dir.path().join("scan");
        fs::create_dir_all(&real).unwrap();
        fs::create_dir_all(&scan).unwrap();
        fs::write(real.join("low.mp4"), b"x").unwrap();
        std::os::unix::fs::symlink(real.join("low.mp4"), scan.join("link.mp4")).unwrap();
        // Symlinked directories stay excluded even with a video extension
        std::os::unix::fs::symlink(&real, scan.join("dir.mkv")).unwrap();
        // Dangling links point at nothing to probe
        std::os::unix::fs::symlink(real.join("gone.mp4"), scan.join("dangling.mp4")).unwrap();

        let adapter = FsLocalAdapter::new();
        let files = adapter.list_video_files(&scan).await.unwrap();

        assert_eq!(files, vec![scan.join("link.mp4")]);
    }

    #[tokio::test]
    async fn test_directory_exists() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("clip.mp4");
        fs::write(&file, b"x").unwrap();

        let adapter = FsLocalAdapter::new();
        assert!(adapter.directory_exists(temp_dir.path()).await.unwrap());
        assert!(!adapter.directory_exists(&file).await.unwrap());
        assert!(!adapter
            .directory_exists(&temp_dir.path().join("missing"))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_delete_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("clip.mp4");
        fs::write(&file, b"x").unwrap();

        let adapter = FsLocalAdapter::new();
        adapter.delete_file(&file).await.unwrap();
        assert!(!file.exists());

        let err = adapter.delete_file(&file).await.unwrap_err();
        assert!(matches!(err, DomainError::FsFail(_)));
    }
}
