// Ports - Interface definitions (contracts)

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::*;
use crate::domain::model::*;

/// Port for media file probing
#[async_trait]
pub trait ProbePort: Send + Sync {
    /// Report the width and height of the first video stream.
    ///
    /// A probe that runs and exits non-zero must surface as
    /// [`DomainError::ProbeNonZeroExit`]; a probe that cannot be started as
    /// [`DomainError::ProbeLaunchFailure`].
    async fn probe_resolution(&self, file: &VideoFile) -> Result<Resolution, DomainError>;
}

/// Port for file system operations
#[async_trait]
pub trait FsPort: Send + Sync {
    /// Check if directory exists
    async fn directory_exists(&self, dir_path: &Path) -> Result<bool, DomainError>;

    /// Recursively list video files under a directory, in deterministic order
    async fn list_video_files(&self, dir_path: &Path) -> Result<Vec<PathBuf>, DomainError>;

    /// Permanently delete a file
    async fn delete_file(&self, file_path: &Path) -> Result<(), DomainError>;
}

/// Persisted application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Folder processed by the last successful sweep
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_folder: Option<String>,
}

/// Port for configuration persistence
pub trait ConfigPort: Send + Sync {
    /// Load configuration; missing or malformed storage yields the default
    fn load_config(&self) -> AppConfig;

    /// Save configuration, replacing whatever was stored
    fn save_config(&self, config: &AppConfig) -> Result<(), DomainError>;

    /// Where the configuration lives
    fn config_file_path(&self) -> &Path;
}
