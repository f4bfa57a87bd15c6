//! Error handling module for VidSweep
//!
//! These are the pre-flight failures that stop a batch before it starts.
//! Per-file failures live in [`crate::domain::errors::DomainError`] and never
//! abort a batch.

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Main error type for VidSweep operations
#[derive(Error, Debug)]
pub enum VidSweepError {
    /// No folder given on the command line and none saved in the config
    #[error("No input folder given and none saved in {config_path}")]
    MissingInputFolder { config_path: String },

    /// Folder missing or not a directory
    #[error("The provided input folder path does not exist or is not a directory: {path}")]
    InvalidInputFolder { path: String },

    /// Folder contains no files with a video extension
    #[error("No video files found in the input folder: {path}")]
    NoVideoFiles { path: String },

    /// A batch is already in flight
    #[error("Already processing videos.")]
    AlreadyProcessing,

    /// Domain error raised outside per-file processing
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Result type alias for VidSweep operations
pub type VidSweepResult<T> = std::result::Result<T, VidSweepError>;
