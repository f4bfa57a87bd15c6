// Domain models - Core types and data structures

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;


/// Candidate video on disk. Nothing beyond the path is retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoFile {
    pub path: PathBuf,
}

impl VideoFile {
    /// Create a new video file reference
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path as given by the caller
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Final path component for display, falling back to the full path
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

impl fmt::Display for VideoFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Pixel dimensions of the first video stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Create a new resolution with validation
    pub fn new(width: u32, height: u32) -> Result<Self, DomainError> {
        if width == 0 || height == 0 {
            return Err(DomainError::BadArgs(
                "Video dimensions cannot be zero".to_string(),
            ));
        }
        Ok(Self { width, height })
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Minimum acceptable resolution. Anything below it on either axis is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Threshold {
    width_min: u32,
    height_min: u32,
}

impl Threshold {
    /// 1920x1080
    pub const FULL_HD: Threshold = Threshold {
        width_min: 1920,
        height_min: 1080,
    };

    /// Create a new threshold; both bounds must be at least 1
    pub fn new(width_min: u32, height_min: u32) -> Result<Self, DomainError> {
        if width_min == 0 || height_min == 0 {
            return Err(DomainError::BadArgs(
                "Threshold dimensions must be positive".to_string(),
            ));
        }
        Ok(Self {
            width_min,
            height_min,
        })
    }

    pub fn width_min(&self) -> u32 {
        self.width_min
    }

    pub fn height_min(&self) -> u32 {
        self.height_min
    }

    /// True when the resolution falls short on at least one axis
    pub fn is_below(&self, resolution: &Resolution) -> bool {
        resolution.width < self.width_min || resolution.height < self.height_min
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::FULL_HD
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width_min, self.height_min)
    }
}

/// Result of processing a single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProcessingOutcome {
    Retained { file: VideoFile },
    Deleted { file: VideoFile },
    ProbeError { file: VideoFile, message: String },
    UnexpectedError { file: VideoFile, message: String },
}

impl ProcessingOutcome {
    /// The file this outcome belongs to
    pub fn file(&self) -> &VideoFile {
        match self {
            ProcessingOutcome::Retained { file }
            | ProcessingOutcome::Deleted { file }
            | ProcessingOutcome::ProbeError { file, .. }
            | ProcessingOutcome::UnexpectedError { file, .. } => file,
        }
    }

    /// Human-readable status line for the reporting sink
    pub fn status_line(&self) -> String {
        match self {
            ProcessingOutcome::Retained { file } => format!("Retained: {}", file.file_name()),
            ProcessingOutcome::Deleted { file } => format!("Deleted: {}", file.file_name()),
            ProcessingOutcome::ProbeError { file, message } => {
                format!("Error processing {}: {}", file, message)
            }
            ProcessingOutcome::UnexpectedError { file, message } => {
                format!("Unexpected error processing {}: {}", file, message)
            }
        }
    }
}

impl fmt::Display for ProcessingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status_line())
    }
}

/// Tally of one batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub retained: usize,
    pub deleted: usize,
    pub probe_errors: usize,
    pub unexpected_errors: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl BatchSummary {
    /// Empty summary stamped with the batch start time
    pub fn started(started_at: DateTime<Utc>) -> Self {
        Self {
            total: 0,
            retained: 0,
            deleted: 0,
            probe_errors: 0,
            unexpected_errors: 0,
            started_at,
            finished_at: started_at,
        }
    }

    /// Count one outcome
    pub fn record(&mut self, outcome: &ProcessingOutcome) {
        self.total += 1;
        match outcome {
            ProcessingOutcome::Retained { .. } => self.retained += 1,
            ProcessingOutcome::Deleted { .. } => self.deleted += 1,
            ProcessingOutcome::ProbeError { .. } => self.probe_errors += 1,
            ProcessingOutcome::UnexpectedError { .. } => self.unexpected_errors += 1,
        }
    }

    /// Stamp the finish time
    pub fn finish(&mut self, finished_at: DateTime<Utc>) {
        self.finished_at = finished_at;
    }

    pub fn errors(&self) -> usize {
        self.probe_errors + self.unexpected_errors
    }

    /// Wall-clock duration of the batch
    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

/// Message delivered from the batch worker to the reporting sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BatchMessage {
    Outcome(ProcessingOutcome),
    Finished(BatchSummary),
}
