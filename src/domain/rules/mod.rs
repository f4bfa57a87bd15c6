// Domain rules - Probe output parsing and the keep/delete policy

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::errors::*;
use crate::domain::model::*;


/// Extensions treated as video files during discovery (compared lowercase)
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "avi", "webm", "mov"];

/// What a sweep does with a probed file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Retain,
    Delete,
}

/// Business rules for deciding whether a video survives a sweep
pub struct ResolutionPolicy;

impl ResolutionPolicy {
    /// Classify a resolution against a threshold
    pub fn classify(resolution: &Resolution, threshold: &Threshold) -> Verdict {
        if threshold.is_below(resolution) {
            Verdict::Delete
        } else {
            Verdict::Retain
        }
    }

    /// Parse `ffprobe ... -of csv=p=0` output for the first video stream.
    ///
    /// Accepts exactly one non-empty line of the form `<width>,<height>`,
    /// surrounded by optional whitespace. Anything else (extra fields, extra
    /// lines, zero or non-numeric values, empty output) is malformed.
    pub fn parse_probe_output(output: &str) -> Result<Resolution, DomainError> {
        let trimmed = output.trim();
        let malformed = || DomainError::MalformedProbeOutput(trimmed.to_string());

        if trimmed.is_empty() || trimmed.lines().count() != 1 {
            return Err(malformed());
        }

        let fields: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        if fields.len() != 2 {
            return Err(malformed());
        }

        let width = fields[0].parse::<u32>().map_err(|_| malformed())?;
        let height = fields[1].parse::<u32>().map_err(|_| malformed())?;

        Resolution::new(width, height).map_err(|_| malformed())
    }

    /// Whether a path carries one of the recognised video extensions
    pub fn is_video_path(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                VIDEO_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            })
            .unwrap_or(false)
    }
}
