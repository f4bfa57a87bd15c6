//! FFprobe adapter for media file probing
//!
//! Shells out to `ffprobe` once per file and reads the first video stream's
//! dimensions from its CSV output.

use std::ffi::OsString;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::ResolutionPolicy;
use crate::ports::*;

/// Default executable name, resolved through `PATH`
#[cfg(windows)]
pub const FFPROBE_EXECUTABLE_NAME: &str = "ffprobe.exe";
#[cfg(not(windows))]
pub const FFPROBE_EXECUTABLE_NAME: &str = "ffprobe";

/// FFprobe-based probe adapter
pub struct FFprobeAdapter {
    binary: OsString,
}

impl FFprobeAdapter {
    /// Create new FFprobe adapter using the given executable
    pub fn new(binary: impl Into<OsString>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Arguments selecting width and height of `v:0` as headerless CSV
    fn probe_args(file: &VideoFile) -> Vec<OsString> {
        let mut args: Vec<OsString> = [
            "-v",
            "error",
            "-select_streams",
            "v:0",
            "-show_entries",
            "stream=width,height",
            "-of",
            "csv=p=0",
        ]
        .iter()
        .map(OsString::from)
        .collect();
        args.push(file.path().as_os_str().to_os_string());
        args
    }
}

#[async_trait]
impl ProbePort for FFprobeAdapter {
    async fn probe_resolution(&self, file: &VideoFile) -> Result<Resolution, DomainError> {
        debug!(binary = ?self.binary, file = %file, "Running probe");

        let output = Command::new(&self.binary)
            .args(Self::probe_args(file))
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                DomainError::ProbeLaunchFailure(format!(
                    "{}: {}",
                    self.binary.to_string_lossy(),
                    e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            debug!(code = ?output.status.code(), stderr = %stderr, "Probe exited with failure");
            return Err(DomainError::ProbeNonZeroExit {
                code: output.status.code(),
                stderr,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        ResolutionPolicy::parse_probe_output(&stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_args_layout() {
        let args = FFprobeAdapter::probe_args(&VideoFile::new("dir/clip.mp4"));
        let args: Vec<String> = args
            .iter()
            .map(|a| a.to_string_lossy().to_string())
            .collect();
        assert_eq!(
            args,
            vec![
                "-v",
                "error",
                "-select_streams",
                "v:0",
                "-show_entries",
                "stream=width,height",
                "-of",
                "csv=p=0",
                "dir/clip.mp4",
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_binary_is_launch_failure() {
        let adapter = FFprobeAdapter::new("vidsweep-no-such-ffprobe-binary");
        let err = adapter
            .probe_resolution(&VideoFile::new("clip.mp4"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ProbeLaunchFailure(_)));
    }
}
