// Inspect interactor - Reports a single file's resolution without touching it

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::{ResolutionPolicy, Verdict};
use crate::ports::*;

/// Interactor for single-file inspection
pub struct InspectInteractor {
    probe_port: Arc<dyn ProbePort>,
    threshold: Threshold,
}

impl InspectInteractor {
    /// Create new inspect interactor with injected ports
    pub fn new(probe_port: Arc<dyn ProbePort>, threshold: Threshold) -> Self {
        Self {
            probe_port,
            threshold,
        }
    }

    /// Probe `file` and report what a sweep would do with it
    pub async fn inspect(&self, file: VideoFile) -> Result<InspectReport, DomainError> {
        info!("Inspecting {}", file);
        let resolution = self.probe_port.probe_resolution(&file).await?;
        let verdict = ResolutionPolicy::classify(&resolution, &self.threshold);

        Ok(InspectReport {
            file,
            resolution,
            threshold: self.threshold,
            verdict,
        })
    }
}

/// Result of inspecting one file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectReport {
    pub file: VideoFile,
    pub resolution: Resolution,
    pub threshold: Threshold,
    pub verdict: Verdict,
}

impl InspectReport {
    /// Human-readable summary
    pub fn summary(&self) -> String {
        let action = match self.verdict {
            Verdict::Retain => "would be retained",
            Verdict::Delete => "would be deleted",
        };
        format!(
            "{}: {} (minimum {}), {}",
            self.file.file_name(),
            self.resolution,
            self.threshold,
            action
        )
    }
}
