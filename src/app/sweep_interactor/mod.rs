// Sweep interactor - Classifies each video and deletes those below threshold

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::{ResolutionPolicy, Verdict};
use crate::ports::*;

/// Interactor for the resolution sweep use case
pub struct SweepInteractor {
    probe_port: Arc<dyn ProbePort>,
    fs_port: Arc<dyn FsPort>,
    threshold: Threshold,
}

impl SweepInteractor {
    /// Create new sweep interactor with injected ports
    pub fn new(
        probe_port: Arc<dyn ProbePort>,
        fs_port: Arc<dyn FsPort>,
        threshold: Threshold,
    ) -> Self {
        Self {
            probe_port,
            fs_port,
            threshold,
        }
    }

    /// Process one file. Never fails: every error becomes an outcome.
    pub async fn process_file(&self, file: VideoFile) -> ProcessingOutcome {
        match self.classify_and_apply(&file).await {
            Ok(Verdict::Retain) => ProcessingOutcome::Retained { file },
            Ok(Verdict::Delete) => ProcessingOutcome::Deleted { file },
            Err(DomainError::ProbeNonZeroExit { stderr, .. }) => {
                warn!("Probe failed for {}: {}", file, stderr);
                ProcessingOutcome::ProbeError {
                    file,
                    message: stderr,
                }
            }
            Err(e) => {
                warn!("Unexpected error for {}: {}", file, e);
                ProcessingOutcome::UnexpectedError {
                    file,
                    message: e.to_string(),
                }
            }
        }
    }

    /// Probe, decide, and delete when the verdict says so
    async fn classify_and_apply(&self, file: &VideoFile) -> Result<Verdict, DomainError> {
        let resolution = self.probe_port.probe_resolution(file).await?;
        let verdict = ResolutionPolicy::classify(&resolution, &self.threshold);
        debug!("{} is {} -> {:?}", file, resolution, verdict);

        if verdict == Verdict::Delete {
            self.fs_port.delete_file(file.path()).await?;
        }
        Ok(verdict)
    }

    /// Process `files` in order, sending each outcome as soon as it exists.
    ///
    /// Sending never blocks. A closed receiver does not stop the batch; the
    /// remaining files are still processed.
    pub async fn run(
        &self,
        files: Vec<VideoFile>,
        sink: &UnboundedSender<BatchMessage>,
    ) -> BatchSummary {
        info!(
            "Sweeping {} files below {} threshold",
            files.len(),
            self.threshold
        );
        let mut summary = BatchSummary::started(Utc::now());

        for file in files {
            let outcome = self.process_file(file).await;
            summary.record(&outcome);
            if sink.send(BatchMessage::Outcome(outcome)).is_err() {
                debug!("Report receiver closed; continuing batch");
            }
        }

        summary.finish(Utc::now());
        info!(
            "Sweep finished: {} retained, {} deleted, {} errors",
            summary.retained,
            summary.deleted,
            summary.errors()
        );
        summary
    }

    /// Process `files` in order and collect the outcomes
    pub async fn sweep(&self, files: Vec<VideoFile>) -> Vec<ProcessingOutcome> {
        let mut outcomes = Vec::with_capacity(files.len());
        for file in files {
            outcomes.push(self.process_file(file).await);
        }
        outcomes
    }
}
