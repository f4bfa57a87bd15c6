// Batch controller - Idle/Running state machine around the sweep worker

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{debug, info};

use crate::app::sweep_interactor::SweepInteractor;
use crate::domain::model::*;
use crate::error::{VidSweepError, VidSweepResult};
use crate::ports::*;

/// Whether a batch is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchState {
    Idle,
    Running,
}

/// Holds the Running state; returns to Idle when dropped, including on
/// pre-flight failure and on worker panic.
struct RunningGuard {
    state: Arc<Mutex<BatchState>>,
}

impl RunningGuard {
    /// Idle -> Running, or `AlreadyProcessing` if a batch is in flight
    fn acquire(state: &Arc<Mutex<BatchState>>) -> VidSweepResult<Self> {
        let mut current = lock_state(state);
        if *current == BatchState::Running {
            return Err(VidSweepError::AlreadyProcessing);
        }
        *current = BatchState::Running;
        Ok(Self {
            state: Arc::clone(state),
        })
    }
}

impl Drop for RunningGuard {
    fn drop(&mut self) {
        *lock_state(&self.state) = BatchState::Idle;
        debug!("Batch state -> Idle");
    }
}

fn lock_state(state: &Mutex<BatchState>) -> MutexGuard<'_, BatchState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Receiving side of a running batch
pub struct BatchHandle {
    folder: PathBuf,
    total_files: usize,
    receiver: UnboundedReceiver<BatchMessage>,
}

impl BatchHandle {
    /// Folder being swept
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Number of files queued for this batch
    pub fn total_files(&self) -> usize {
        self.total_files
    }

    /// Next message; `None` once the worker is gone
    pub async fn recv(&mut self) -> Option<BatchMessage> {
        self.receiver.recv().await
    }

    /// Drain every message until the terminal summary.
    /// Returns `None` if the worker died before finishing.
    pub async fn collect(mut self) -> (Vec<ProcessingOutcome>, Option<BatchSummary>) {
        let mut outcomes = Vec::with_capacity(self.total_files);
        while let Some(message) = self.recv().await {
            match message {
                BatchMessage::Outcome(outcome) => outcomes.push(outcome),
                BatchMessage::Finished(summary) => return (outcomes, Some(summary)),
            }
        }
        (outcomes, None)
    }
}

/// Starts batches and rejects overlapping ones
pub struct BatchController {
    sweep: Arc<SweepInteractor>,
    fs_port: Arc<dyn FsPort>,
    state: Arc<Mutex<BatchState>>,
}

impl BatchController {
    /// Create new batch controller
    pub fn new(sweep: Arc<SweepInteractor>, fs_port: Arc<dyn FsPort>) -> Self {
        Self {
            sweep,
            fs_port,
            state: Arc::new(Mutex::new(BatchState::Idle)),
        }
    }

    /// Current state
    pub fn state(&self) -> BatchState {
        *lock_state(&self.state)
    }

    /// Run pre-flight checks and start a batch over `folder`.
    ///
    /// Fails with `AlreadyProcessing`, `InvalidInputFolder` or `NoVideoFiles`
    /// without spawning anything. On success the worker is already running.
    pub async fn start(&self, folder: &Path) -> VidSweepResult<BatchHandle> {
        let guard = RunningGuard::acquire(&self.state)?;

        if !self.fs_port.directory_exists(folder).await? {
            return Err(VidSweepError::InvalidInputFolder {
                path: folder.display().to_string(),
            });
        }

        let files: Vec<VideoFile> = self
            .fs_port
            .list_video_files(folder)
            .await?
            .into_iter()
            .map(VideoFile::new)
            .collect();
        if files.is_empty() {
            return Err(VidSweepError::NoVideoFiles {
                path: folder.display().to_string(),
            });
        }

        info!("Starting batch of {} files in {}", files.len(), folder.display());
        let total_files = files.len();
        let (sender, receiver) = mpsc::unbounded_channel();
        let sweep = Arc::clone(&self.sweep);

        tokio::spawn(async move {
            let summary = sweep.run(files, &sender).await;
            // Back to Idle before the consumer can observe completion
            drop(guard);
            let _ = sender.send(BatchMessage::Finished(summary));
        });

        Ok(BatchHandle {
            folder: folder.to_path_buf(),
            total_files,
            receiver,
        })
    }
}
