//! VidSweep Library
//!
//! Probes every video under a folder with `ffprobe` and deletes the ones whose
//! first video stream is below 1920x1080. Files are processed one at a time on
//! a dedicated worker; each produces exactly one [`ProcessingOutcome`].

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use app::{BatchController, BatchHandle, BatchState, SweepInteractor};
pub use domain::errors::DomainError;
pub use domain::model::{
    BatchMessage, BatchSummary, ProcessingOutcome, Resolution, Threshold, VideoFile,
};
pub use error::{VidSweepError, VidSweepResult};
