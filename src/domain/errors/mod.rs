// Domain errors - Per-file failures raised while classifying a video

use thiserror::Error;

/// Domain-specific error types
///
/// Every variant is recoverable at file granularity: the sweep interactor
/// converts it into a labeled outcome and moves on to the next file.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// The probe process could not be started (binary missing, no permission)
    #[error("Failed to launch probe: {0}")]
    ProbeLaunchFailure(String),
    /// The probe ran and exited with a non-zero status
    #[error("{stderr}")]
    ProbeNonZeroExit { code: Option<i32>, stderr: String },
    /// The probe succeeded but its output was not `<width>,<height>`
    #[error("Malformed probe output: {0:?}")]
    MalformedProbeOutput(String),
    /// Filesystem operation failed (delete, metadata, traversal)
    #[error("Filesystem error: {0}")]
    FsFail(String),
    /// Invalid arguments provided
    #[error("Bad arguments: {0}")]
    BadArgs(String),
    /// Anything else
    #[error("Internal error: {0}")]
    InternalError(String),
}
