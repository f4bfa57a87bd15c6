// Mock adapters - Scripted probe for tests

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::ResolutionPolicy;
use crate::ports::*;

/// What the mock probe answers for a given file
#[derive(Debug, Clone)]
pub enum MockProbeResponse {
    /// Successful probe printing `<stdout>`
    Stdout(String),
    /// Probe exits non-zero with `<stderr>`
    Exit { code: i32, stderr: String },
    /// Probe binary cannot be started
    LaunchFailure(String),
}

impl MockProbeResponse {
    pub fn resolution(width: u32, height: u32) -> Self {
        Self::Stdout(format!("{},{}\n", width, height))
    }

    pub fn exit(code: i32, stderr: &str) -> Self {
        Self::Exit {
            code,
            stderr: stderr.to_string(),
        }
    }
}

/// Probe adapter answering from a script keyed by path.
/// Unknown paths behave like a probe that cannot open the file.
#[derive(Default)]
pub struct MockProbeAdapter {
    responses: HashMap<PathBuf, MockProbeResponse>,
    calls: Mutex<Vec<PathBuf>>,
}

impl MockProbeAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the response for one path
    pub fn with_response(mut self, path: impl AsRef<Path>, response: MockProbeResponse) -> Self {
        self.responses.insert(path.as_ref().to_path_buf(), response);
        self
    }

    /// Paths probed so far, in call order
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ProbePort for MockProbeAdapter {
    async fn probe_resolution(&self, file: &VideoFile) -> Result<Resolution, DomainError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(file.path().to_path_buf());
        }

        match self.responses.get(file.path()) {
            Some(MockProbeResponse::Stdout(stdout)) => ResolutionPolicy::parse_probe_output(stdout),
            Some(MockProbeResponse::Exit { code, stderr }) => Err(DomainError::ProbeNonZeroExit {
                code: Some(*code),
                stderr: stderr.clone(),
            }),
            Some(MockProbeResponse::LaunchFailure(message)) => {
                Err(DomainError::ProbeLaunchFailure(message.clone()))
            }
            None => Err(DomainError::ProbeNonZeroExit {
                code: Some(1),
                stderr: format!("{}: No such file or directory", file),
            }),
        }
    }
}
