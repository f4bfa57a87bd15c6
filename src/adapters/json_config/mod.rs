// JSON config adapter - Persists the last processed folder

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::errors::*;
use crate::ports::*;

/// Default config file, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "last_config.json";

/// JSON configuration adapter
pub struct JsonConfigAdapter {
    config_file_path: PathBuf,
}

impl JsonConfigAdapter {
    /// Create new JSON config adapter backed by `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            config_file_path: path.into(),
        }
    }

    /// Serialize config with four-space indentation
    fn serialize_config(config: &AppConfig) -> Result<Vec<u8>, DomainError> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        serde::Serialize::serialize(config, &mut serializer)
            .map_err(|e| DomainError::InternalError(format!("Failed to serialize config: {}", e)))?;
        Ok(buffer)
    }
}

impl ConfigPort for JsonConfigAdapter {
    fn load_config(&self) -> AppConfig {
        let content = match std::fs::read_to_string(&self.config_file_path) {
            Ok(content) => content,
            Err(e) => {
                debug!(
                    "No config loaded from {}: {}",
                    self.config_file_path.display(),
                    e
                );
                return AppConfig::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Ignoring malformed config {}: {}",
                    self.config_file_path.display(),
                    e
                );
                AppConfig::default()
            }
        }
    }

    fn save_config(&self, config: &AppConfig) -> Result<(), DomainError> {
        if let Some(parent) = self.config_file_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    DomainError::FsFail(format!("Failed to create config directory: {}", e))
                })?;
            }
        }

        let content = Self::serialize_config(config)?;
        std::fs::write(&self.config_file_path, content)
            .map_err(|e| DomainError::FsFail(format!("Failed to write config file: {}", e)))?;

        debug!("Saved config to {}", self.config_file_path.display());
        Ok(())
    }

    fn config_file_path(&self) -> &Path {
        &self.config_file_path
    }
}
