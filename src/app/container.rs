use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::Arc;

use crate::adapters::{FFprobeAdapter, FsLocalAdapter, JsonConfigAdapter};
use crate::app::{
    batch::BatchController, inspect_interactor::InspectInteractor,
    sweep_interactor::SweepInteractor,
};
use crate::domain::model::Threshold;
use crate::ports::{ConfigPort, FsPort, ProbePort};

pub trait AppContainer: Send + Sync {
    fn batch_controller(&self) -> Arc<BatchController>;
    fn inspect_interactor(&self) -> Arc<InspectInteractor>;
    fn config_port(&self) -> Arc<dyn ConfigPort>;
}

/// Settings needed to wire the production adapters
#[derive(Debug, Clone)]
pub struct ContainerSettings {
    pub ffprobe_binary: OsString,
    pub config_file: PathBuf,
    pub threshold: Threshold,
}

pub struct DefaultAppContainer {
    batch_controller: Arc<BatchController>,
    inspect_interactor: Arc<InspectInteractor>,
    config_port: Arc<dyn ConfigPort>,
}

impl DefaultAppContainer {
    pub fn new(settings: ContainerSettings) -> Self {
        let probe_port = Arc::new(FFprobeAdapter::new(settings.ffprobe_binary));
        let fs_port = Arc::new(FsLocalAdapter::new());
        let config_port = Arc::new(JsonConfigAdapter::new(settings.config_file));

        Self::with_ports(probe_port, fs_port, config_port, settings.threshold)
    }

    /// Wire interactors over arbitrary port implementations
    pub fn with_ports(
        probe_port: Arc<dyn ProbePort>,
        fs_port: Arc<dyn FsPort>,
        config_port: Arc<dyn ConfigPort>,
        threshold: Threshold,
    ) -> Self {
        let sweep_interactor = Arc::new(SweepInteractor::new(
            Arc::clone(&probe_port),
            Arc::clone(&fs_port),
            threshold,
        ));

        let batch_controller = Arc::new(BatchController::new(
            sweep_interactor,
            Arc::clone(&fs_port),
        ));

        let inspect_interactor = Arc::new(InspectInteractor::new(
            Arc::clone(&probe_port),
            threshold,
        ));

        Self {
            batch_controller,
            inspect_interactor,
            config_port,
        }
    }
}

impl AppContainer for DefaultAppContainer {
    fn batch_controller(&self) -> Arc<BatchController> {
        Arc::clone(&self.batch_controller)
    }

    fn inspect_interactor(&self) -> Arc<InspectInteractor> {
        Arc::clone(&self.inspect_interactor)
    }

    fn config_port(&self) -> Arc<dyn ConfigPort> {
        Arc::clone(&self.config_port)
    }
}
