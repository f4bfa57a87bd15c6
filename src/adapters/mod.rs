// Adapters - External system implementations

pub mod fs_local;
pub mod json_config;
pub mod mock;
pub mod probe_ffprobe;

// Re-export adapters
pub use fs_local::FsLocalAdapter;
pub use json_config::JsonConfigAdapter;
pub use mock::{MockProbeAdapter, MockProbeResponse};
pub use probe_ffprobe::FFprobeAdapter;
