//! Command-line argument definitions

use clap::Args;

/// Arguments for the sweep command
#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Folder to scan recursively (default: the last processed folder)
    pub folder: Option<String>,

    /// ffprobe executable
    #[arg(long, env = "VIDSWEEP_FFPROBE", default_value = crate::adapters::probe_ffprobe::FFPROBE_EXECUTABLE_NAME)]
    pub ffprobe: String,

    /// Print each report message as a JSON object per line
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input video file path
    pub input: String,

    /// ffprobe executable
    #[arg(long, env = "VIDSWEEP_FFPROBE", default_value = crate::adapters::probe_ffprobe::FFPROBE_EXECUTABLE_NAME)]
    pub ffprobe: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
