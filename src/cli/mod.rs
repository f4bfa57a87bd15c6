//! CLI module for VidSweep
//!
//! This module handles command-line argument parsing and command execution.

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

/// VidSweep
///
/// Scans a folder for videos and deletes every file whose first video stream
/// is smaller than 1920x1080. Deletion is permanent.
#[derive(Parser, Debug)]
#[command(name = "vidsweep")]
#[command(about = "VidSweep - delete videos below 1080p")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level (trace, debug, info, warn, error); defaults to RUST_LOG, then warn
    #[arg(long, env = "VIDSWEEP_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// File remembering the last processed folder
    #[arg(
        long,
        env = "VIDSWEEP_CONFIG",
        default_value = crate::adapters::json_config::DEFAULT_CONFIG_FILE,
        global = true
    )]
    pub config: String,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Probe every video in a folder and delete those below 1080p
    Sweep(args::SweepArgs),
    /// Report one file's resolution and what a sweep would do with it
    Inspect(args::InspectArgs),
}
