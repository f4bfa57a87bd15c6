//! VidSweep
//!
//! A command-line tool that deletes videos below 1080p.
//!
//! # Usage
//!
//! ```bash
//! vidsweep sweep ~/Videos
//! vidsweep sweep            # reuse the last processed folder
//! vidsweep inspect clip.mp4 --json
//! ```

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::info;

use vidsweep::cli::{commands, Cli, Commands};
use vidsweep::utils::logging::{LogFormat, LogLevel, LoggingConfig};

/// Main entry point for the VidSweep CLI application
#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    let level = cli
        .log_level
        .as_deref()
        .map(LogLevel::parse)
        .transpose()
        .map_err(|e| anyhow!(e))?;
    LoggingConfig {
        level,
        format: if cli.log_json {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        },
    }
    .initialize();

    info!("Starting VidSweep");

    // Execute the requested command
    match cli.command {
        Commands::Sweep(args) => {
            info!("Executing sweep command");
            commands::sweep(args, &cli.config).await?;
        }
        Commands::Inspect(args) => {
            info!("Executing inspect command");
            commands::inspect(args, &cli.config).await?;
        }
    }

    info!("VidSweep completed successfully");
    Ok(())
}
