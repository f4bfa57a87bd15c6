//! Command implementations

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::app::{AppContainer, ContainerSettings, DefaultAppContainer};
use crate::cli::args::{InspectArgs, SweepArgs};
use crate::domain::model::{BatchMessage, BatchSummary, Threshold, VideoFile};
use crate::error::VidSweepError;
use crate::ports::AppConfig;
use crate::utils::Utils;

fn container(ffprobe: &str, config_file: &str) -> DefaultAppContainer {
    DefaultAppContainer::new(ContainerSettings {
        ffprobe_binary: ffprobe.into(),
        config_file: config_file.into(),
        threshold: Threshold::FULL_HD,
    })
}

/// Execute the sweep command
pub async fn sweep(args: SweepArgs, config_file: &str) -> Result<()> {
    let container = container(&args.ffprobe, config_file);
    let config_port = container.config_port();

    // Folder precedence: argument > saved config
    let folder = match args.folder.as_deref().map(str::trim) {
        Some(folder) if !folder.is_empty() => folder.to_string(),
        _ => config_port
            .load_config()
            .output_folder
            .filter(|folder| !folder.trim().is_empty())
            .ok_or_else(|| VidSweepError::MissingInputFolder {
                config_path: config_port.config_file_path().display().to_string(),
            })?,
    };
    info!("Input folder: {}", folder);

    let controller = container.batch_controller();
    let mut handle = controller.start(Path::new(&folder)).await?;
    info!("Queued {} files", handle.total_files());

    if !args.json {
        println!("Starting video processing...");
    }

    let mut summary: Option<BatchSummary> = None;
    while let Some(message) = handle.recv().await {
        if args.json {
            let line = serde_json::to_string(&message).context("Failed to serialize report")?;
            println!("{}", line);
        }
        match message {
            BatchMessage::Outcome(outcome) => {
                if !args.json {
                    println!("{}", outcome.status_line());
                }
            }
            BatchMessage::Finished(finished) => {
                summary = Some(finished);
                break;
            }
        }
    }

    let summary = summary.context("Batch worker stopped before reporting completion")?;
    if !args.json {
        println!("Processing completed.");
        println!("{}", summary_line(&summary));
    }

    let config = AppConfig {
        output_folder: Some(folder),
    };
    if let Err(e) = config_port.save_config(&config) {
        warn!("Could not save last folder: {}", e);
    }

    Ok(())
}

/// Execute the inspect command
pub async fn inspect(args: InspectArgs, config_file: &str) -> Result<()> {
    let container = container(&args.ffprobe, config_file);
    let report = container
        .inspect_interactor()
        .inspect(VideoFile::new(&args.input))
        .await
        .with_context(|| format!("Failed to inspect {}", args.input))?;

    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .context("Failed to serialize inspect report to JSON")?;
        println!("{}", json);
    } else {
        println!("{}", report.summary());
    }

    Ok(())
}

fn summary_line(summary: &BatchSummary) -> String {
    let elapsed = summary.elapsed().to_std().unwrap_or_default();
    format!(
        "{} files: {} retained, {} deleted, {} errors in {}",
        summary.total,
        summary.retained,
        summary.deleted,
        summary.errors(),
        Utils::format_duration(elapsed)
    )
}
