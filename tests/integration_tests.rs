use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;
use vidsweep::adapters::{FsLocalAdapter, JsonConfigAdapter, MockProbeAdapter, MockProbeResponse};
use vidsweep::app::{AppContainer, DefaultAppContainer};
use vidsweep::*;

/// Test utilities for building sweep fixtures
mod test_utils {
    use super::*;

    /// Create a placeholder video file
    pub fn create_test_video(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, b"fake video data").unwrap();
        path
    }

    /// Container over the real filesystem and a scripted probe
    pub fn container(dir: &Path, probe: MockProbeAdapter) -> DefaultAppContainer {
        DefaultAppContainer::with_ports(
            Arc::new(probe),
            Arc::new(FsLocalAdapter::new()),
            Arc::new(JsonConfigAdapter::new(dir.join("last_config.json"))),
            Threshold::FULL_HD,
        )
    }
}

use test_utils::*;

#[tokio::test]
async fn test_sweep_scenarios_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("videos");
    let clip_4k = create_test_video(&root, "clip_4k.mp4");
    let clip_720p = create_test_video(&root, "clip_720p.mp4");
    let corrupt = create_test_video(&root, "corrupt.mkv");
    let exact = create_test_video(&root, "nested/exactly_1080p.mov");
    let notes = create_test_video(&root, "notes.txt");

    let probe = MockProbeAdapter::new()
        .with_response(&clip_4k, MockProbeResponse::resolution(3840, 2160))
        .with_response(&clip_720p, MockProbeResponse::resolution(1280, 720))
        .with_response(&corrupt, MockProbeResponse::exit(1, "Invalid data found"))
        .with_response(&exact, MockProbeResponse::resolution(1920, 1080));
    let container = container(temp_dir.path(), probe);

    let handle = container.batch_controller().start(&root).await.unwrap();
    assert_eq!(handle.total_files(), 4);
    let (outcomes, summary) = handle.collect().await;
    let summary = summary.unwrap();

    assert_eq!(
        outcomes,
        vec![
            ProcessingOutcome::Retained {
                file: VideoFile::new(&clip_4k)
            },
            ProcessingOutcome::Deleted {
                file: VideoFile::new(&clip_720p)
            },
            ProcessingOutcome::ProbeError {
                file: VideoFile::new(&corrupt),
                message: "Invalid data found".to_string(),
            },
            ProcessingOutcome::Retained {
                file: VideoFile::new(&exact)
            },
        ]
    );
    assert_eq!(summary.total, 4);
    assert_eq!(summary.deleted, 1);

    assert!(clip_4k.exists());
    assert!(!clip_720p.exists());
    assert!(corrupt.exists());
    assert!(exact.exists());
    assert!(notes.exists());
}

#[tokio::test]
async fn test_empty_folder_never_starts_worker() {
    let temp_dir = TempDir::new().unwrap();
    let probe = MockProbeAdapter::new();
    let controller = container(temp_dir.path(), probe).batch_controller();

    let err = controller.start(temp_dir.path()).await.err().unwrap();

    assert!(matches!(err, VidSweepError::NoVideoFiles { .. }));
    assert!(err.to_string().starts_with("No video files found"));
    assert_eq!(controller.state(), BatchState::Idle);
}

#[tokio::test]
async fn test_launch_failure_then_normal_file() {
    let temp_dir = TempDir::new().unwrap();
    let first = create_test_video(temp_dir.path(), "a_first.mp4");
    let second = create_test_video(temp_dir.path(), "b_second.mp4");
    let probe = MockProbeAdapter::new()
        .with_response(
            &first,
            MockProbeResponse::LaunchFailure("ffprobe: No such file or directory".to_string()),
        )
        .with_response(&second, MockProbeResponse::resolution(3840, 2160));
    let controller = container(temp_dir.path(), probe).batch_controller();

    let (outcomes, summary) = controller.start(temp_dir.path()).await.unwrap().collect().await;

    assert_eq!(outcomes.len(), 2);
    assert!(matches!(
        &outcomes[0],
        ProcessingOutcome::UnexpectedError { file, .. } if file.path() == first.as_path()
    ));
    assert_eq!(
        outcomes[1],
        ProcessingOutcome::Retained {
            file: VideoFile::new(&second)
        }
    );
    assert_eq!(summary.unwrap().unexpected_errors, 1);
    assert!(first.exists());
}

#[tokio::test]
async fn test_overlapping_batches_do_not_interleave() {
    let temp_dir = TempDir::new().unwrap();
    let mut probe = MockProbeAdapter::new();
    let mut paths = Vec::new();
    for i in 0..20 {
        let path = create_test_video(temp_dir.path(), &format!("clip_{:02}.mp4", i));
        probe = probe.with_response(&path, MockProbeResponse::resolution(3840, 2160));
        paths.push(path);
    }
    let controller = container(temp_dir.path(), probe).batch_controller();

    let handle = controller.start(temp_dir.path()).await.unwrap();
    for _ in 0..3 {
        assert!(matches!(
            controller.start(temp_dir.path()).await.err().unwrap(),
            VidSweepError::AlreadyProcessing
        ));
    }

    let (outcomes, summary) = handle.collect().await;
    let order: Vec<PathBuf> = outcomes.iter().map(|o| o.file().path().to_path_buf()).collect();
    assert_eq!(order, paths);
    assert_eq!(summary.unwrap().retained, 20);
    assert_eq!(controller.state(), BatchState::Idle);
}

#[tokio::test]
async fn test_inspect_does_not_delete() {
    let temp_dir = TempDir::new().unwrap();
    let clip = create_test_video(temp_dir.path(), "clip_720p.mp4");
    let probe = MockProbeAdapter::new().with_response(&clip, MockProbeResponse::resolution(1280, 720));
    let container = container(temp_dir.path(), probe);

    let report = container
        .inspect_interactor()
        .inspect(VideoFile::new(&clip))
        .await
        .unwrap();

    assert_eq!(report.resolution, Resolution::new(1280, 720).unwrap());
    assert!(clip.exists());
}
