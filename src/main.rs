// src/main.rs

mod action;
mod config;
mod detector;
mod error;
mod landmarks;
mod pipeline;
mod presence;
mod score;
mod source;
mod types;

use action::ActionDispatcher;
use anyhow::Result;
use pipeline::GesturePipeline;
use source::{find_recording_files, RecordingReader};
use std::path::Path;
use tracing::{debug, error, info, warn};
use types::Config;

#[derive(Debug, Default)]
struct RunStats {
    total_frames: u64,
    frames_with_face: u64,
    frames_skipped: u64,
    triggers_fired: u64,
    actions_dispatched: u64,
    action_failures: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load("config.yaml")?;

    tracing_subscriber::fmt()
        .with_env_filter(format!("eyeroll_detection={}", config.logging.level))
        .init();

    info!("Eye-roll scroll detector starting");
    info!("✓ Configuration loaded");
    info!(
        "Gesture thresholds: roll={:.2}, frames_required={}, debounce={:.1}s",
        config.gesture.roll_threshold,
        config.gesture.frames_required,
        config.gesture.debounce_seconds
    );

    let dispatcher = ActionDispatcher::new(config.action.clone())?;

    let recordings = find_recording_files(&config.source.input_dir)?;
    if recordings.is_empty() {
        error!(
            "No landmark recordings found in {}",
            config.source.input_dir
        );
        return Ok(());
    }
    info!("Found {} recording(s) to process", recordings.len());

    for (idx, path) in recordings.iter().enumerate() {
        info!(
            "Processing recording {}/{}: {}",
            idx + 1,
            recordings.len(),
            path.display()
        );

        match process_recording(path, &config, &dispatcher).await {
            Ok(stats) => {
                info!("✓ Recording processed");
                info!("  Total frames: {}", stats.total_frames);
                info!(
                    "  Frames with face: {} ({:.1}%)",
                    stats.frames_with_face,
                    100.0 * stats.frames_with_face as f64 / stats.total_frames.max(1) as f64
                );
                info!("  Frames skipped (no face): {}", stats.frames_skipped);
                info!("  Triggers fired: {}", stats.triggers_fired);
                info!("  Actions dispatched: {}", stats.actions_dispatched);
                if stats.action_failures > 0 {
                    warn!("  Action failures: {}", stats.action_failures);
                }
            }
            Err(e) => {
                error!("✗ Failed to process {}: {:#}", path.display(), e);
            }
        }
    }

    Ok(())
}

async fn process_recording(
    path: &Path,
    config: &Config,
    dispatcher: &ActionDispatcher,
) -> Result<RunStats> {
    let mut reader = RecordingReader::open(path)?;
    let mut pipeline = GesturePipeline::new(config)?;
    let mut stats = RunStats::default();

    while let Some(frame) = reader.read_frame()? {
        stats.total_frames += 1;

        let outcome = pipeline.process(&frame);

        match outcome.score {
            Some(score) => {
                stats.frames_with_face += 1;
                debug!(
                    "t={:.2}s score={:.3} phase={}",
                    frame.timestamp,
                    score,
                    pipeline.phase(frame.timestamp).as_str()
                );
            }
            None => stats.frames_skipped += 1,
        }

        if let Some(event) = outcome.trigger {
            stats.triggers_fired += 1;
            // Collaborator failures are counted, not retried; the
            // detector has already moved on.
            match dispatcher.dispatch(&event).await {
                Ok(()) => stats.actions_dispatched += 1,
                Err(e) => {
                    stats.action_failures += 1;
                    warn!("Action dispatch failed: {:#}", e);
                }
            }
        }
    }

    Ok(stats)
}
