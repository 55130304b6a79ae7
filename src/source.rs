// src/source.rs
//
// Replay source for recorded landmark streams. A recording is JSONL:
// one LandmarkFrame per line, as captured from the upstream face-mesh
// estimator. The reader is pull-based, lazy, and non-restartable; the
// consumer just stops reading to cancel.

use crate::types::LandmarkFrame;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;

pub fn find_recording_files(input_dir: &str) -> Result<Vec<PathBuf>> {
    let mut recordings = Vec::new();

    let recording_extensions = ["jsonl", "ndjson"];

    for entry in WalkDir::new(input_dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if let Some(ext) = path.extension() {
            if recording_extensions.contains(&ext.to_str().unwrap_or("")) {
                recordings.push(path.to_path_buf());
            }
        }
    }

    recordings.sort();
    info!("Found {} recording files", recordings.len());
    Ok(recordings)
}

pub struct RecordingReader<R> {
    reader: R,
    line: String,
    current_line: u64,
    frames: u64,
}

impl RecordingReader<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open recording {}", path.display()))?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> RecordingReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            current_line: 0,
            frames: 0,
        }
    }

    /// Next frame, or `None` at end of stream. Blank lines are
    /// tolerated; a malformed line is a source error for the caller to
    /// handle, not something to paper over.
    pub fn read_frame(&mut self) -> Result<Option<LandmarkFrame>> {
        loop {
            self.line.clear();
            let bytes = self
                .reader
                .read_line(&mut self.line)
                .with_context(|| format!("Failed to read line {}", self.current_line + 1))?;
            if bytes == 0 {
                return Ok(None);
            }
            self.current_line += 1;

            let trimmed = self.line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let frame: LandmarkFrame = serde_json::from_str(trimmed)
                .with_context(|| format!("Malformed frame at line {}", self.current_line))?;
            self.frames += 1;
            return Ok(Some(frame));
        }
    }

    pub fn frames_read(&self) -> u64 {
        self.frames
    }
}
