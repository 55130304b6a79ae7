// src/error.rs

use thiserror::Error;

/// Rejected configuration, surfaced before a detector instance exists.
/// Values are never silently clamped.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("gesture.roll_threshold must be a finite value in (0, 1], got {0}")]
    InvalidRollThreshold(f32),

    #[error("gesture.frames_required must be at least 1")]
    InvalidFramesRequired,

    #[error("gesture.debounce_seconds must be finite and non-negative, got {0}")]
    InvalidDebounce(f64),

    #[error("action.api_url must be set when action.send_to_api is enabled")]
    MissingApiUrl,
}
