// src/types.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gesture: GestureConfig,
    pub source: SourceConfig,
    pub action: ActionConfig,
    pub logging: LoggingConfig,
}

/// Tunables for the roll-gesture detector. Immutable once validated;
/// there is no runtime reconfiguration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    pub roll_threshold: f32,
    pub frames_required: u32,
    pub debounce_seconds: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub input_dir: String,
    /// Consecutive no-face frames tolerated before the detector is
    /// reset. Single-frame dropouts never clear a gesture in progress.
    pub dropout_grace_frames: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionConfig {
    pub scroll_amount: i32,
    pub send_to_api: bool,
    pub api_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gesture: GestureConfig::default(),
            source: SourceConfig::default(),
            action: ActionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            roll_threshold: 0.65,
            frames_required: 3,
            debounce_seconds: 1.0,
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            input_dir: "recordings".to_string(),
            dropout_grace_frames: 5,
        }
    }
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self {
            scroll_amount: 500,
            send_to_api: false,
            api_url: "http://localhost:3000/api/scroll".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// A single face-mesh point in normalized image coordinates. The
/// estimator emits `z` as well; scoring only reads `y`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

/// The three points scoring needs for one eye, carved out of the full
/// face mesh for the current frame. Not persisted across frames.
#[derive(Debug, Clone, Copy)]
pub struct EyeGeometry {
    pub lid_top: Landmark,
    pub lid_bottom: Landmark,
    pub iris_center: Landmark,
}

/// One frame of landmark-source output. `landmarks: None` means the
/// estimator saw no face this frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandmarkFrame {
    pub timestamp: f64,
    pub landmarks: Option<Vec<Landmark>>,
}

/// A confirmed, debounced upward-roll gesture.
#[derive(Debug, Clone, Serialize)]
pub struct TriggerEvent {
    pub timestamp: f64,
    pub score: f32,
    pub consecutive_frames: u32,
}
