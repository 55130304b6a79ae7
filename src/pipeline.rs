// src/pipeline.rs
//
// Per-frame composition: landmark extraction -> scoring -> presence
// bookkeeping -> gesture detection. Holds no I/O, so the whole gesture
// path can be driven by synthetic frames.

use crate::detector::{GesturePhase, RollGestureDetector};
use crate::error::ConfigError;
use crate::landmarks::face_geometry;
use crate::presence::{PresenceAction, PresenceTracker};
use crate::score::frame_score;
use crate::types::{Config, LandmarkFrame, TriggerEvent};

/// What one frame produced.
pub struct FrameOutcome {
    /// Bilateral roll score, `None` when no face / no usable eye was
    /// seen this frame.
    pub score: Option<f32>,
    pub trigger: Option<TriggerEvent>,
}

/// Single-writer: owned and driven by one frame loop.
pub struct GesturePipeline {
    detector: RollGestureDetector,
    presence: PresenceTracker,
}

impl GesturePipeline {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            detector: RollGestureDetector::new(config.gesture.clone())?,
            presence: PresenceTracker::new(config.source.dropout_grace_frames),
        })
    }

    /// Process one frame of landmark-source output. A frame whose face
    /// has no usable eye counts as a dropout frame.
    pub fn process(&mut self, frame: &LandmarkFrame) -> FrameOutcome {
        let score = frame
            .landmarks
            .as_deref()
            .and_then(|mesh| frame_score(&face_geometry(mesh)));

        let Some(score) = score else {
            if self.presence.observe(false) == PresenceAction::Reset {
                self.detector.reset();
            }
            return FrameOutcome {
                score: None,
                trigger: None,
            };
        };

        self.presence.observe(true);
        let trigger = self.detector.process_frame(score, frame.timestamp);
        FrameOutcome {
            score: Some(score),
            trigger,
        }
    }

    pub fn phase(&self, now: f64) -> GesturePhase {
        self.detector.phase(now)
    }

    pub fn reset(&mut self) {
        self.detector.reset();
        self.presence.reset();
    }
}
