// src/detector.rs
//
// Gesture state machine. Turns the continuous per-frame roll score
// into discrete trigger events: threshold, consecutive-frame
// confirmation, then a wall-clock debounce between accepted triggers.

use crate::error::ConfigError;
use crate::types::{GestureConfig, TriggerEvent};
use tracing::{debug, info};

/// Observable phase of the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// No qualifying streak in progress.
    Idle,
    /// Partway through a qualifying streak.
    Accumulating,
    /// A trigger fired recently; firing is withheld until the debounce
    /// interval elapses. Scoring and counting continue underneath.
    Cooling,
}

impl GesturePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Accumulating => "ACCUMULATING",
            Self::Cooling => "COOLING",
        }
    }
}

/// Single-writer: one instance belongs to one frame loop. Concurrent
/// `process_frame` calls need external mutual exclusion.
pub struct RollGestureDetector {
    config: GestureConfig,
    consecutive: u32,
    last_trigger: Option<f64>,
}

impl RollGestureDetector {
    /// Rejects malformed configuration up front; an instance that
    /// exists is always safe to drive.
    pub fn new(config: GestureConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            consecutive: 0,
            last_trigger: None,
        })
    }

    /// Feed one frame's score. Timestamps must be non-decreasing across
    /// calls; out-of-order input is a caller bug and the behavior is
    /// unspecified. Never fails for any finite score.
    ///
    /// A disqualifying frame resets the streak in every phase, cooldown
    /// included. A streak that completes during cooldown is suppressed
    /// but kept, so the gesture fires on the first qualifying frame
    /// after the cooldown expires.
    pub fn process_frame(&mut self, score: f32, timestamp: f64) -> Option<TriggerEvent> {
        if score < self.config.roll_threshold {
            if self.consecutive > 0 {
                debug!(
                    "streak of {} broken by score {:.3} at {:.2}s",
                    self.consecutive, score, timestamp
                );
            }
            self.consecutive = 0;
            return None;
        }

        self.consecutive = self.consecutive.saturating_add(1);
        if self.consecutive < self.config.frames_required {
            return None;
        }

        if let Some(last) = self.last_trigger {
            let since = timestamp - last;
            if since < self.config.debounce_seconds {
                debug!(
                    "trigger suppressed at {:.2}s: {:.2}s since last, debounce {:.2}s",
                    timestamp, since, self.config.debounce_seconds
                );
                return None;
            }
        }

        let event = TriggerEvent {
            timestamp,
            score,
            consecutive_frames: self.consecutive,
        };
        info!(
            "roll-up trigger at {:.2}s (score {:.2}, {} consecutive frames)",
            timestamp, score, self.consecutive
        );
        self.last_trigger = Some(timestamp);
        self.consecutive = 0;
        Some(event)
    }

    /// Current phase at `now`, for logs and overlays. Cooling reports
    /// until the debounce interval has elapsed.
    pub fn phase(&self, now: f64) -> GesturePhase {
        if let Some(last) = self.last_trigger {
            if now - last < self.config.debounce_seconds {
                return GesturePhase::Cooling;
            }
        }
        if self.consecutive > 0 {
            GesturePhase::Accumulating
        } else {
            GesturePhase::Idle
        }
    }

    /// Drop all accumulated state, as after a source interruption.
    /// Behaviorally identical to a freshly constructed detector.
    pub fn reset(&mut self) {
        self.consecutive = 0;
        self.last_trigger = None;
    }
}
