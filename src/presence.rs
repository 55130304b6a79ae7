// src/presence.rs
//
// No-face dropout handling. A single missed frame must not clear a
// gesture in progress, but once a gap outlives the grace period the
// accumulated streak is stale and the detector has to start over.

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceAction {
    /// Face visible: score the frame and feed the detector.
    Process,
    /// Short dropout: skip the frame, keep detector state.
    Skip,
    /// Dropout exceeded the grace period: reset the detector. Emitted
    /// once per gap, then the gap keeps reporting `Skip`.
    Reset,
}

pub struct PresenceTracker {
    grace_frames: u32,
    missing_streak: u32,
    reset_emitted: bool,
}

impl PresenceTracker {
    pub fn new(grace_frames: u32) -> Self {
        Self {
            grace_frames,
            missing_streak: 0,
            reset_emitted: false,
        }
    }

    pub fn observe(&mut self, face_present: bool) -> PresenceAction {
        if face_present {
            if self.missing_streak > 0 {
                debug!("face re-acquired after {} frame(s)", self.missing_streak);
            }
            self.missing_streak = 0;
            self.reset_emitted = false;
            return PresenceAction::Process;
        }

        self.missing_streak = self.missing_streak.saturating_add(1);
        if self.missing_streak > self.grace_frames && !self.reset_emitted {
            self.reset_emitted = true;
            debug!(
                "face lost for {} frames (grace {}), resetting detector",
                self.missing_streak, self.grace_frames
            );
            return PresenceAction::Reset;
        }
        PresenceAction::Skip
    }

    pub fn reset(&mut self) {
        self.missing_streak = 0;
        self.reset_emitted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_dropout_only_skips() {
        let mut tracker = PresenceTracker::new(3);

        assert_eq!(tracker.observe(true), PresenceAction::Process);
        for _ in 0..3 {
            assert_eq!(tracker.observe(false), PresenceAction::Skip);
        }
        assert_eq!(tracker.observe(true), PresenceAction::Process);
    }

    #[test]
    fn test_long_dropout_resets_once() {
        let mut tracker = PresenceTracker::new(2);

        tracker.observe(true);
        assert_eq!(tracker.observe(false), PresenceAction::Skip);
        assert_eq!(tracker.observe(false), PresenceAction::Skip);
        assert_eq!(tracker.observe(false), PresenceAction::Reset);
        // Still gone, but the reset already happened.
        assert_eq!(tracker.observe(false), PresenceAction::Skip);
        assert_eq!(tracker.observe(false), PresenceAction::Skip);
    }

    #[test]
    fn test_new_gap_can_reset_again() {
        let mut tracker = PresenceTracker::new(1);

        tracker.observe(false);
        assert_eq!(tracker.observe(false), PresenceAction::Reset);

        tracker.observe(true);

        tracker.observe(false);
        assert_eq!(tracker.observe(false), PresenceAction::Reset);
    }

    #[test]
    fn test_zero_grace_resets_immediately() {
        let mut tracker = PresenceTracker::new(0);
        assert_eq!(tracker.observe(false), PresenceAction::Reset);
    }
}
