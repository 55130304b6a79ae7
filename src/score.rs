// src/score.rs
//
// Roll-score estimation. Pure per-frame geometry -> scalar; all
// temporal logic lives in detector.rs. Safe to call concurrently over
// independent frames.

use crate::landmarks::FaceGeometry;
use crate::types::EyeGeometry;

/// Lid spans at or below this are treated as a closed or mis-tracked
/// eye; the frame scores neutral instead of dividing.
pub const LID_SPAN_EPSILON: f32 = 1e-4;

/// Score reported for degenerate eyelid geometry.
pub const NEUTRAL_SCORE: f32 = 0.0;

/// How far the iris has ridden toward the top eyelid, normalized by
/// the eyelid opening. 1.0 = iris at the top lid, 0.0 = centered or
/// below. Always finite, always in [0, 1].
pub fn eye_roll_score(eye: &EyeGeometry) -> f32 {
    let lid_span = (eye.lid_bottom.y - eye.lid_top.y).abs();
    if lid_span <= LID_SPAN_EPSILON {
        return NEUTRAL_SCORE;
    }

    let iris_offset = eye.iris_center.y - eye.lid_top.y;
    1.0 - (iris_offset / lid_span).clamp(0.0, 1.0)
}

/// Bilateral combination: mean of both eyes, a single eye standing
/// alone when the other is absent, `None` when neither eye is usable.
pub fn frame_score(face: &FaceGeometry) -> Option<f32> {
    match (&face.left, &face.right) {
        (Some(left), Some(right)) => Some((eye_roll_score(left) + eye_roll_score(right)) / 2.0),
        (Some(left), None) => Some(eye_roll_score(left)),
        (None, Some(right)) => Some(eye_roll_score(right)),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Landmark;

    fn point(y: f32) -> Landmark {
        Landmark { x: 0.5, y, z: 0.0 }
    }

    fn eye(top_y: f32, bottom_y: f32, iris_y: f32) -> EyeGeometry {
        EyeGeometry {
            lid_top: point(top_y),
            lid_bottom: point(bottom_y),
            iris_center: point(iris_y),
        }
    }

    #[test]
    fn test_iris_at_top_lid_scores_one() {
        assert_eq!(eye_roll_score(&eye(0.2, 0.8, 0.2)), 1.0);
    }

    #[test]
    fn test_iris_above_top_lid_saturates() {
        // Iris tracked above the lid line still reads as fully rolled.
        assert_eq!(eye_roll_score(&eye(0.2, 0.8, 0.1)), 1.0);
    }

    #[test]
    fn test_iris_centered_scores_half() {
        let score = eye_roll_score(&eye(0.2, 0.8, 0.5));
        assert!((score - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_iris_at_bottom_scores_zero() {
        assert_eq!(eye_roll_score(&eye(0.2, 0.8, 0.8)), 0.0);
        assert_eq!(eye_roll_score(&eye(0.2, 0.8, 0.95)), 0.0);
    }

    #[test]
    fn test_score_always_in_unit_range() {
        for iris_y in [-1.0, 0.0, 0.2, 0.37, 0.5, 0.8, 1.0, 2.0] {
            let score = eye_roll_score(&eye(0.2, 0.8, iris_y));
            assert!(score.is_finite());
            assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
        }
    }

    #[test]
    fn test_degenerate_lid_span_is_neutral() {
        // Closed or mis-tracked eye: never NaN/inf, always the neutral
        // value, whatever the iris says.
        for iris_y in [0.0, 0.3, 0.5, 1.0] {
            assert_eq!(eye_roll_score(&eye(0.5, 0.5, iris_y)), NEUTRAL_SCORE);
            assert_eq!(
                eye_roll_score(&eye(0.5, 0.5 + LID_SPAN_EPSILON / 2.0, iris_y)),
                NEUTRAL_SCORE
            );
        }
    }

    #[test]
    fn test_inverted_lid_order_still_defined() {
        // Top/bottom swapped by a confused estimator: the span is taken
        // as a magnitude, so the score stays finite and bounded.
        let score = eye_roll_score(&eye(0.8, 0.2, 0.5));
        assert!(score.is_finite());
        assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn test_bilateral_mean() {
        let face = FaceGeometry {
            left: Some(eye(0.2, 0.8, 0.2)),  // 1.0
            right: Some(eye(0.2, 0.8, 0.5)), // 0.5
        };
        let score = frame_score(&face).unwrap();
        assert!((score - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_single_eye_stands_alone() {
        let face = FaceGeometry {
            left: None,
            right: Some(eye(0.2, 0.8, 0.2)),
        };
        assert_eq!(frame_score(&face), Some(1.0));

        let face = FaceGeometry {
            left: Some(eye(0.2, 0.8, 0.8)),
            right: None,
        };
        assert_eq!(frame_score(&face), Some(0.0));
    }

    #[test]
    fn test_no_eyes_no_score() {
        assert_eq!(frame_score(&FaceGeometry::default()), None);
    }
}
