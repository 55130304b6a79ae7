// src/landmarks.rs
//
// MediaPipe Face Mesh geometry. The estimator itself runs upstream;
// this module only knows how to carve per-eye geometry out of the
// landmark array it produces.

use crate::types::{EyeGeometry, Landmark};

/// Face Mesh indices for the points scoring needs. The iris indices
/// (468+) only exist when the estimator runs with refined landmarks;
/// a plain 468-point mesh yields no usable eyes.
pub mod mediapipe {
    pub const LEFT_EYE_TOP: usize = 159;
    pub const LEFT_EYE_BOTTOM: usize = 145;
    pub const LEFT_IRIS_CENTER: usize = 468;

    pub const RIGHT_EYE_TOP: usize = 386;
    pub const RIGHT_EYE_BOTTOM: usize = 374;
    pub const RIGHT_IRIS_CENTER: usize = 473;

    /// Landmark count of a refined (iris-bearing) mesh.
    pub const REFINED_LANDMARK_COUNT: usize = 478;
}

/// Both eyes as extracted from one frame. Either side can be absent
/// when the mesh is truncated or the iris points are missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaceGeometry {
    pub left: Option<EyeGeometry>,
    pub right: Option<EyeGeometry>,
}

/// Pick one eye's geometry out of the mesh. Out-of-range indices mean
/// the eye is absent for this frame, not an error.
pub fn eye_geometry(
    landmarks: &[Landmark],
    lid_top: usize,
    lid_bottom: usize,
    iris_center: usize,
) -> Option<EyeGeometry> {
    Some(EyeGeometry {
        lid_top: *landmarks.get(lid_top)?,
        lid_bottom: *landmarks.get(lid_bottom)?,
        iris_center: *landmarks.get(iris_center)?,
    })
}

pub fn face_geometry(landmarks: &[Landmark]) -> FaceGeometry {
    FaceGeometry {
        left: eye_geometry(
            landmarks,
            mediapipe::LEFT_EYE_TOP,
            mediapipe::LEFT_EYE_BOTTOM,
            mediapipe::LEFT_IRIS_CENTER,
        ),
        right: eye_geometry(
            landmarks,
            mediapipe::RIGHT_EYE_TOP,
            mediapipe::RIGHT_EYE_BOTTOM,
            mediapipe::RIGHT_IRIS_CENTER,
        ),
    }
}
