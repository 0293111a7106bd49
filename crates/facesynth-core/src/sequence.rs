//! Immutable output record of a generated sequence.

use serde::{Deserialize, Serialize};

use crate::camera::CameraIntrinsics;
use crate::math::{Mat3, Pt2, Quat, Real, Vec3};
use crate::pose::Pose;
use crate::shape::FaceShape;

/// Per-frame derived data: camera-space landmarks with their noiseless and
/// noisy pixel projections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    /// Landmarks mapped into the camera frame, one per landmark.
    pub camera_points: Vec<Vec3>,
    /// Noiseless pixel projections.
    pub pixels: Vec<Pt2>,
    /// Pixel projections with observation noise applied.
    pub noisy_pixels: Vec<Pt2>,
}

/// Per-frame scalar summaries used as auxiliary training signals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SequenceStats {
    /// Euclidean norm of the mean camera-space landmark, one entry per frame.
    pub depth: Vec<Real>,
    /// `sqrt(bbox_width * bbox_height)` over the noisy pixels, one entry per
    /// frame.
    pub scale: Vec<Real>,
}

/// Bounds on the pose change between consecutive frames.
///
/// Recorded on the output for downstream consumers; the interpolated
/// trajectory is not clamped against them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepLimits {
    /// Maximum rotation change per step, degrees.
    pub max_rotation_deg: Real,
    /// Maximum translation change per step, same unit as the shape.
    pub max_translation: Real,
}

impl Default for StepLimits {
    fn default() -> Self {
        Self {
            max_rotation_deg: 5.0,
            max_translation: 0.05,
        }
    }
}

/// A complete generated sequence.
///
/// Everything is derived once at generation time and never mutated: the
/// static shape and the mean of the model it was drawn from, one pose and
/// one derived [`Frame`] per time step, the camera, the noise parameters,
/// the sampling bounds, and per-frame statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceSequence {
    /// Mean shape of the model the static shape was drawn from.
    pub mean_shape: FaceShape,
    /// Static shape observed through the whole sequence.
    pub shape: FaceShape,
    /// One pose per frame.
    pub poses: Vec<Pose>,
    /// One derived frame per pose.
    pub frames: Vec<Frame>,
    /// Camera intrinsics shared by every frame.
    pub intrinsics: CameraIntrinsics,
    /// Gaussian pixel-noise standard deviations (x, y).
    pub noise_std: (Real, Real),
    /// Configured per-axis rotation bounds in degrees (roll, pitch, yaw).
    pub rotation_bounds_deg: [Real; 3],
    /// Step-delta metadata, not enforced on the trajectory.
    pub step_limits: StepLimits,
    /// Per-frame depth and scale statistics.
    pub stats: SequenceStats,
}

impl FaceSequence {
    /// Number of frames.
    #[inline]
    pub fn num_frames(&self) -> usize {
        self.frames.len()
    }

    /// Per-frame rotations as unit quaternions.
    pub fn quaternions(&self) -> Vec<Quat> {
        self.poses.iter().map(|p| p.rotation).collect()
    }

    /// Per-frame rotation matrices.
    pub fn rotation_matrices(&self) -> Vec<Mat3> {
        self.poses.iter().map(|p| p.rotation_matrix()).collect()
    }

    /// Per-frame translations.
    pub fn translations(&self) -> Vec<Vec3> {
        self.poses.iter().map(|p| p.translation).collect()
    }

    /// Per-frame Euler decompositions in degrees (roll, pitch, yaw).
    pub fn euler_angles_deg(&self) -> Vec<Vec3> {
        self.poses.iter().map(|p| p.euler_deg).collect()
    }
}
