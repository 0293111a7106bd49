//! Frustum-bounded random translation sampling.

use rand::Rng;
use serde::{Deserialize, Serialize};

use facesynth_core::{CameraIntrinsics, Real, Vec3};

/// Depth range for sampled translations, same unit as the face shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthRange {
    /// Closest allowed depth, must be positive.
    pub min_z: Real,
    /// Farthest allowed depth, must be >= `min_z`.
    pub max_z: Real,
}

impl Default for DepthRange {
    fn default() -> Self {
        Self {
            min_z: 0.3,
            max_z: 0.5,
        }
    }
}

/// Draw a translation with depth in `range` whose lateral offset keeps a
/// point at that depth inside the camera frustum.
///
/// The depth is uniform in `[min_z, max_z]`; the lateral components are
/// uniform in `+-tz * tan(half_fov)` per axis, so a point placed at the
/// translation projects within the image bounds `[0, 2px] x [0, 2py]`.
pub fn sample_translation<R: Rng + ?Sized>(
    intrinsics: &CameraIntrinsics,
    range: &DepthRange,
    rng: &mut R,
) -> Vec3 {
    let (half_x, half_y) = intrinsics.half_fov();
    let tz = rng.random_range(range.min_z..=range.max_z);
    let max_x = tz * half_x.tan();
    let max_y = tz * half_y.tan();
    let tx = rng.random_range(-max_x..=max_x);
    let ty = rng.random_range(-max_y..=max_y);
    Vec3::new(tx, ty, tz)
}
