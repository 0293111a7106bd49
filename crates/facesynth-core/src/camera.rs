//! Pinhole camera intrinsics with a single focal length and centered
//! principal point.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use crate::math::{Mat3, Pt2, Real, Vec3};

/// Pinhole intrinsics `K = [[f, 0, px], [0, f, py], [0, 0, 1]]`.
///
/// The principal point sits at the image center, so the image extent is
/// `2*px` by `2*py` pixels. Fixed for the whole sequence.
///
/// # Example
/// ```
/// use facesynth_core::CameraIntrinsics;
///
/// let intr = CameraIntrinsics::new(1000.0, 320.0, 240.0).unwrap();
/// assert_eq!(intr.image_width(), 640.0);
/// assert_eq!(intr.image_height(), 480.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraIntrinsics {
    /// Focal length in pixels, shared by both axes.
    pub f: Real,
    /// Principal point x coordinate in pixels.
    pub px: Real,
    /// Principal point y coordinate in pixels.
    pub py: Real,
}

impl CameraIntrinsics {
    /// Create intrinsics, checking positivity of the focal length and the
    /// principal point.
    ///
    /// # Errors
    /// Fails when `f <= 0` or either principal-point coordinate is
    /// non-positive.
    pub fn new(f: Real, px: Real, py: Real) -> Result<Self> {
        ensure!(f > 0.0, "focal length must be positive, got {f}");
        ensure!(
            px > 0.0 && py > 0.0,
            "principal point must be positive, got ({px}, {py})"
        );
        Ok(Self { f, px, py })
    }

    /// Image width in pixels.
    #[inline]
    pub fn image_width(&self) -> Real {
        2.0 * self.px
    }

    /// Image height in pixels.
    #[inline]
    pub fn image_height(&self) -> Real {
        2.0 * self.py
    }

    /// The 3x3 intrinsic matrix `K`.
    pub fn k_matrix(&self) -> Mat3 {
        Mat3::new(self.f, 0.0, self.px, 0.0, self.f, self.py, 0.0, 0.0, 1.0)
    }

    /// Analytic inverse of `K`, valid since `f > 0` is a precondition.
    pub fn k_inverse(&self) -> Mat3 {
        let inv_f = 1.0 / self.f;
        Mat3::new(inv_f, 0.0, -self.px * inv_f, 0.0, inv_f, -self.py * inv_f, 0.0, 0.0, 1.0)
    }

    /// Field-of-view half-angles in radians about the x and y axes.
    ///
    /// Back-projects the image boundary midpoints through `K^-1` and
    /// measures the angle between each ray and the optical axis.
    pub fn half_fov(&self) -> (Real, Real) {
        let k_inv = self.k_inverse();
        let right = k_inv * Vec3::new(self.image_width(), self.py, 1.0);
        let bottom = k_inv * Vec3::new(self.px, self.image_height(), 1.0);
        ((right.x / right.z).atan(), (bottom.y / bottom.z).atan())
    }

    /// Project a camera-space point to pixel coordinates.
    ///
    /// Returns `None` when the point lies at or behind the camera plane
    /// (`z <= 0`), where the perspective divide is undefined.
    pub fn project_point(&self, p_cam: &Vec3) -> Option<Pt2> {
        if p_cam.z <= 0.0 {
            return None;
        }
        let h = self.k_matrix() * p_cam;
        Some(Pt2::new(h.x / h.z, h.y / h.z))
    }

    /// True if a pixel lies inside `[0, 2*px] x [0, 2*py]`, borders included.
    #[inline]
    pub fn contains_pixel(&self, p: &Pt2) -> bool {
        p.x >= 0.0 && p.x <= self.image_width() && p.y >= 0.0 && p.y <= self.image_height()
    }
}
