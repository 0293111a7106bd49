//! Rigid head pose applied to the face shape before projection.

use serde::{Deserialize, Serialize};

use crate::math::{Mat3, Pt3, Quat, Real, Vec3};

/// A rigid-body pose: rotation as a unit quaternion plus a camera-frame
/// translation.
///
/// The Euler decomposition of the rotation is recorded in degrees at
/// construction as metadata; it is never used to re-derive the rotation.
/// The fixed convention is `R = Rz(yaw) * Ry(pitch) * Rx(roll)`
/// (nalgebra's `from_euler_angles` order), whose decomposition via
/// `euler_angles` inverts the construction exactly for |pitch| < 90 deg.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pose {
    /// Rotation applied to the shape.
    pub rotation: Quat,
    /// Translation into the camera frame.
    pub translation: Vec3,
    /// Euler decomposition of `rotation` in degrees (roll, pitch, yaw).
    pub euler_deg: Vec3,
}

impl Pose {
    /// Build a pose and record the Euler decomposition of its rotation.
    pub fn new(rotation: Quat, translation: Vec3) -> Self {
        let (roll, pitch, yaw) = rotation.euler_angles();
        Self {
            rotation,
            translation,
            euler_deg: Vec3::new(roll.to_degrees(), pitch.to_degrees(), yaw.to_degrees()),
        }
    }

    /// Build a pose from Euler angles in degrees (roll, pitch, yaw).
    pub fn from_euler_deg(roll: Real, pitch: Real, yaw: Real, translation: Vec3) -> Self {
        let rotation =
            Quat::from_euler_angles(roll.to_radians(), pitch.to_radians(), yaw.to_radians());
        Self::new(rotation, translation)
    }

    /// Rotation as a 3x3 matrix.
    #[inline]
    pub fn rotation_matrix(&self) -> Mat3 {
        self.rotation.to_rotation_matrix().into_inner()
    }

    /// Map a face-frame point into the camera frame: `R * p + T`.
    #[inline]
    pub fn transform_point(&self, p: &Pt3) -> Vec3 {
        self.rotation * p.coords + self.translation
    }
}
