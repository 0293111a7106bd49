//! Bounded random rotation sampling.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use facesynth_core::{Quat, Real};

use crate::error::SynthError;

/// Symmetric per-axis Euler-angle bounds in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationBounds {
    /// Bound on roll (rotation about x), degrees.
    pub roll_deg: Real,
    /// Bound on pitch (rotation about y), degrees. Must stay below 90 so
    /// the Euler decomposition of a sampled quaternion is unique.
    pub pitch_deg: Real,
    /// Bound on yaw (rotation about z), degrees.
    pub yaw_deg: Real,
}

impl Default for RotationBounds {
    fn default() -> Self {
        Self {
            roll_deg: 30.0,
            pitch_deg: 30.0,
            yaw_deg: 30.0,
        }
    }
}

impl RotationBounds {
    /// Bounds as a (roll, pitch, yaw) array, degrees.
    #[inline]
    pub fn as_array(&self) -> [Real; 3] {
        [self.roll_deg, self.pitch_deg, self.yaw_deg]
    }
}

/// Slack absorbing floating-point error in the decomposition check, degrees.
const BOUND_TOL_DEG: Real = 1e-7;

/// Draw a rotation whose Euler decomposition stays within `bounds`.
///
/// Angles are drawn uniformly in `[-bound, +bound]` per axis and converted
/// to a quaternion with the fixed convention
/// `R = Rz(yaw) * Ry(pitch) * Rx(roll)`. The Euler decomposition of the
/// candidate is re-derived and the draw is rejected when any angle exceeds
/// its bound; for pitch bounds below 90 deg the conversion round-trips
/// exactly and the first candidate is accepted.
///
/// # Errors
/// [`SynthError::RotationBoundsUnsatisfiable`] when no candidate passes
/// within `max_iters` draws.
pub fn sample_rotation<R: Rng + ?Sized>(
    bounds: &RotationBounds,
    max_iters: usize,
    rng: &mut R,
) -> Result<Quat, SynthError> {
    for iter in 0..max_iters {
        let roll = rng.random_range(-bounds.roll_deg..=bounds.roll_deg);
        let pitch = rng.random_range(-bounds.pitch_deg..=bounds.pitch_deg);
        let yaw = rng.random_range(-bounds.yaw_deg..=bounds.yaw_deg);
        let q = Quat::from_euler_angles(roll.to_radians(), pitch.to_radians(), yaw.to_radians());

        let (r, p, y) = q.euler_angles();
        let within = r.to_degrees().abs() <= bounds.roll_deg + BOUND_TOL_DEG
            && p.to_degrees().abs() <= bounds.pitch_deg + BOUND_TOL_DEG
            && y.to_degrees().abs() <= bounds.yaw_deg + BOUND_TOL_DEG;
        if within {
            return Ok(q);
        }
        debug!(
            "rotation candidate {iter} rejected: decomposed to ({:.4}, {:.4}, {:.4}) deg",
            r.to_degrees(),
            p.to_degrees(),
            y.to_degrees()
        );
    }
    Err(SynthError::RotationBoundsUnsatisfiable { max_iters })
}
