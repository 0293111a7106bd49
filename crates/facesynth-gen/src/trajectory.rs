//! Pose trajectory interpolation between two sampled endpoints.

use facesynth_core::{Pose, Real};

use crate::error::SynthError;

/// Interpolation parameters evenly spaced over `[0, 1]`.
///
/// A single frame yields `[0.0]`, so the trajectory collapses onto the
/// start pose.
fn interpolation_grid(frames: usize) -> Vec<Real> {
    if frames == 1 {
        return vec![0.0];
    }
    (0..frames)
        .map(|i| i as Real / (frames - 1) as Real)
        .collect()
}

/// Build a `frames`-pose trajectory from `start` to `end`.
///
/// Rotations follow the shortest-arc SLERP between the endpoint quaternions
/// (one endpoint is negated when their dot product is negative, avoiding the
/// long-arc artifact); translations interpolate componentwise linearly. Each
/// pose records the Euler decomposition of its interpolated rotation as
/// metadata.
///
/// Frame 0 reproduces `start` and frame `frames - 1` reproduces `end` (the
/// end rotation possibly with flipped quaternion sign).
///
/// # Errors
/// [`SynthError::DegenerateSlerp`] when the endpoint rotations are antipodal
/// and no unique shortest arc exists.
pub fn interpolate_poses(
    start: &Pose,
    end: &Pose,
    frames: usize,
) -> Result<Vec<Pose>, SynthError> {
    let mut poses = Vec::with_capacity(frames);
    for t in interpolation_grid(frames) {
        let rotation = start
            .rotation
            .try_slerp(&end.rotation, t, 1e-12)
            .ok_or(SynthError::DegenerateSlerp)?;
        let translation = start.translation.lerp(&end.translation, t);
        poses.push(Pose::new(rotation, translation));
    }
    Ok(poses)
}
