//! Top-level sequence generation.

use anyhow::{ensure, Result};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use facesynth_core::{
    CameraIntrinsics, FaceSequence, FaceShape, Frame, Pose, Real, ShapeModel, StepLimits,
};

use crate::error::SynthError;
use crate::noise::PixelNoise;
use crate::project::project_frame;
use crate::sample::{sample_rotation, sample_translation, DepthRange, RotationBounds};
use crate::stats::aggregate_stats;
use crate::trajectory::interpolate_poses;

/// Acceptance rule for sampled endpoint poses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndpointVisibility {
    /// Only the frustum bound on the translation applies: the point at the
    /// sampled translation stays in view, individual landmarks may not.
    #[default]
    CentroidOnly,
    /// Re-draw an endpoint until every projected landmark lands inside the
    /// image.
    AllLandmarks,
}

/// Configuration for one sequence-generation call.
///
/// Every tunable is explicit. The defaults describe a 100-frame sequence in
/// front of a 640x480 camera, depths between 0.3 and 0.5, 30 deg per-axis
/// rotation bounds, and 1 px observation noise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceConfig {
    /// Number of frames M, at least 1.
    pub frames: usize,
    /// Camera intrinsics, fixed over the sequence.
    pub intrinsics: CameraIntrinsics,
    /// Gaussian pixel-noise standard deviation on x.
    pub noise_std_x: Real,
    /// Gaussian pixel-noise standard deviation on y.
    pub noise_std_y: Real,
    /// Per-axis bounds on the endpoint rotations, degrees.
    pub rotation_bounds: RotationBounds,
    /// Depth range for the endpoint translations.
    pub depth_range: DepthRange,
    /// Endpoint acceptance rule.
    pub endpoint_visibility: EndpointVisibility,
    /// Iteration budget for each rejection-sampling loop.
    pub max_sample_iters: usize,
    /// Metadata-only bound on per-step pose deltas, recorded on the output.
    pub step_limits: StepLimits,
    /// Seed for the generator's random stream.
    pub seed: u64,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            frames: 100,
            intrinsics: CameraIntrinsics {
                f: 500.0,
                px: 320.0,
                py: 240.0,
            },
            noise_std_x: 1.0,
            noise_std_y: 1.0,
            rotation_bounds: RotationBounds::default(),
            depth_range: DepthRange::default(),
            endpoint_visibility: EndpointVisibility::CentroidOnly,
            max_sample_iters: 100,
            step_limits: StepLimits::default(),
            seed: 7,
        }
    }
}

impl SequenceConfig {
    /// Check the documented preconditions.
    ///
    /// # Errors
    /// Fails on a zero frame count, non-positive intrinsics, negative noise
    /// deviations, negative rotation bounds, a pitch bound of 90 deg or
    /// more, a non-positive or unordered depth range, or an empty iteration
    /// budget.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.frames >= 1, "need at least one frame");
        ensure!(
            self.intrinsics.f > 0.0,
            "focal length must be positive, got {}",
            self.intrinsics.f
        );
        ensure!(
            self.intrinsics.px > 0.0 && self.intrinsics.py > 0.0,
            "principal point must be positive, got ({}, {})",
            self.intrinsics.px,
            self.intrinsics.py
        );
        ensure!(
            self.noise_std_x >= 0.0 && self.noise_std_y >= 0.0,
            "noise deviations must be non-negative, got ({}, {})",
            self.noise_std_x,
            self.noise_std_y
        );
        ensure!(
            self.rotation_bounds.roll_deg >= 0.0
                && self.rotation_bounds.pitch_deg >= 0.0
                && self.rotation_bounds.yaw_deg >= 0.0,
            "rotation bounds must be non-negative"
        );
        ensure!(
            self.rotation_bounds.pitch_deg < 90.0,
            "pitch bound must stay below 90 deg, got {}",
            self.rotation_bounds.pitch_deg
        );
        ensure!(
            self.depth_range.min_z > 0.0 && self.depth_range.max_z >= self.depth_range.min_z,
            "depth range must be positive and ordered, got [{}, {}]",
            self.depth_range.min_z,
            self.depth_range.max_z
        );
        ensure!(self.max_sample_iters >= 1, "need a sampling iteration budget");
        Ok(())
    }
}

/// Generate one labeled sequence with a stream seeded from the config.
///
/// Convenience wrapper over [`generate_sequence_with_rng`].
pub fn generate_sequence<S: ShapeModel>(
    config: &SequenceConfig,
    model: &S,
) -> Result<FaceSequence> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    generate_sequence_with_rng(config, model, &mut rng)
}

/// Generate one labeled sequence drawing all randomness from `rng`.
///
/// Samples a static shape from `model`, draws two bounded endpoint poses,
/// interpolates the M-frame trajectory between them, projects every frame
/// through the pinhole camera, perturbs the projections with Gaussian pixel
/// noise, and aggregates per-frame statistics. Generation is all-or-nothing:
/// any failure aborts the whole sequence.
///
/// # Errors
/// Precondition violations from [`SequenceConfig::validate`], or any
/// [`SynthError`] raised by the samplers, trajectory builder, projector, or
/// noise injector.
pub fn generate_sequence_with_rng<S, R>(
    config: &SequenceConfig,
    model: &S,
    rng: &mut R,
) -> Result<FaceSequence>
where
    S: ShapeModel,
    R: Rng + ?Sized,
{
    config.validate()?;

    let shape = model.sample_shape(rng);
    let mean_shape = model.mean_shape().clone();
    let noise = PixelNoise::new(config.noise_std_x, config.noise_std_y)?;

    let start = sample_endpoint(config, &shape, rng)?;
    let end = sample_endpoint(config, &shape, rng)?;
    debug!(
        "endpoints: start euler {:?} deg at {:?}, end euler {:?} deg at {:?}",
        start.euler_deg, start.translation, end.euler_deg, end.translation
    );

    let poses = interpolate_poses(&start, &end, config.frames)?;

    let mut frames = Vec::with_capacity(poses.len());
    for pose in &poses {
        let projection = project_frame(&shape, pose, &config.intrinsics)?;
        let noisy_pixels = noise.perturb(&projection.pixels, rng);
        frames.push(Frame {
            camera_points: projection.camera_points,
            pixels: projection.pixels,
            noisy_pixels,
        });
    }

    let stats = aggregate_stats(&frames);

    Ok(FaceSequence {
        mean_shape,
        shape,
        poses,
        frames,
        intrinsics: config.intrinsics,
        noise_std: (config.noise_std_x, config.noise_std_y),
        rotation_bounds_deg: config.rotation_bounds.as_array(),
        step_limits: config.step_limits,
        stats,
    })
}

/// Sample one endpoint pose honoring the configured acceptance rule.
fn sample_endpoint<R: Rng + ?Sized>(
    config: &SequenceConfig,
    shape: &FaceShape,
    rng: &mut R,
) -> Result<Pose, SynthError> {
    for _ in 0..config.max_sample_iters {
        let rotation = sample_rotation(&config.rotation_bounds, config.max_sample_iters, rng)?;
        let translation = sample_translation(&config.intrinsics, &config.depth_range, rng);
        let pose = Pose::new(rotation, translation);
        match config.endpoint_visibility {
            EndpointVisibility::CentroidOnly => return Ok(pose),
            EndpointVisibility::AllLandmarks => {
                if all_landmarks_visible(shape, &pose, &config.intrinsics) {
                    return Ok(pose);
                }
                debug!("endpoint rejected: landmark outside the image");
            }
        }
    }
    Err(SynthError::EndpointVisibilityUnsatisfiable {
        max_iters: config.max_sample_iters,
    })
}

fn all_landmarks_visible(shape: &FaceShape, pose: &Pose, intrinsics: &CameraIntrinsics) -> bool {
    match project_frame(shape, pose, intrinsics) {
        Ok(projection) => projection
            .pixels
            .iter()
            .all(|p| intrinsics.contains_pixel(p)),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_passes_validation() {
        assert!(SequenceConfig::default().validate().is_ok());
    }

    #[test]
    fn validation_rejects_bad_parameters() {
        let base = SequenceConfig::default;
        let cases = [
            SequenceConfig { frames: 0, ..base() },
            SequenceConfig {
                noise_std_y: -0.1,
                ..base()
            },
            SequenceConfig {
                rotation_bounds: RotationBounds {
                    pitch_deg: 90.0,
                    ..RotationBounds::default()
                },
                ..base()
            },
            SequenceConfig {
                depth_range: DepthRange {
                    min_z: 0.0,
                    ..DepthRange::default()
                },
                ..base()
            },
            SequenceConfig {
                depth_range: DepthRange {
                    min_z: 0.3,
                    max_z: 0.1,
                },
                ..base()
            },
            SequenceConfig {
                max_sample_iters: 0,
                ..base()
            },
        ];
        for cfg in cases {
            assert!(cfg.validate().is_err(), "{cfg:?} should not validate");
        }
    }

    #[test]
    fn config_round_trips_through_json() {
        let cfg = SequenceConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SequenceConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.frames, cfg.frames);
        assert_eq!(back.seed, cfg.seed);
        assert_eq!(back.endpoint_visibility, cfg.endpoint_visibility);
        assert_eq!(back.rotation_bounds, cfg.rotation_bounds);
    }
}
