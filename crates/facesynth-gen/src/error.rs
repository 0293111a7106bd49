//! Typed failure kinds for sequence generation.

use thiserror::Error;

use facesynth_core::Real;

/// Errors produced by the samplers, the trajectory builder, the projector,
/// and the noise injector.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SynthError {
    /// Rotation rejection sampling exhausted its iteration budget.
    #[error("rotation bounds unsatisfiable after {max_iters} draws")]
    RotationBoundsUnsatisfiable { max_iters: usize },

    /// Endpoint visibility acceptance exhausted its iteration budget.
    #[error("no endpoint pose kept all landmarks visible after {max_iters} draws")]
    EndpointVisibilityUnsatisfiable { max_iters: usize },

    /// A landmark ended up at or behind the camera plane during projection.
    #[error("landmark {index} behind camera (z = {depth:.6})")]
    LandmarkBehindCamera { index: usize, depth: Real },

    /// Antipodal endpoint rotations admit no unique shortest arc.
    #[error("degenerate slerp configuration between endpoint rotations")]
    DegenerateSlerp,

    /// Negative or non-finite noise standard deviation.
    #[error("invalid noise standard deviation ({std_x}, {std_y})")]
    InvalidNoiseStd { std_x: Real, std_y: Real },
}
