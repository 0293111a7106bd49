//! Synthetic face-landmark sequence generation.
//!
//! Draws two bounded endpoint poses, interpolates an M-frame trajectory
//! between them (SLERP for rotation, linear for translation), projects a
//! static 3D face shape into every frame through a pinhole camera, perturbs
//! the projections with Gaussian pixel noise, and aggregates per-frame
//! depth/scale statistics. All randomness comes from one seeded stream, so
//! sequences are reproducible.
//!
//! ```
//! use facesynth_core::LinearShapeModel;
//! use facesynth_gen::{generate_sequence, SequenceConfig};
//!
//! let config = SequenceConfig {
//!     frames: 5,
//!     ..SequenceConfig::default()
//! };
//! let model = LinearShapeModel::canonical();
//! let sequence = generate_sequence(&config, &model).unwrap();
//! assert_eq!(sequence.num_frames(), 5);
//! ```

pub mod error;
pub mod generator;
pub mod noise;
pub mod project;
pub mod sample;
pub mod stats;
pub mod trajectory;

pub use error::SynthError;
pub use generator::{
    generate_sequence, generate_sequence_with_rng, EndpointVisibility, SequenceConfig,
};
pub use noise::PixelNoise;
pub use project::{project_frame, Projection};
pub use sample::{sample_rotation, sample_translation, DepthRange, RotationBounds};
pub use stats::aggregate_stats;
pub use trajectory::interpolate_poses;
