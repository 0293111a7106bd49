//! Core types for synthetic 3D face-landmark sequences.
//!
//! This crate holds the data model shared by the generation pipeline:
//! scalar and linear-algebra aliases ([`math`]), the pinhole camera
//! ([`camera`]), rigid head poses ([`pose`]), face shapes and the linear
//! shape-basis model ([`shape`]), and the immutable output record of a
//! generated sequence ([`sequence`]).

pub mod camera;
pub mod math;
pub mod pose;
pub mod sequence;
pub mod shape;

pub use camera::CameraIntrinsics;
pub use math::*;
pub use pose::Pose;
pub use sequence::{FaceSequence, Frame, SequenceStats, StepLimits};
pub use shape::{canonical_face, FaceShape, LinearShapeModel, ShapeModel, LANDMARK_COUNT};
