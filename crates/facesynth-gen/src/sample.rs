//! Endpoint pose sampling: bounded rotations and frustum-bounded
//! translations.

pub mod rotation;
pub mod translation;

pub use rotation::{sample_rotation, RotationBounds};
pub use translation::{sample_translation, DepthRange};
