//! Scalar and linear-algebra type aliases used across the workspace.

use nalgebra::{Matrix3, Point2, Point3, UnitQuaternion, Vector2, Vector3};

/// Scalar type for all geometry.
pub type Real = f64;

/// 2D vector.
pub type Vec2 = Vector2<Real>;

/// 3D vector.
pub type Vec3 = Vector3<Real>;

/// 2D point (pixel coordinates).
pub type Pt2 = Point2<Real>;

/// 3D point.
pub type Pt3 = Point3<Real>;

/// 3x3 matrix.
pub type Mat3 = Matrix3<Real>;

/// Rotation as a unit quaternion.
pub type Quat = UnitQuaternion<Real>;
