//! Rigid transform and pinhole projection of the face shape.

use facesynth_core::{CameraIntrinsics, FaceShape, Pose, Pt2, Vec3};

use crate::error::SynthError;

/// Camera-space landmarks and their noiseless pixel projections for one
/// frame.
#[derive(Debug, Clone)]
pub struct Projection {
    /// Landmarks mapped into the camera frame.
    pub camera_points: Vec<Vec3>,
    /// Pixel coordinates after the homogeneous divide.
    pub pixels: Vec<Pt2>,
}

/// Transform `shape` by `pose` and project it through `intrinsics`.
///
/// Camera-space landmarks are `R * p + T`; pixels are `K * p_cam` followed
/// by the homogeneous divide.
///
/// # Errors
/// [`SynthError::LandmarkBehindCamera`] when any camera-space depth is
/// non-positive. The perspective divide is undefined there, so the whole
/// frame is rejected; a trajectory honoring its depth bounds never reaches
/// this.
pub fn project_frame(
    shape: &FaceShape,
    pose: &Pose,
    intrinsics: &CameraIntrinsics,
) -> Result<Projection, SynthError> {
    let mut camera_points = Vec::with_capacity(shape.len());
    let mut pixels = Vec::with_capacity(shape.len());
    for (index, point) in shape.iter().enumerate() {
        let p_cam = pose.transform_point(point);
        let pixel = intrinsics
            .project_point(&p_cam)
            .ok_or(SynthError::LandmarkBehindCamera {
                index,
                depth: p_cam.z,
            })?;
        camera_points.push(p_cam);
        pixels.push(pixel);
    }
    Ok(Projection {
        camera_points,
        pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use facesynth_core::{canonical_face, Quat, LANDMARK_COUNT};

    #[test]
    fn projects_every_landmark() {
        let shape = canonical_face();
        let pose = Pose::new(Quat::identity(), Vec3::new(0.0, 0.0, 0.4));
        let intr = CameraIntrinsics {
            f: 500.0,
            px: 320.0,
            py: 240.0,
        };
        let proj = project_frame(&shape, &pose, &intr).unwrap();
        assert_eq!(proj.camera_points.len(), LANDMARK_COUNT);
        assert_eq!(proj.pixels.len(), LANDMARK_COUNT);
        for p in &proj.camera_points {
            assert!(p.z > 0.0);
        }
    }

    #[test]
    fn nose_tip_at_depth_hits_the_principal_point_exactly() {
        // landmark 30 of the canonical face sits at the origin
        let shape = canonical_face();
        let pose = Pose::new(Quat::identity(), Vec3::new(0.0, 0.0, 1.5));
        let intr = CameraIntrinsics {
            f: 1000.0,
            px: 320.0,
            py: 240.0,
        };
        let proj = project_frame(&shape, &pose, &intr).unwrap();
        assert_eq!(proj.pixels[30].x, intr.px);
        assert_eq!(proj.pixels[30].y, intr.py);
    }

    #[test]
    fn pixel_projection_matches_the_intrinsic_matrix() {
        let shape = canonical_face();
        let pose = Pose::from_euler_deg(8.0, -12.0, 16.0, Vec3::new(0.02, -0.01, 0.45));
        let intr = CameraIntrinsics {
            f: 500.0,
            px: 320.0,
            py: 240.0,
        };
        let proj = project_frame(&shape, &pose, &intr).unwrap();
        let k = intr.k_matrix();
        for (p_cam, pixel) in proj.camera_points.iter().zip(&proj.pixels) {
            let h = k * p_cam;
            assert!((pixel.x - h.x / h.z).abs() < 1e-12);
            assert!((pixel.y - h.y / h.z).abs() < 1e-12);
        }
    }

    #[test]
    fn landmark_behind_camera_is_a_hard_failure() {
        let shape = canonical_face();
        let pose = Pose::new(Quat::identity(), Vec3::new(0.0, 0.0, -0.2));
        let intr = CameraIntrinsics {
            f: 500.0,
            px: 320.0,
            py: 240.0,
        };
        let err = project_frame(&shape, &pose, &intr).unwrap_err();
        match err {
            SynthError::LandmarkBehindCamera { depth, .. } => assert!(depth <= 0.0),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
