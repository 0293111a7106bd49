//! Face shapes and the linear shape-basis model.
//!
//! A [`FaceShape`] is the static 68-landmark geometry observed through a
//! whole sequence. Shapes are drawn from a [`ShapeModel`]; the crate ships
//! [`LinearShapeModel`] (mean shape plus scaled basis directions) together
//! with a built-in canonical mean face so generation works without any
//! external asset.

mod canonical;

pub use canonical::canonical_face;

use anyhow::{ensure, Result};
use nalgebra::DMatrix;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use serde::{Deserialize, Serialize};

use crate::math::{Pt3, Real, Vec3};

/// Number of landmarks in a face shape (dlib 68-point convention).
pub const LANDMARK_COUNT: usize = 68;

/// An ordered set of 68 3D landmarks in the face coordinate frame.
///
/// Immutable once sampled; owned by the sequence that observes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceShape {
    points: Vec<Pt3>,
}

impl FaceShape {
    /// Create a shape from exactly [`LANDMARK_COUNT`] points.
    ///
    /// # Errors
    /// Fails when the point count is not [`LANDMARK_COUNT`].
    pub fn new(points: Vec<Pt3>) -> Result<Self> {
        ensure!(
            points.len() == LANDMARK_COUNT,
            "face shape needs {} landmarks, got {}",
            LANDMARK_COUNT,
            points.len()
        );
        Ok(Self { points })
    }

    /// Landmark positions in dlib order.
    #[inline]
    pub fn points(&self) -> &[Pt3] {
        &self.points
    }

    /// Number of landmarks.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Mean of the landmark positions.
    pub fn centroid(&self) -> Vec3 {
        let sum = self
            .points
            .iter()
            .fold(Vec3::zeros(), |acc, p| acc + p.coords);
        sum / self.points.len() as Real
    }

    /// Iterate over landmark positions.
    pub fn iter(&self) -> impl Iterator<Item = &Pt3> {
        self.points.iter()
    }
}

/// Source of sampled face shapes for sequence generation.
///
/// Implementations draw all internal randomness from the generator passed
/// in, so sequences stay reproducible under a fixed seed.
pub trait ShapeModel {
    /// The model's mean shape.
    fn mean_shape(&self) -> &FaceShape;

    /// Draw one shape.
    fn sample_shape<R: Rng + ?Sized>(&self, rng: &mut R) -> FaceShape;
}

/// Linear shape-basis model: mean shape plus scaled basis directions.
///
/// A sampled shape is `mean + sum_k c_k * scale_k * basis_k` with
/// coefficients `c_k` drawn from a standard normal. The basis is a
/// `(3*68) x K` matrix whose columns hold per-landmark xyz offsets; its
/// source (eigenvectors of a morphable model, hand-built deformations) is
/// opaque to the generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearShapeModel {
    mean: FaceShape,
    basis: DMatrix<Real>,
    scales: Vec<Real>,
}

impl LinearShapeModel {
    /// Build a model from raw parts.
    ///
    /// # Errors
    /// Fails when the basis row count is not `3 * LANDMARK_COUNT` or the
    /// number of scales does not match the basis column count.
    pub fn from_parts(mean: FaceShape, basis: DMatrix<Real>, scales: Vec<Real>) -> Result<Self> {
        ensure!(
            basis.nrows() == 3 * LANDMARK_COUNT,
            "basis needs {} rows, got {}",
            3 * LANDMARK_COUNT,
            basis.nrows()
        );
        ensure!(
            scales.len() == basis.ncols(),
            "got {} scales for {} basis components",
            scales.len(),
            basis.ncols()
        );
        Ok(Self {
            mean,
            basis,
            scales,
        })
    }

    /// A model with no basis components; sampling reproduces the mean.
    pub fn from_mean(mean: FaceShape) -> Self {
        Self {
            basis: DMatrix::zeros(3 * LANDMARK_COUNT, 0),
            scales: Vec::new(),
            mean,
        }
    }

    /// The built-in canonical face as a basis-free model.
    pub fn canonical() -> Self {
        Self::from_mean(canonical_face())
    }

    /// Number of basis components.
    #[inline]
    pub fn num_components(&self) -> usize {
        self.scales.len()
    }
}

impl ShapeModel for LinearShapeModel {
    fn mean_shape(&self) -> &FaceShape {
        &self.mean
    }

    fn sample_shape<R: Rng + ?Sized>(&self, rng: &mut R) -> FaceShape {
        let mut points = self.mean.points.clone();
        for (k, scale) in self.scales.iter().enumerate() {
            let coeff: Real = StandardNormal.sample(rng);
            let weighted = coeff * scale;
            for (i, p) in points.iter_mut().enumerate() {
                let offset = Vec3::new(
                    self.basis[(3 * i, k)],
                    self.basis[(3 * i + 1, k)],
                    self.basis[(3 * i + 2, k)],
                );
                *p += weighted * offset;
            }
        }
        // arity preserved: the point vector is never resized
        FaceShape { points }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rejects_wrong_arity() {
        assert!(FaceShape::new(vec![Pt3::origin(); 67]).is_err());
        assert!(FaceShape::new(vec![Pt3::origin(); 68]).is_ok());
    }

    #[test]
    fn centroid_of_canonical_face() {
        let c = canonical_face().centroid();
        assert!(c.x.abs() < 1e-12);
        assert!((c.y - 0.00025484).abs() < 1e-6);
        assert!((c.z - 0.04010731).abs() < 1e-6);
    }

    #[test]
    fn basis_free_model_reproduces_its_mean() {
        let model = LinearShapeModel::canonical();
        let mut rng = StdRng::seed_from_u64(3);
        let shape = model.sample_shape(&mut rng);
        assert_eq!(shape, *model.mean_shape());
    }

    #[test]
    fn single_component_offsets_follow_the_basis_direction() {
        let mean = canonical_face();
        // one component displacing every landmark along +x by one unit
        let mut basis = DMatrix::zeros(3 * LANDMARK_COUNT, 1);
        for i in 0..LANDMARK_COUNT {
            basis[(3 * i, 0)] = 1.0;
        }
        let scale = 0.01;
        let model = LinearShapeModel::from_parts(mean.clone(), basis, vec![scale]).unwrap();

        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let shape = model.sample_shape(&mut rng);
            let d0 = shape.points()[0] - mean.points()[0];
            assert!(d0.y.abs() < 1e-15 && d0.z.abs() < 1e-15);
            // the same draw shifts every landmark identically
            for (s, m) in shape.iter().zip(mean.iter()) {
                assert!(((s - m) - d0).norm() < 1e-12);
            }
        }
    }

    #[test]
    fn offsets_scale_linearly_with_the_component_scale() {
        let mean = canonical_face();
        let mut basis = DMatrix::zeros(3 * LANDMARK_COUNT, 1);
        for i in 0..LANDMARK_COUNT {
            basis[(3 * i + 1, 0)] = 0.5;
        }
        let narrow = LinearShapeModel::from_parts(mean.clone(), basis.clone(), vec![0.01]).unwrap();
        let wide = LinearShapeModel::from_parts(mean.clone(), basis, vec![0.02]).unwrap();

        // same seed, same coefficient draw; only the scale differs
        let a = narrow.sample_shape(&mut StdRng::seed_from_u64(21));
        let b = wide.sample_shape(&mut StdRng::seed_from_u64(21));
        for ((s_a, s_b), m) in a.iter().zip(b.iter()).zip(mean.iter()) {
            let d_a = s_a - m;
            let d_b = s_b - m;
            assert!((d_b - 2.0 * d_a).norm() < 1e-12);
        }
    }

    #[test]
    fn from_parts_validates_dimensions() {
        let mean = canonical_face();
        let bad_rows = DMatrix::zeros(10, 1);
        assert!(LinearShapeModel::from_parts(mean.clone(), bad_rows, vec![1.0]).is_err());
        let basis = DMatrix::zeros(3 * LANDMARK_COUNT, 2);
        assert!(LinearShapeModel::from_parts(mean, basis, vec![1.0]).is_err());
    }

    #[test]
    fn model_round_trips_through_json() {
        let model = LinearShapeModel::canonical();
        let json = serde_json::to_string(&model).unwrap();
        let back: LinearShapeModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back.mean_shape(), model.mean_shape());
        assert_eq!(back.num_components(), 0);
    }
}
