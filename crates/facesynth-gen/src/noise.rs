//! Gaussian observation noise on pixel projections.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use facesynth_core::{Pt2, Real};

use crate::error::SynthError;

/// Zero-mean Gaussian pixel noise with independent per-axis deviations.
///
/// The two distributions are built once per sequence and reused for every
/// landmark of every frame; each coordinate gets an independent draw. A
/// deviation of zero is valid and leaves coordinates exactly untouched.
#[derive(Debug, Clone)]
pub struct PixelNoise {
    std_x: Real,
    std_y: Real,
    dist_x: Normal<Real>,
    dist_y: Normal<Real>,
}

impl PixelNoise {
    /// Build the per-axis distributions.
    ///
    /// # Errors
    /// [`SynthError::InvalidNoiseStd`] for negative or non-finite
    /// deviations.
    pub fn new(std_x: Real, std_y: Real) -> Result<Self, SynthError> {
        let invalid = SynthError::InvalidNoiseStd { std_x, std_y };
        // Normal::new only rejects non-finite deviations; negative ones
        // sample the mirrored distribution
        if std_x < 0.0 || std_y < 0.0 {
            return Err(invalid);
        }
        let dist_x = Normal::new(0.0, std_x).map_err(|_| invalid.clone())?;
        let dist_y = Normal::new(0.0, std_y).map_err(|_| invalid)?;
        Ok(Self {
            std_x,
            std_y,
            dist_x,
            dist_y,
        })
    }

    /// Per-axis standard deviations (x, y).
    #[inline]
    pub fn std(&self) -> (Real, Real) {
        (self.std_x, self.std_y)
    }

    /// Apply independent noise to every pixel.
    pub fn perturb<R: Rng + ?Sized>(&self, pixels: &[Pt2], rng: &mut R) -> Vec<Pt2> {
        pixels
            .iter()
            .map(|p| {
                Pt2::new(
                    p.x + self.dist_x.sample(rng),
                    p.y + self.dist_y.sample(rng),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn grid() -> Vec<Pt2> {
        (0..100)
            .map(|i| Pt2::new((i % 10) as Real * 5.0, (i / 10) as Real * 5.0))
            .collect()
    }

    #[test]
    fn zero_deviation_is_the_identity() {
        let noise = PixelNoise::new(0.0, 0.0).unwrap();
        let pixels = grid();
        let mut rng = StdRng::seed_from_u64(1);
        let noisy = noise.perturb(&pixels, &mut rng);
        assert_eq!(noisy, pixels);
    }

    #[test]
    fn negative_deviation_is_rejected() {
        let err = PixelNoise::new(-1.0, 0.5).unwrap_err();
        assert_eq!(
            err,
            SynthError::InvalidNoiseStd {
                std_x: -1.0,
                std_y: 0.5
            }
        );
        assert!(PixelNoise::new(0.5, -1.0).is_err());
    }

    #[test]
    fn non_finite_deviation_is_rejected() {
        assert!(PixelNoise::new(Real::NAN, 1.0).is_err());
        assert!(PixelNoise::new(1.0, Real::INFINITY).is_err());
    }

    #[test]
    fn same_seed_reproduces_the_perturbation() {
        let noise = PixelNoise::new(1.5, 0.5).unwrap();
        let pixels = grid();
        let a = noise.perturb(&pixels, &mut StdRng::seed_from_u64(13));
        let b = noise.perturb(&pixels, &mut StdRng::seed_from_u64(13));
        assert_eq!(a, b);
    }

    #[test]
    fn sample_spread_tracks_the_configured_deviations() {
        let noise = PixelNoise::new(2.0, 0.5).unwrap();
        let pixels = vec![Pt2::new(0.0, 0.0); 20_000];
        let mut rng = StdRng::seed_from_u64(99);
        let noisy = noise.perturb(&pixels, &mut rng);

        let n = noisy.len() as Real;
        let mean_x = noisy.iter().map(|p| p.x).sum::<Real>() / n;
        let var_x = noisy.iter().map(|p| (p.x - mean_x).powi(2)).sum::<Real>() / n;
        let mean_y = noisy.iter().map(|p| p.y).sum::<Real>() / n;
        let var_y = noisy.iter().map(|p| (p.y - mean_y).powi(2)).sum::<Real>() / n;

        assert!(mean_x.abs() < 0.1);
        assert!(mean_y.abs() < 0.05);
        assert!((var_x.sqrt() - 2.0).abs() < 0.1);
        assert!((var_y.sqrt() - 0.5).abs() < 0.05);
    }
}
