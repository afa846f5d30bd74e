//! Oscillator Ensemble: Stokes Components as Struct-of-Arrays
//!
//! The ensemble holds N independent oscillators in component-major
//! layout (one `Array1` per Stokes component), matching the
//! data-parallel structure of the iteration: every per-step operation
//! is elementwise across oscillators with no cross-oscillator coupling.
//!
//! The intensity S0 = sqrt(S1² + S2² + S3²) is always recomputed from
//! the live components. Denominators built from it are floored at
//! [`INTENSITY_FLOOR`] so a dark oscillator can never divide by zero.

use ndarray::Array1;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::error::{SimulationError, SimulationResult};

/// Additive floor applied to every intensity used as a denominator.
pub const INTENSITY_FLOOR: f64 = 1e-12;

/// Stokes components (S1, S2, S3) of N independent oscillators.
#[derive(Debug, Clone, PartialEq)]
pub struct StokesEnsemble {
    pub s1: Array1<f64>,
    pub s2: Array1<f64>,
    pub s3: Array1<f64>,
}

impl StokesEnsemble {
    /// Build an ensemble from explicit component arrays.
    pub fn from_components(
        s1: Array1<f64>,
        s2: Array1<f64>,
        s3: Array1<f64>,
    ) -> SimulationResult<Self> {
        if s1.is_empty() && s2.is_empty() && s3.is_empty() {
            return Err(SimulationError::EmptyEnsemble);
        }
        if s1.len() != s2.len() || s1.len() != s3.len() {
            return Err(SimulationError::ComponentLengthMismatch {
                s1: s1.len(),
                s2: s2.len(),
                s3: s3.len(),
            });
        }
        Ok(Self { s1, s2, s3 })
    }

    /// Randomized initial condition with a fixed S2 bias.
    ///
    /// S1 and S3 are drawn uniformly from ±`spread`, S2 is pinned to
    /// `s2_ratio`, and the whole vector is rescaled so every oscillator
    /// starts at unit intensity. `spread` must be positive.
    ///
    /// Randomness lives only here; the iteration itself is deterministic.
    pub fn biased_random<R: Rng + ?Sized>(
        n: usize,
        s2_ratio: f64,
        spread: f64,
        rng: &mut R,
    ) -> SimulationResult<Self> {
        if n == 0 {
            return Err(SimulationError::EmptyEnsemble);
        }
        let uniform = Uniform::new(-spread, spread).unwrap();
        let s1 = Array1::from_iter((0..n).map(|_| uniform.sample(rng)));
        let s3 = Array1::from_iter((0..n).map(|_| uniform.sample(rng)));
        let s2 = Array1::from_elem(n, s2_ratio);

        let mut ensemble = Self { s1, s2, s3 };
        ensemble.normalize_intensity();
        Ok(ensemble)
    }

    /// Number of oscillators.
    pub fn len(&self) -> usize {
        self.s1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.s1.is_empty()
    }

    /// Intensity S0 per oscillator, recomputed from the components.
    pub fn intensity(&self) -> Array1<f64> {
        Array1::from_iter(
            self.s1
                .iter()
                .zip(self.s2.iter())
                .zip(self.s3.iter())
                .map(|((&s1, &s2), &s3)| (s1 * s1 + s2 * s2 + s3 * s3).sqrt()),
        )
    }

    /// Intensity with the denominator floor applied.
    pub fn floored_intensity(&self) -> Array1<f64> {
        self.intensity() + INTENSITY_FLOOR
    }

    /// Rescale every oscillator to unit intensity.
    pub fn normalize_intensity(&mut self) {
        let s0 = self.floored_intensity();
        self.s1 /= &s0;
        self.s2 /= &s0;
        self.s3 /= &s0;
    }

    /// Normalized spin component S1/S0 per oscillator.
    pub fn polarization(&self) -> Array1<f64> {
        let s0 = self.floored_intensity();
        &self.s1 / &s0
    }
}

/// Velocity (conjugate momentum) components for the velocity-based
/// schemes. The direct map ignores these; the leapfrog and semi-implicit
/// schemes mutate them in place every iteration and never reset them.
#[derive(Debug, Clone, PartialEq)]
pub struct VelocityEnsemble {
    pub v1: Array1<f64>,
    pub v2: Array1<f64>,
    pub v3: Array1<f64>,
}

impl VelocityEnsemble {
    /// Zero initial velocities (the derivative-form schemes' default).
    pub fn zeros(n: usize) -> Self {
        Self {
            v1: Array1::zeros(n),
            v2: Array1::zeros(n),
            v3: Array1::zeros(n),
        }
    }

    /// Small random velocities, uniform in ±`spread`, to seed
    /// oscillatory transients. `spread` must be positive.
    pub fn random_uniform<R: Rng + ?Sized>(n: usize, spread: f64, rng: &mut R) -> Self {
        let uniform = Uniform::new(-spread, spread).unwrap();
        Self {
            v1: Array1::from_iter((0..n).map(|_| uniform.sample(rng))),
            v2: Array1::from_iter((0..n).map(|_| uniform.sample(rng))),
            v3: Array1::from_iter((0..n).map(|_| uniform.sample(rng))),
        }
    }

    pub fn len(&self) -> usize {
        self.v1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.v1.is_empty()
    }
}
