//! Nonlinear Coupling Coefficients
//!
//! One propagation step of the chi-(2) medium acts on each Stokes
//! component through the cubic force
//!
//!   force(s) = alpha·s + beta·s³
//!
//! with
//!
//!   r2    = S1² + S2²/eta
//!   alpha = chi²·eta·(S0² + (1 − 2·eta)·r2)
//!   beta  = 2·chi²·eta·(eta − 1)
//!
//! alpha depends on the live state and is recomputed every iteration;
//! beta is constant for fixed (chi, eta). S0 enters alpha with the
//! denominator floor already applied, so a dark oscillator contributes
//! a vanishing but finite coefficient.

use ndarray::Array1;

use crate::params::NpoParams;
use crate::stokes::StokesEnsemble;

/// Per-iteration nonlinear coefficients: one alpha per oscillator and
/// the shared cubic coefficient beta.
#[derive(Debug, Clone, PartialEq)]
pub struct Coefficients {
    pub alpha: Array1<f64>,
    pub beta: f64,
}

impl Coefficients {
    /// Evaluate the coefficients for the current state. Pure function of
    /// `(ensemble, params)`; no state is mutated.
    pub fn evaluate(ensemble: &StokesEnsemble, params: &NpoParams) -> Self {
        let chi2_eta = params.chi * params.chi * params.eta;
        let weight = 1.0 - 2.0 * params.eta;

        let s0 = ensemble.floored_intensity();
        let r2 = Array1::from_iter(
            ensemble
                .s1
                .iter()
                .zip(ensemble.s2.iter())
                .map(|(&s1, &s2)| s1 * s1 + s2 * s2 / params.eta),
        );

        let alpha = Array1::from_iter(
            s0.iter()
                .zip(r2.iter())
                .map(|(&s0, &r2)| chi2_eta * (s0 * s0 + weight * r2)),
        );
        let beta = 2.0 * params.chi * params.chi * params.eta * (params.eta - 1.0);

        Self { alpha, beta }
    }

    /// Cubic restoring/repelling force for one component axis.
    pub fn force(&self, axis: &Array1<f64>) -> Array1<f64> {
        Array1::from_iter(
            self.alpha
                .iter()
                .zip(axis.iter())
                .map(|(&alpha, &s)| alpha * s + self.beta * s * s * s),
        )
    }
}
