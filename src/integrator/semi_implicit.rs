//! Semi-Implicit Scheme with Soft Clamping
//!
//! Propagation uses the old force, the velocity update the new
//! position's force (symplectic-Euler style):
//!
//!   S_L = S + L·V − L²·force(S)
//!   V  ← V − L·force(S_L)
//!
//! After the feedback stage, any oscillator whose norm has grown past
//! [`CLAMP_THRESHOLD`] is divided by that norm, restoring unit-ish
//! magnitude while preserving direction. Converged oscillators are
//! untouched, so this is a stability safety valve, not a per-step
//! normalization. The clamp is scoped to this scheme only.

use ndarray::Array1;

use crate::integrator::IntegratorStep;
use crate::stokes::{Coefficients, StokesEnsemble, VelocityEnsemble};

/// Norm above which a diverging oscillator is rescaled.
pub const CLAMP_THRESHOLD: f64 = 10.0;

pub struct SemiImplicit;

fn advance_axis(s: &mut Array1<f64>, v: &mut Array1<f64>, coeffs: &Coefficients, l: f64) {
    let f_old = coeffs.force(s);
    *s += &(&*v * l);
    *s -= &(f_old * (l * l));

    *v -= &(coeffs.force(s) * l);
}

impl IntegratorStep for SemiImplicit {
    fn advance(
        &self,
        state: &mut StokesEnsemble,
        velocity: &mut VelocityEnsemble,
        coeffs: &Coefficients,
        step: f64,
    ) {
        advance_axis(&mut state.s1, &mut velocity.v1, coeffs, step);
        advance_axis(&mut state.s2, &mut velocity.v2, coeffs, step);
        advance_axis(&mut state.s3, &mut velocity.v3, coeffs, step);
    }

    fn post_feedback(&self, state: &mut StokesEnsemble) {
        for i in 0..state.len() {
            let norm =
                (state.s1[i].powi(2) + state.s2[i].powi(2) + state.s3[i].powi(2)).sqrt();
            if norm > CLAMP_THRESHOLD {
                state.s1[i] /= norm;
                state.s2[i] /= norm;
                state.s3[i] /= norm;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::NpoParams;
    use ndarray::array;

    #[test]
    fn test_zero_velocity_propagation_matches_old_force() {
        let params = NpoParams::default();
        let mut state =
            StokesEnsemble::from_components(array![0.2], array![0.6], array![0.1]).unwrap();
        let mut velocity = VelocityEnsemble::zeros(1);

        let coeffs = Coefficients::evaluate(&state, &params);
        let f1 = coeffs.force(&state.s1)[0];
        let s1_old = state.s1[0];

        SemiImplicit.advance(&mut state, &mut velocity, &coeffs, params.step);

        let expected_s1 = s1_old - params.step * params.step * f1;
        assert!((state.s1[0] - expected_s1).abs() < 1e-12);

        // Velocity is updated from the force at the *new* position.
        let f1_new = coeffs.force(&array![expected_s1])[0];
        assert!((velocity.v1[0] - (-params.step * f1_new)).abs() < 1e-12);
    }

    #[test]
    fn test_soft_clamp_rescales_diverging_oscillator() {
        let mut state =
            StokesEnsemble::from_components(array![20.0, 0.1], array![5.0, 0.6], array![-3.0, 0.2])
                .unwrap();
        let before = state.clone();

        SemiImplicit.post_feedback(&mut state);

        // Diverging oscillator: unit norm, direction preserved.
        let norm = state.intensity()[0];
        assert!(norm <= CLAMP_THRESHOLD + 1e-9, "norm = {}", norm);
        assert!((norm - 1.0).abs() < 1e-9);
        assert!(state.s1[0] > 0.0 && state.s3[0] < 0.0);
        let scale = before.s1[0] / state.s1[0];
        assert!((before.s2[0] / state.s2[0] - scale).abs() < 1e-9);
        assert!((before.s3[0] / state.s3[0] - scale).abs() < 1e-9);

        // Converged oscillator untouched.
        assert_eq!(state.s1[1], before.s1[1]);
        assert_eq!(state.s2[1], before.s2[1]);
        assert_eq!(state.s3[1], before.s3[1]);
    }
}
