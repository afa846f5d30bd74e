//! Direct Nonlinear Map
//!
//! Single-shot update with L² as an effective diffusion-like
//! coefficient:
//!
//!   S_i ← S_i − L²·force(S_i)
//!
//! No velocity state. This is the cheapest scheme and the one used for
//! the canonical bifurcation experiment, but it is the least stable:
//! for large L the magnitude can grow without bound. That divergence is
//! not mitigated here; it surfaces in the recorded trajectory.

use crate::integrator::IntegratorStep;
use crate::stokes::{Coefficients, StokesEnsemble, VelocityEnsemble};

pub struct DirectMap;

impl IntegratorStep for DirectMap {
    fn advance(
        &self,
        state: &mut StokesEnsemble,
        _velocity: &mut VelocityEnsemble,
        coeffs: &Coefficients,
        step: f64,
    ) {
        let l2 = step * step;

        let f1 = coeffs.force(&state.s1);
        let f2 = coeffs.force(&state.s2);
        let f3 = coeffs.force(&state.s3);

        state.s1 -= &(f1 * l2);
        state.s2 -= &(f2 * l2);
        state.s3 -= &(f3 * l2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::NpoParams;
    use crate::stokes::apply_feedback;
    use ndarray::array;

    /// One full iteration for N = 1, (0.01, 0.66, 0.01) pre-normalization,
    /// against values computed by hand from the map equations.
    #[test]
    fn test_single_oscillator_reference() {
        let params = NpoParams::default();

        let mut state =
            StokesEnsemble::from_components(array![0.01], array![0.66], array![0.01]).unwrap();
        state.normalize_intensity();
        let mut velocity = VelocityEnsemble::zeros(1);

        let coeffs = Coefficients::evaluate(&state, &params);
        assert!((coeffs.alpha[0] - (-0.008977696190715274)).abs() < 1e-9);
        assert!((coeffs.beta - 0.0198).abs() < 1e-9);

        DirectMap.advance(&mut state, &mut velocity, &coeffs, params.step);
        assert!((state.s1[0] - 0.015148377853709235).abs() < 1e-9, "S1L = {}", state.s1[0]);
        assert!((state.s2[0] - 0.9997434837719781).abs() < 1e-9, "S2L = {}", state.s2[0]);
        assert!((state.s3[0] - 0.015148377853709235).abs() < 1e-9, "S3L = {}", state.s3[0]);

        apply_feedback(&mut state, &params);
        assert!((state.s1[0] - 0.014542446831299733).abs() < 1e-9, "S1' = {}", state.s1[0]);
        assert!((state.s2[0] - 0.9497563095833791).abs() < 1e-9, "S2' = {}", state.s2[0]);
        assert!((state.s3[0] - 0.01484541029663505).abs() < 1e-9, "S3' = {}", state.s3[0]);
    }

    #[test]
    fn test_velocity_untouched() {
        let params = NpoParams::default();
        let mut state =
            StokesEnsemble::from_components(array![0.1], array![0.6], array![0.2]).unwrap();
        let mut velocity = VelocityEnsemble::zeros(1);
        velocity.v1[0] = 0.3;

        let coeffs = Coefficients::evaluate(&state, &params);
        DirectMap.advance(&mut state, &mut velocity, &coeffs, params.step);

        assert_eq!(velocity.v1[0], 0.3);
        assert_eq!(velocity.v2[0], 0.0);
    }
}
