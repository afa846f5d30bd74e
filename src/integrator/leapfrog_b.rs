//! Leapfrog Predictor-Corrector, Derivative Form
//!
//! Predictor (Euler, old derivative):
//!
//!   S* = S + L·V
//!
//! Corrector, derivative first:
//!
//!   V ← V − ½L·(force(S) + force(S*))
//!   S ← S + L·V
//!
//! Unlike the velocity form ([`crate::integrator::LeapfrogA`]), the
//! averaged force here is evaluated at the *old* and predicted
//! positions, and the position then advances by a full step of the new
//! derivative. The two orderings are distinct schemes with distinct
//! trajectories.

use ndarray::Array1;

use crate::integrator::IntegratorStep;
use crate::stokes::{Coefficients, StokesEnsemble, VelocityEnsemble};

pub struct LeapfrogB;

fn advance_axis(s: &mut Array1<f64>, v: &mut Array1<f64>, coeffs: &Coefficients, l: f64) {
    let s_predicted = &*s + &(&*v * l);

    let f_old = coeffs.force(s);
    let f_predicted = coeffs.force(&s_predicted);
    *v -= &((&f_old + &f_predicted) * (0.5 * l));

    *s += &(&*v * l);
}

impl IntegratorStep for LeapfrogB {
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrator::{DirectMap, LeapfrogA};
    use crate::params::NpoParams;
    use ndarray::array;

    fn test_state() -> (StokesEnsemble, VelocityEnsemble) {
        let state =
            StokesEnsemble::from_components(array![0.2], array![0.6], array![0.1]).unwrap();
        (state, VelocityEnsemble::zeros(1))
    }

    /// With zero velocity the predictor stays at S, so the new
    /// derivative is −L·force(S) and the position lands exactly on the
    /// direct map: S − L²·force(S).
    #[test]
    fn test_zero_velocity_first_step_matches_direct_map() {
        let params = NpoParams::default();

        let (mut state_b, mut velocity_b) = test_state();
        let coeffs = Coefficients::evaluate(&state_b, &params);
        LeapfrogB.advance(&mut state_b, &mut velocity_b, &coeffs, params.step);

        let (mut state_d, mut velocity_d) = test_state();
        DirectMap.advance(&mut state_d, &mut velocity_d, &coeffs, params.step);

        for (b, d) in [
            (state_b.s1[0], state_d.s1[0]),
            (state_b.s2[0], state_d.s2[0]),
            (state_b.s3[0], state_d.s3[0]),
        ] {
            assert!((b - d).abs() < 1e-12, "leapfrog-B {} vs direct {}", b, d);
        }
        assert!(velocity_b.v1[0] != 0.0);
    }

    /// The two leapfrog orderings separate after a single step on the
    /// same input.
    #[test]
    fn test_diverges_from_variant_a() {
        let params = NpoParams::default();

        let (mut state_a, mut velocity_a) = test_state();
        let coeffs = Coefficients::evaluate(&state_a, &params);
        LeapfrogA.advance(&mut state_a, &mut velocity_a, &coeffs, params.step);

        let (mut state_b, mut velocity_b) = test_state();
        LeapfrogB.advance(&mut state_b, &mut velocity_b, &coeffs, params.step);

        assert!(
            (state_a.s2[0] - state_b.s2[0]).abs() > 1e-12,
            "variants should not coincide: A = {}, B = {}",
            state_a.s2[0],
            state_b.s2[0]
        );
    }
}
