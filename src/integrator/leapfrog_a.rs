//! Leapfrog Predictor-Corrector, Velocity Form
//!
//! Predictor (Euler):
//!
//!   S* = S + L·V
//!   V* = V − L·force(S)
//!
//! Corrector (trapezoidal), position first:
//!
//!   S ← S + ½L·(V + V*)
//!   V ← V − ½L·(force(S) + force(S*))
//!
//! The velocity corrector evaluates the force at the *corrected*
//! position, not the old one. That ordering is part of the scheme's
//! definition; swapping it yields the derivative-form variant
//! ([`crate::integrator::LeapfrogB`]) with a numerically different
//! trajectory.

use ndarray::Array1;

use crate::integrator::IntegratorStep;
use crate::stokes::{Coefficients, StokesEnsemble, VelocityEnsemble};

pub struct LeapfrogA;

fn advance_axis(s: &mut Array1<f64>, v: &mut Array1<f64>, coeffs: &Coefficients, l: f64) {
    let s_star = &*s + &(&*v * l);
    let v_star = &*v - &(coeffs.force(s) * l);

    *s += &((&*v + &v_star) * (0.5 * l));

    let f_corrected = coeffs.force(s);
    let f_predicted = coeffs.force(&s_star);
    *v -= &((&f_corrected + &f_predicted) * (0.5 * l));
}

impl IntegratorStep for LeapfrogA {
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
    use crate::params::NpoParams;
    use ndarray::array;

    /// With zero velocity the predictor leaves S in place, so the
    /// corrected position collapses to S − ½L²·force(S).
    #[test]
    fn test_zero_velocity_first_step() {
        let params = NpoParams::default();
        let mut state =
            StokesEnsemble::from_components(array![0.2], array![0.6], array![0.1]).unwrap();
        let mut velocity = VelocityEnsemble::zeros(1);

        let coeffs = Coefficients::evaluate(&state, &params);
        let f1 = coeffs.force(&state.s1)[0];
        let s1_old = state.s1[0];

        LeapfrogA.advance(&mut state, &mut velocity, &coeffs, params.step);

        let expected = s1_old - 0.5 * params.step * params.step * f1;
        assert!(
            (state.s1[0] - expected).abs() < 1e-12,
            "S1 = {}, expected {}",
            state.s1[0],
            expected
        );
        assert!(velocity.v1[0] != 0.0, "velocity should pick up the force");
    }

    #[test]
    fn test_velocity_feeds_position() {
        let params = NpoParams::default();
        let mut state =
            StokesEnsemble::from_components(array![0.0], array![0.66], array![0.0]).unwrap();
        let mut velocity = VelocityEnsemble::zeros(1);
        velocity.v1[0] = 0.05;

        let coeffs = Coefficients::evaluate(&state, &params);
        LeapfrogA.advance(&mut state, &mut velocity, &coeffs, params.step);

        // force(0) = 0 along S1, so the position moves by the full
        // trapezoidal velocity term ½L·(V + V*) with V* = V.
        let expected = 0.5 * params.step * (0.05 + 0.05);
        assert!((state.s1[0] - expected).abs() < 1e-12);
    }
}
