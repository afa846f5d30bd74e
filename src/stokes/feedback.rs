//! Feedback / Dissipation Stage
//!
//! After propagation, each oscillator passes through the asymmetric
//! round-trip map
//!
//!   f   = S1L / S0L          (S0L = floored norm of the propagated state)
//!   S1' = a·S1L + b·f
//!   S2' = a·S2L
//!   S3' = c·S3L
//!
//! S1 is the only axis that receives gain, and S3 decays at its own
//! rate. This asymmetry is what turns the near-zero S1/S0 component
//! into a bipolar ±1 spin over many round trips. Every integration
//! scheme shares this stage; velocities are left untouched by it.

use crate::params::NpoParams;
use crate::stokes::StokesEnsemble;

/// Apply one round of loss and self-feedback in place.
pub fn apply_feedback(state: &mut StokesEnsemble, params: &NpoParams) {
    let s0 = state.floored_intensity();
    let f = &state.s1 / &s0;

    state.s1 = &state.s1 * params.a + f * params.b;
    state.s2 = &state.s2 * params.a;
    state.s3 = &state.s3 * params.c;
}
