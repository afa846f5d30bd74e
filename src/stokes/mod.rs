//! Stokes-Vector State Module
//!
//! Per-oscillator polarization state and the two stages every
//! integration scheme shares:
//!
//! - **Ensemble state**: struct-of-arrays (S1, S2, S3) components with
//!   the intensity S0 always derived, never stored
//! - **Coefficient evaluator**: the nonlinear coupling coefficients
//!   (alpha, beta) recomputed from the current state each iteration
//! - **Feedback stage**: the asymmetric loss/gain map that closes the
//!   cavity round trip and drives the spin bifurcation

mod coefficients;
mod ensemble;
mod feedback;

pub use coefficients::Coefficients;
pub use ensemble::{StokesEnsemble, VelocityEnsemble, INTENSITY_FLOOR};
pub use feedback::apply_feedback;
