//! Physical parameter set for the NPO iterative map.
//!
//! Six scalar constants shared by every oscillator and every iteration:
//!
//! - `chi` — second-order nonlinear susceptibility (cm/GW)
//! - `eta` — signal/pump walk-off ratio; eta = 1 is degenerate
//! - `step` — propagation length L; acts as the discrete map's step size
//! - `a`, `c` — per-axis round-trip loss factors
//! - `b` — feedback gain injected into the S1 axis
//!
//! The asymmetry (gain on S1 only, `a` != `c`) is what breaks the
//! rotational symmetry of the Stokes sphere and drives the bipolar
//! bifurcation of S1/S0.

use crate::error::{SimulationError, SimulationResult};

/// Immutable physical configuration of one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NpoParams {
    /// Nonlinear susceptibility χ (cm/GW).
    pub chi: f64,
    /// Walk-off ratio η. Must not equal 1.
    pub eta: f64,
    /// Propagation length L; the effective integration step.
    pub step: f64,
    /// Round-trip loss on S1 and S2.
    pub a: f64,
    /// Feedback gain on S1.
    pub b: f64,
    /// Round-trip loss on S3.
    pub c: f64,
}

impl Default for NpoParams {
    /// Stable small-step operating point.
    fn default() -> Self {
        Self {
            chi: 0.3,
            eta: 1.1,
            step: 0.05,
            a: 0.95,
            b: 0.01,
            c: 0.98,
        }
    }
}

impl NpoParams {
    /// Large-step operating point of the direct-map bifurcation experiment
    /// (L = 1.2). Stable under the direct map, but marginal for the
    /// velocity-based schemes.
    pub fn large_step() -> Self {
        Self {
            step: 1.2,
            ..Self::default()
        }
    }

    /// Check the configuration before a run starts.
    ///
    /// Rejects non-finite or non-positive `chi`/`eta`/`step`, non-finite
    /// loss/gain factors, and `eta == 1` exactly (the cubic coefficient
    /// beta vanishes and the r2 weighting degenerates).
    pub fn validate(&self) -> SimulationResult<()> {
        for (name, value) in [("chi", self.chi), ("eta", self.eta), ("step", self.step)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimulationError::NonPositiveParameter { name, value });
            }
        }
        for (name, value) in [("a", self.a), ("b", self.b), ("c", self.c)] {
            if !value.is_finite() {
                return Err(SimulationError::NonFiniteParameter { name, value });
            }
        }
        if self.eta == 1.0 {
            return Err(SimulationError::DegenerateEta);
        }
        Ok(())
    }
}
