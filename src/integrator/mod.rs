//! Integrator Step: Four Interchangeable Schemes
//!
//! All schemes advance the ensemble by one discrete time unit from the
//! same coefficient evaluation and hand the result to the same feedback
//! stage; they differ only in how (S1, S2, S3[, V1, V2, V3]) are built
//! from force evaluations:
//!
//! | Scheme         | Velocity | Character                               |
//! |----------------|----------|-----------------------------------------|
//! | `DirectMap`    | no       | single-shot, cheapest, least stable     |
//! | `LeapfrogA`    | yes      | predictor-corrector, velocity form      |
//! | `LeapfrogB`    | yes      | predictor-corrector, derivative form    |
//! | `SemiImplicit` | yes      | symplectic-Euler style, soft-clamped    |
//!
//! The two leapfrog variants are deliberately distinct: they order the
//! position and velocity correctors differently and are not numerically
//! identical. Neither is preferred; both are kept as named strategies.

mod direct_map;
mod leapfrog_a;
mod leapfrog_b;
mod semi_implicit;

pub use direct_map::DirectMap;
pub use leapfrog_a::LeapfrogA;
pub use leapfrog_b::LeapfrogB;
pub use semi_implicit::SemiImplicit;

use crate::stokes::{Coefficients, StokesEnsemble, VelocityEnsemble};

/// One-step advance contract shared by every scheme.
///
/// `advance` consumes the coefficients evaluated at the current state
/// and moves (state, velocity) one step forward. `post_feedback` runs
/// after the feedback stage; only the semi-implicit scheme overrides it
/// (with its soft clamp).
pub trait IntegratorStep {
    /// Advance the ensemble by one discrete time unit.
    ///
    /// Schemes without velocity state leave `velocity` untouched.
    fn advance(
        &self,
        state: &mut StokesEnsemble,
        velocity: &mut VelocityEnsemble,
        coeffs: &Coefficients,
        step: f64,
    );

    /// Hook invoked after the feedback stage. No-op by default.
    fn post_feedback(&self, _state: &mut StokesEnsemble) {}
}

/// Integration scheme selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    DirectMap,
    LeapfrogA,
    LeapfrogB,
    SemiImplicit,
}

impl Scheme {
    /// All schemes, in comparison order.
    pub const ALL: [Scheme; 4] = [
        Scheme::DirectMap,
        Scheme::LeapfrogA,
        Scheme::LeapfrogB,
        Scheme::SemiImplicit,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Scheme::DirectMap => "direct-map",
            Scheme::LeapfrogA => "leapfrog-A",
            Scheme::LeapfrogB => "leapfrog-B",
            Scheme::SemiImplicit => "semi-implicit",
        }
    }

    /// Whether the scheme reads and updates the velocity ensemble.
    pub fn uses_velocity(&self) -> bool {
        !matches!(self, Scheme::DirectMap)
    }

    /// Strategy instance implementing this scheme.
    pub fn integrator(&self) -> &'static dyn IntegratorStep {
        match self {
            Scheme::DirectMap => &DirectMap,
            Scheme::LeapfrogA => &LeapfrogA,
            Scheme::LeapfrogB => &LeapfrogB,
            Scheme::SemiImplicit => &SemiImplicit,
        }
    }
}
