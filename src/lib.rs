//! # NPO Spin Dynamics
//!
//! Discrete-time Stokes-vector dynamics of a population of uncoupled
//! nonlinear parametric oscillators (polarization-encoded "spins").
//!
//! ## Physical Model
//!
//! Each oscillator carries a Stokes vector (S1, S2, S3) with derived
//! intensity S0 = sqrt(S1² + S2² + S3²). One cavity round trip is a
//! nonlinear propagation step through a chi-(2) medium,
//!
//!   S_i ← S_i − L²·(alpha·S_i + beta·S_i³)
//!
//! (or a velocity-based variant of it), followed by an asymmetric
//! loss/gain feedback map that injects gain into S1 only:
//!
//!   S1 ← a·S1 + b·(S1/S0),  S2 ← a·S2,  S3 ← c·S3
//!
//! ## Spin Bifurcation
//!
//! Below threshold the normalized component S1/S0 hovers near zero;
//! once the S1 feedback gain outweighs the round-trip loss, each
//! oscillator pitchforks into one of two attractors near S1/S0 = ±1.
//! An ensemble of such oscillators realizes an Ising-like spin
//! register, and the final ± census is the quantity of interest.
//!
//! ## Integration Schemes
//!
//! The propagation step is numerically delicate (divergence for large
//! L, normalization drift, bifurcation sensitivity to step size), so
//! four schemes are provided behind one step contract: the direct
//! nonlinear map, two leapfrog predictor-corrector orderings, and a
//! soft-clamped semi-implicit scheme. See [`integrator`].
//!
//! ## Scope
//!
//! This crate is the numerical kernel only: it consumes an initial
//! ensemble and a parameter set, and produces a trajectory history.
//! Plotting and result formatting belong to external collaborators
//! (the binaries under `src/bin/` report summary numbers to stdout).
//!
//! ## References
//!
//! - Marandi, A., et al. (2014). Network of time-multiplexed optical
//!   parametric oscillators as a coherent Ising machine.
//!   Nature Photonics, 8, 937–942.
//! - Pierangeli, D., Marcucci, G., & Conti, C. (2019). Large-Scale
//!   Photonic Ising Machine by Spatial Light Modulation.
//!   Physical Review Letters, 122, 213902.

pub mod error;
pub mod integrator;
pub mod params;
pub mod simulation;
pub mod stokes;

// Re-exports from error
pub use error::{SimulationError, SimulationResult};

// Re-exports from params
pub use params::NpoParams;

// Re-exports from stokes
pub use stokes::{
    apply_feedback,
    Coefficients,
    StokesEnsemble,
    VelocityEnsemble,
    INTENSITY_FLOOR,
};

// Re-exports from integrator
pub use integrator::{
    DirectMap,
    IntegratorStep,
    LeapfrogA,
    LeapfrogB,
    Scheme,
    SemiImplicit,
};

// Re-exports from simulation
pub use simulation::{run_simulation, NpoSimulation, SpinCensus, TrajectoryHistory};
