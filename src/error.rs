//! Error taxonomy for simulation setup.
//!
//! Only configuration and shape problems are surfaced as errors, and only
//! at entry — never mid-loop. Near-zero intensities are silently floored
//! at [`crate::INTENSITY_FLOOR`], and unbounded growth under an unstable
//! step size is accepted physical behavior that shows up in the returned
//! trajectory rather than as an `Err`.

use thiserror::Error;

/// Failures detected while building or launching a simulation.
#[derive(Error, Debug)]
pub enum SimulationError {
    /// Ensemble with zero oscillators.
    #[error("ensemble must contain at least one oscillator")]
    EmptyEnsemble,

    /// Stokes component arrays of differing lengths.
    #[error("Stokes component lengths differ: s1={s1}, s2={s2}, s3={s3}")]
    ComponentLengthMismatch { s1: usize, s2: usize, s3: usize },

    /// Velocity ensemble does not match the state ensemble size.
    #[error("velocity ensemble holds {velocity} oscillators, state holds {state}")]
    VelocityLengthMismatch { velocity: usize, state: usize },

    /// A run of zero iterations was requested.
    #[error("n_iterations must be at least 1")]
    ZeroIterations,

    /// Parameter that must be a positive finite number.
    #[error("parameter {name} must be finite and positive, got {value}")]
    NonPositiveParameter { name: &'static str, value: f64 },

    /// Parameter that must be finite.
    #[error("parameter {name} must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },

    /// eta = 1 makes the cubic coefficient vanish and collapses the
    /// r2 weighting; nearby values remain legal.
    #[error("eta = 1 collapses the cubic coefficient to zero; use eta != 1")]
    DegenerateEta,
}

pub type SimulationResult<T> = Result<T, SimulationError>;
