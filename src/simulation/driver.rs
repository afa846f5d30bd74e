//! Driver Loop: Sequential Iteration over the Ensemble
//!
//! Each iteration is fully synchronous: coefficients are evaluated from
//! the finalized state of the previous iteration, the selected scheme
//! advances every oscillator, the shared feedback stage closes the
//! round trip, and the scheme's post-feedback hook (the semi-implicit
//! soft clamp) runs last. Oscillators are mutually independent within
//! an iteration; ordering is only required across iterations.
//!
//! The driver owns the history buffer for the duration of a run and
//! hands it back to the caller, so independent simulations can run
//! concurrently without shared state.

use ndarray::Array1;

use crate::error::{SimulationError, SimulationResult};
use crate::integrator::Scheme;
use crate::params::NpoParams;
use crate::simulation::TrajectoryHistory;
use crate::stokes::{apply_feedback, Coefficients, StokesEnsemble, VelocityEnsemble};

/// One configured simulation: parameters, scheme, and live state.
pub struct NpoSimulation {
    params: NpoParams,
    scheme: Scheme,
    state: StokesEnsemble,
    velocity: VelocityEnsemble,
    iteration: usize,
}

impl NpoSimulation {
    /// Build a simulation with zero initial velocities.
    ///
    /// The caller provides the initial state already normalized to
    /// unit intensity (as
    /// [`StokesEnsemble::biased_random`] does).
    pub fn new(
        initial: StokesEnsemble,
        params: NpoParams,
        scheme: Scheme,
    ) -> SimulationResult<Self> {
        let velocity = VelocityEnsemble::zeros(initial.len());
        Self::with_velocity(initial, velocity, params, scheme)
    }

    /// Build a simulation with explicit initial velocities.
    pub fn with_velocity(
        initial: StokesEnsemble,
        velocity: VelocityEnsemble,
        params: NpoParams,
        scheme: Scheme,
    ) -> SimulationResult<Self> {
        params.validate()?;
        if initial.is_empty() {
            return Err(SimulationError::EmptyEnsemble);
        }
        if velocity.len() != initial.len() {
            return Err(SimulationError::VelocityLengthMismatch {
                velocity: velocity.len(),
                state: initial.len(),
            });
        }
        Ok(Self {
            params,
            scheme,
            state: initial,
            velocity,
            iteration: 0,
        })
    }

    /// Advance the whole ensemble by one discrete time unit.
    pub fn step(&mut self) {
        let coeffs = Coefficients::evaluate(&self.state, &self.params);
        let integrator = self.scheme.integrator();

        integrator.advance(
            &mut self.state,
            &mut self.velocity,
            &coeffs,
            self.params.step,
        );
        apply_feedback(&mut self.state, &self.params);
        integrator.post_feedback(&mut self.state);

        self.iteration += 1;
    }

    /// Run exactly `n_iterations` steps, recording each post-feedback
    /// state. No early termination: the loop runs to completion whether
    /// or not the ensemble has converged.
    pub fn run(&mut self, n_iterations: usize) -> SimulationResult<TrajectoryHistory> {
        if n_iterations == 0 {
            return Err(SimulationError::ZeroIterations);
        }

        let mut history = TrajectoryHistory::zeros(self.state.len(), n_iterations);
        for k in 0..n_iterations {
            self.step();
            history.record(k, &self.state);
        }
        Ok(history)
    }

    pub fn state(&self) -> &StokesEnsemble {
        &self.state
    }

    pub fn velocity(&self) -> &VelocityEnsemble {
        &self.velocity
    }

    pub fn params(&self) -> &NpoParams {
        &self.params
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Iterations completed so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Sign census of the current state.
    pub fn census(&self) -> SpinCensus {
        SpinCensus::from_polarization(&self.state.polarization())
    }
}

/// Single-call entry point: advance `initial` through `n_iterations`
/// steps of `scheme` and return the full trajectory.
pub fn run_simulation(
    initial: StokesEnsemble,
    initial_velocity: Option<VelocityEnsemble>,
    params: NpoParams,
    n_iterations: usize,
    scheme: Scheme,
) -> SimulationResult<TrajectoryHistory> {
    let mut simulation = match initial_velocity {
        Some(velocity) => NpoSimulation::with_velocity(initial, velocity, params, scheme)?,
        None => NpoSimulation::new(initial, params, scheme)?,
    };
    simulation.run(n_iterations)
}

/// Final-iteration classification of each oscillator's S1/S0 sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinCensus {
    /// Oscillators with S1/S0 > 0.
    pub spin_up: usize,
    /// Oscillators with S1/S0 < 0.
    pub spin_down: usize,
    /// Oscillators exactly at zero (or non-finite).
    pub unpolarized: usize,
}

impl SpinCensus {
    pub fn from_polarization(polarization: &Array1<f64>) -> Self {
        let mut census = Self {
            spin_up: 0,
            spin_down: 0,
            unpolarized: 0,
        };
        for &p in polarization.iter() {
            if p > 0.0 {
                census.spin_up += 1;
            } else if p < 0.0 {
                census.spin_down += 1;
            } else {
                census.unpolarized += 1;
            }
        }
        census
    }

    pub fn from_history(history: &TrajectoryHistory) -> Self {
        Self::from_polarization(&history.final_polarization())
    }

    pub fn total(&self) -> usize {
        self.spin_up + self.spin_down + self.unpolarized
    }

    /// Fraction of oscillators in the larger spin cluster.
    pub fn majority_fraction(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        self.spin_up.max(self.spin_down) as f64 / self.total() as f64
    }
}
