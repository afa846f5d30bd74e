//! Simulation Module: Driver Loop, Trajectory Recording, Spin Census
//!
//! The driver advances the whole ensemble through N_iter strictly
//! sequential iterations (coefficients → propagation → feedback →
//! clamp hook) and records the normalized state into a write-once
//! history buffer owned by the run. A final-iteration sign census of
//! S1/S0 summarizes the bipolar outcome.

mod driver;
mod trajectory;

pub use driver::{run_simulation, NpoSimulation, SpinCensus};
pub use trajectory::TrajectoryHistory;
