//! Trajectory History: Write-Once Per-Axis Buffers
//!
//! One `[N, N_iter]` array per axis. Column k holds the state after
//! iteration k: the S0 buffer stores the raw (possibly soft-clamped)
//! intensity, the component buffers store floored ratios S_i/S0. Cells
//! are written exactly once and never mutated afterwards.

use ndarray::{Array1, Array2};

use crate::stokes::{StokesEnsemble, INTENSITY_FLOOR};

/// Full time history of one simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryHistory {
    /// Raw intensity per (oscillator, iteration).
    pub s0: Array2<f64>,
    /// Normalized S1/S0.
    pub s1: Array2<f64>,
    /// Normalized S2/S0.
    pub s2: Array2<f64>,
    /// Normalized S3/S0.
    pub s3: Array2<f64>,
}

impl TrajectoryHistory {
    pub fn zeros(n_oscillators: usize, n_iterations: usize) -> Self {
        let shape = (n_oscillators, n_iterations);
        Self {
            s0: Array2::zeros(shape),
            s1: Array2::zeros(shape),
            s2: Array2::zeros(shape),
            s3: Array2::zeros(shape),
        }
    }

    pub fn n_oscillators(&self) -> usize {
        self.s0.nrows()
    }

    pub fn n_iterations(&self) -> usize {
        self.s0.ncols()
    }

    /// Write column `iteration` from the post-feedback state. Each
    /// column is written once, immediately after its iteration.
    pub fn record(&mut self, iteration: usize, state: &StokesEnsemble) {
        let s0 = state.intensity();
        for i in 0..state.len() {
            let denom = s0[i] + INTENSITY_FLOOR;
            self.s0[[i, iteration]] = s0[i];
            self.s1[[i, iteration]] = state.s1[i] / denom;
            self.s2[[i, iteration]] = state.s2[i] / denom;
            self.s3[[i, iteration]] = state.s3[i] / denom;
        }
    }

    /// S1/S0 of every oscillator at the last recorded iteration.
    pub fn final_polarization(&self) -> Array1<f64> {
        self.s1.column(self.n_iterations() - 1).to_owned()
    }
}
