//! Scheme Comparison: Four Integrators, Identical Initial Conditions
//!
//! Runs every integration scheme on clones of one randomly seeded
//! ensemble at the stable small step and reports, per scheme, the
//! final spin census, the mean |S1/S0|, and the largest intensity seen
//! anywhere in the trajectory (the divergence indicator). The schemes
//! agree on the qualitative outcome — bipolar clustering — while
//! differing in transient and in how hard they must be stabilized.

use rand::rng;

use npo_spin_dynamics::{run_simulation, NpoParams, Scheme, SpinCensus, StokesEnsemble};

fn main() {
    println!("═══════════════════════════════════════════════════════════════");
    println!("  NPO Integration Schemes — Side by Side");
    println!("═══════════════════════════════════════════════════════════════\n");

    let n_oscillators = 100;
    let n_iterations = 200;
    let params = NpoParams::default();

    println!("System Parameters:");
    println!("  N = {} oscillators, {} iterations", n_oscillators, n_iterations);
    println!(
        "  chi = {:.2}, eta = {:.2}, L = {:.2}, a = {:.2}, b = {:.3}, c = {:.2}\n",
        params.chi, params.eta, params.step, params.a, params.b, params.c
    );

    let initial = StokesEnsemble::biased_random(n_oscillators, 0.66, 0.02, &mut rng())
        .expect("valid initial ensemble");

    println!(
        "  {:<14} {:>4} {:>6} {:>14} {:>10}",
        "scheme", "up", "down", "mean |S1/S0|", "max S0"
    );
    for scheme in Scheme::ALL {
        let history = run_simulation(
            initial.clone(),
            None,
            params,
            n_iterations,
            scheme,
        )
        .expect("valid configuration");

        let polarization = history.final_polarization();
        let mean_abs: f64 =
            polarization.iter().map(|p| p.abs()).sum::<f64>() / n_oscillators as f64;
        let max_intensity = history.s0.iter().cloned().fold(0.0, f64::max);
        let census = SpinCensus::from_history(&history);

        println!(
            "  {:<14} {:>4} {:>6} {:>14.4} {:>10.4}",
            scheme.name(),
            census.spin_up,
            census.spin_down,
            mean_abs,
            max_intensity
        );
    }

    println!("\nAll schemes share the coefficient evaluator and feedback stage;");
    println!("only the propagation step differs.");
}
