use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use fastrand::Rng;
use scalar_swarm::observers::ProgressObserver;
use scalar_swarm::prelude::*;
use scalar_swarm::test_functions::Square;
use serde::Serialize;

const CURVE_SAMPLES: usize = 400;

/// Everything needed to draw the convergence curve and the objective with the minimum found.
#[derive(Serialize)]
struct PlotData {
    iterations: Vec<usize>,
    best_value_history: Vec<Float>,
    curve_x: Vec<Float>,
    curve_fx: Vec<Float>,
    best_x: Float,
    best_fx: Float,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = PSOConfig::default();
    let (omega, c1, c2) = config.coefficients();
    let mut pso = PSO::new(config, Rng::new())?;

    println!("=== PARTICLE SWARM OPTIMIZATION ===");
    println!("Objective: f(x) = x²");
    println!("Particles: {}", pso.config().n_particles());
    println!("Max iterations: {}", pso.config().max_iterations());
    println!("Parameters - w: {omega}, c1: {c1}, c2: {c2}");
    println!("Search interval: {}", pso.bound());
    println!("{}", "-".repeat(50));

    let observers = Observers::empty().with_observer(ProgressObserver::default());
    let summary = pso.process(&Square, &mut (), observers)?;
    println!("{}", summary);

    let mut curve_fx = Vec::with_capacity(CURVE_SAMPLES);
    let curve_x = pso.bound().linspace(CURVE_SAMPLES);
    for &x in &curve_x {
        curve_fx.push(Square.evaluate(x, &mut ())?);
    }
    let plot = PlotData {
        iterations: (1..=summary.best_value_history.len()).collect(),
        best_value_history: summary.best_value_history.clone(),
        curve_x,
        curve_fx,
        best_x: summary.x,
        best_fx: summary.fx,
    };

    // Export the results to a Python .pkl file to visualize via matplotlib
    let mut writer = BufWriter::new(File::create(Path::new("pso_results.pkl"))?);
    serde_pickle::to_writer(&mut writer, &plot, Default::default())?;
    Ok(())
}
