use std::{fmt::Debug, sync::Arc};

use parking_lot::RwLock;

use crate::{algorithms::particles::SwarmStatus, traits::Observer};

/// A debugging observer which prints out the step and the full status at every step of an
/// algorithm.
///
/// # Usage:
///
/// ```rust
/// use fastrand::Rng;
/// use scalar_swarm::prelude::*;
/// use scalar_swarm::observers::DebugObserver;
/// use scalar_swarm::test_functions::Square;
///
/// let mut pso = PSO::new(PSOConfig::default().with_max_iterations(2), Rng::with_seed(0)).unwrap();
/// let summary = pso
///     .process(&Square, &mut (), Observers::empty().with_observer(DebugObserver))
///     .unwrap();
/// // ^ This will print debug messages for each step
/// assert_eq!(summary.n_iterations, 2);
/// ```
pub struct DebugObserver;
impl<S: Debug, U> Observer<S, U> for DebugObserver {
    fn callback(&mut self, step: usize, status: &S, _user_data: &U) {
        println!("Step: {}\n{:#?}", step, status);
    }
}

/// A console progress reporter for particle swarms.
///
/// Prints the global best after the first iteration and after every `every`-th iteration:
///
/// ```text
/// Iteration  1: Best Value = 0.123456, Best Position = -0.351364
/// Iteration 10: Best Value = 0.000012, Best Position = 0.003464
/// ```
pub struct ProgressObserver {
    every: usize,
    lines: Vec<String>,
    echo: bool,
}
impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new(10)
    }
}
impl ProgressObserver {
    /// Report after the first iteration and then every `every` iterations. An interval of `0`
    /// only reports the first iteration.
    pub const fn new(every: usize) -> Self {
        Self {
            every,
            lines: Vec::new(),
            echo: true,
        }
    }
    /// Keep the report lines without printing them.
    pub fn quiet(mut self) -> Self {
        self.echo = false;
        self
    }
    /// Finalize the [`Observer`] by wrapping it in an [`Arc`] and [`RwLock`]
    pub fn build(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }
    /// Whether the given (1-based) iteration is reported.
    pub const fn reports(&self, step: usize) -> bool {
        step == 1 || (self.every != 0 && step % self.every == 0)
    }
    /// Every line reported so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}
impl<U> Observer<SwarmStatus, U> for ProgressObserver {
    fn callback(&mut self, step: usize, status: &SwarmStatus, _user_data: &U) {
        if !self.reports(step) {
            return;
        }
        let (x, fx) = status.get_best();
        let line = format!(
            "Iteration {:2}: Best Value = {:.6}, Best Position = {:.6}",
            step, fx, x
        );
        if self.echo {
            println!("{line}");
        }
        self.lines.push(line);
    }
}

#[cfg(test)]
mod tests {
    use fastrand::Rng;

    use super::*;
    use crate::{
        algorithms::particles::{PSOConfig, PSO},
        test_functions::Square,
        traits::{Algorithm, Observers},
    };

    #[test]
    fn test_reports_first_and_every_nth() {
        let progress = ProgressObserver::default();
        let reported: Vec<usize> = (1..=50).filter(|&s| progress.reports(s)).collect();
        assert_eq!(reported, vec![1, 10, 20, 30, 40, 50]);
        let only_first = ProgressObserver::new(0);
        assert!(only_first.reports(1));
        assert!(!only_first.reports(10));
    }

    #[test]
    fn test_progress_lines_follow_the_run() {
        let progress = ProgressObserver::default().quiet().build();
        let mut pso = PSO::new(PSOConfig::default(), Rng::with_seed(0)).unwrap();
        let summary = pso
            .process(
                &Square,
                &mut (),
                Observers::empty().with_observer(progress.clone()),
            )
            .unwrap();
        let progress = progress.read();
        assert_eq!(progress.lines().len(), 6);
        assert!(progress.lines()[0].starts_with("Iteration  1: Best Value = "));
        let last = &progress.lines()[5];
        assert!(last.starts_with("Iteration 50: "));
        assert!(last.contains(&format!("Best Value = {:.6}", summary.fx)));
        assert!(last.contains(&format!("Best Position = {:.6}", summary.x)));
    }
}
