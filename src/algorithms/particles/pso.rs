use std::cmp::Ordering;

use fastrand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    algorithms::particles::{Swarm, SwarmStatus},
    core::{utils::SampleFloat, Bound, ConfigError, MinimizationSummary},
    traits::{Algorithm, CostFunction, Status},
    Float,
};

/// The configuration struct for the [`PSO`] algorithm.
///
/// The defaults are 10 particles, 50 iterations, $`\omega = 0.5`$, $`c_1 = c_2 = 1.5`$ and the
/// search interval $`[-10, 10]`$. Nothing is checked until the configuration is handed to
/// [`PSO::new`] (or [`PSOConfig::validate`] is called).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PSOConfig {
    n_particles: usize,
    max_iterations: usize,
    omega: Float,
    c1: Float,
    c2: Float,
    x_min: Float,
    x_max: Float,
}
impl PSOConfig {
    /// Sets the number of particles in the swarm (default = `10`).
    pub const fn with_n_particles(mut self, value: usize) -> Self {
        self.n_particles = value;
        self
    }
    /// Sets the number of iterations to run (default = `50`).
    pub const fn with_max_iterations(mut self, value: usize) -> Self {
        self.max_iterations = value;
        self
    }
    /// Sets the inertial weight $`\omega`$ (default = `0.5`).
    pub const fn with_omega(mut self, value: Float) -> Self {
        self.omega = value;
        self
    }
    /// Sets the cognitive weight $`c_1`$ which controls the particle's tendency
    /// to move towards its personal best (default = `1.5`).
    pub const fn with_c1(mut self, value: Float) -> Self {
        self.c1 = value;
        self
    }
    /// Sets the social weight $`c_2`$ which controls the particle's tendency
    /// to move towards the global best (default = `1.5`).
    pub const fn with_c2(mut self, value: Float) -> Self {
        self.c2 = value;
        self
    }
    /// Sets the search interval $`[x_\text{min}, x_\text{max}]`$ (default = `[-10, 10]`).
    pub const fn with_bound(mut self, x_min: Float, x_max: Float) -> Self {
        self.x_min = x_min;
        self.x_max = x_max;
        self
    }
    /// The number of particles in the swarm.
    pub const fn n_particles(&self) -> usize {
        self.n_particles
    }
    /// The number of iterations to run.
    pub const fn max_iterations(&self) -> usize {
        self.max_iterations
    }
    /// The `(omega, c1, c2)` coefficients.
    pub const fn coefficients(&self) -> (Float, Float, Float) {
        (self.omega, self.c1, self.c2)
    }
    /// Check the configuration and return the validated search interval.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first problem found: an empty swarm, zero
    /// iterations, a non-finite coefficient, or an invalid interval.
    pub fn validate(&self) -> Result<Bound, ConfigError> {
        if self.n_particles == 0 {
            return Err(ConfigError::NoParticles);
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::NoIterations);
        }
        for (name, value) in [("omega", self.omega), ("c1", self.c1), ("c2", self.c2)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteCoefficient { name, value });
            }
        }
        Bound::new(self.x_min, self.x_max)
    }
}
impl Default for PSOConfig {
    fn default() -> Self {
        Self {
            n_particles: 10,
            max_iterations: 50,
            omega: 0.5,
            c1: 1.5,
            c2: 1.5,
            x_min: -10.0,
            x_max: 10.0,
        }
    }
}

/// Particle Swarm Optimizer
///
/// The PSO algorithm involves an ensemble of particles which are aware of the best position found
/// by the whole swarm. Each iteration first evaluates every particle and records improved personal
/// bests, then updates the global best, and finally moves every particle with
///
/// ```math
/// v_i^{t+1} = \omega v_i^t + c_1 r_{1,i}^{t+1}(p^t_i - x^t_i) + c_2 r_{2,i}^{t+1}(g^t - x^t_i)
/// ```
/// ```math
/// x_i^{t+1} = \text{clamp}(x_i^t + v_i^{t+1}, x_\text{min}, x_\text{max})
/// ```
/// where $`r_1`$ and $`r_2`$ are fresh uniform random numbers in $`[0,1)`$ for every particle and
/// iteration, $`\omega`$ is an inertial weight parameter, $`c_1`$ and $`c_2`$ are cognitive and
/// social weights respectively, $`p_i^t`$ is the particle's personal best position, and $`g^t`$ is
/// the swarm's best position. The velocity itself is never clamped. See [^1] for more
/// information.
///
/// The global best is only refreshed from personal bests at the start of an iteration, so the
/// value recorded for iteration `t` does not yet account for the moves made during iteration `t`.
///
/// [^1]: [Houssein, E. H., Gad, A. G., Hussain, K., & Suganthan, P. N. (2021). Major Advances in Particle Swarm Optimization: Theory, Analysis, and Application. In Swarm and Evolutionary Computation (Vol. 63, p. 100868). Elsevier BV.](https://doi.org/10.1016/j.swevo.2021.100868)
#[derive(Clone, Debug)]
pub struct PSO {
    config: PSOConfig,
    bound: Bound,
    rng: Rng,
}

impl PSO {
    /// Construct a new particle swarm optimizer which draws all of its random numbers from `rng`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid, see [`PSOConfig::validate`].
    pub fn new(config: PSOConfig, rng: Rng) -> Result<Self, ConfigError> {
        let bound = config.validate()?;
        Ok(Self { config, bound, rng })
    }
    /// The configuration used by this optimizer.
    pub const fn config(&self) -> &PSOConfig {
        &self.config
    }
    /// The validated search interval.
    pub const fn bound(&self) -> &Bound {
        &self.bound
    }
    fn update_global_best(status: &mut SwarmStatus) {
        if let Some(i) = status.swarm.best_index() {
            let candidate = status.swarm.particles[i].best;
            if candidate.total_cmp(&status.gbest) == Ordering::Less {
                status.gbest = candidate;
            }
        }
    }
    fn move_particles(&mut self, status: &mut SwarmStatus) {
        let (omega, c1, c2) = self.config.coefficients();
        let gbest = status.gbest.x;
        for particle in &mut status.swarm.particles {
            let r1 = self.rng.float();
            let r2 = self.rng.float();
            particle.update_velocity(omega, (c1, r1), (c2, r2), gbest);
            particle.update_position(&self.bound);
        }
    }
}

impl<P, U, E> Algorithm<P, SwarmStatus, U, E> for PSO
where
    P: CostFunction<U, E>,
{
    type Summary = MinimizationSummary;

    fn initialize(
        &mut self,
        problem: &P,
        status: &mut SwarmStatus,
        user_data: &mut U,
    ) -> Result<(), E> {
        status.reset();
        status.swarm = Swarm::initialize(
            &mut self.rng,
            self.config.n_particles,
            &self.bound,
            problem,
            user_data,
        )?;
        status.n_f_evals = status.swarm.len();
        if let Some(i) = status.swarm.best_index() {
            status.gbest = status.swarm.particles[i].best;
        }
        status.update_message("Initialized");
        Ok(())
    }

    fn step(
        &mut self,
        _current_step: usize,
        problem: &P,
        status: &mut SwarmStatus,
        user_data: &mut U,
    ) -> Result<(), E> {
        status.n_f_evals += status.swarm.update_personal_bests(problem, user_data)?;
        Self::update_global_best(status);
        status.best_value_history.push(status.gbest.fx_checked());
        self.move_particles(status);
        Ok(())
    }

    fn check_for_termination(&self, current_step: usize, status: &mut SwarmStatus) -> bool {
        if current_step >= self.config.max_iterations {
            status.update_message(&format!(
                "Maximum number of iterations reached ({})",
                self.config.max_iterations
            ));
            return true;
        }
        false
    }

    fn summarize(
        &self,
        current_step: usize,
        _problem: &P,
        status: &SwarmStatus,
        _user_data: &U,
    ) -> Result<Self::Summary, E> {
        let (x, fx) = status.get_best();
        Ok(MinimizationSummary {
            bound: self.bound,
            parameter_name: None,
            message: status.message.clone(),
            x,
            fx,
            best_value_history: status.best_value_history.clone(),
            n_particles: status.swarm.len(),
            n_iterations: current_step,
            cost_evals: status.n_f_evals,
        })
    }
}
