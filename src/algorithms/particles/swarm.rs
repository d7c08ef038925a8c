use crate::{
    core::{utils::SampleFloat, Bound, Point},
    traits::CostFunction,
    Float,
};
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A swarm of particles used in particle swarm optimization.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Swarm {
    /// A list of the particles in the swarm
    pub particles: Vec<SwarmParticle>,
}

impl Swarm {
    /// Create `n_particles` particles using the given random number generator and bound, and
    /// evaluate the cost function at each starting position.
    ///
    /// All positions are drawn first (uniform in `bound`, in particle order), then all
    /// velocities (uniform in `[-1, 1)`), so a seeded generator always produces the same swarm.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. See [`CostFunction::evaluate`] for more
    /// information.
    pub fn initialize<U, E>(
        rng: &mut Rng,
        n_particles: usize,
        bound: &Bound,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
    ) -> Result<Self, E> {
        let positions: Vec<Float> = (0..n_particles).map(|_| bound.get_uniform(rng)).collect();
        let velocities: Vec<Float> = (0..n_particles).map(|_| rng.range(-1.0, 1.0)).collect();
        let particles = positions
            .into_iter()
            .zip(velocities)
            .map(|(position, velocity)| SwarmParticle::new(position, velocity, func, user_data))
            .collect::<Result<Vec<SwarmParticle>, E>>()?;
        Ok(Self { particles })
    }
    /// The number of particles in the swarm.
    pub fn len(&self) -> usize {
        self.particles.len()
    }
    /// Returns `true` if the swarm has no particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
    /// Index of the particle with the lowest personal best value. Ties go to the lowest index.
    pub fn best_index(&self) -> Option<usize> {
        self.particles
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(i, _)| i)
    }
    /// Evaluate every particle at its current position and record improved personal bests.
    /// Returns the number of cost function evaluations performed.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. See [`CostFunction::evaluate`] for more
    /// information.
    pub fn update_personal_bests<U, E>(
        &mut self,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
    ) -> Result<usize, E> {
        let mut n_evals = 0;
        for particle in &mut self.particles {
            if particle.update_best(func, user_data)? {
                n_evals += 1;
            }
        }
        Ok(n_evals)
    }
}

/// A particle with a position, velocity, and best known position
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Default)]
pub struct SwarmParticle {
    /// The position of the particle
    pub position: Point,
    /// The velocity of the particle
    pub velocity: Float,
    /// The best position of the particle (as measured by the minimum value of `fx`)
    pub best: Point,
}
impl SwarmParticle {
    /// Create a new particle with the given position and velocity, evaluating the cost function
    /// at its position. The starting position is also the particle's personal best.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. See [`CostFunction::evaluate`] for more
    /// information.
    pub fn new<U, E>(
        position: Float,
        velocity: Float,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
    ) -> Result<Self, E> {
        let mut position = Point::from(position);
        position.evaluate(func, user_data)?;
        Ok(Self {
            position,
            velocity,
            best: position,
        })
    }
    /// Compare the best position to another particle
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.best.total_cmp(&other.best)
    }
    /// Evaluate the particle at its current position and replace the personal best if the new
    /// value is strictly lower. Returns `true` if the cost function was called.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. See [`CostFunction::evaluate`] for more
    /// information.
    pub fn update_best<U, E>(
        &mut self,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
    ) -> Result<bool, E> {
        let evaluated = self.position.evaluate(func, user_data)?;
        if self.position.total_cmp(&self.best) == Ordering::Less {
            self.best = self.position;
        }
        Ok(evaluated)
    }
    /// Apply the velocity rule
    ///
    /// ```math
    /// v \leftarrow \omega v + c_1 r_1 (p - x) + c_2 r_2 (g - x)
    /// ```
    /// where `p` is this particle's best position and `g` the swarm's best position.
    pub fn update_velocity(
        &mut self,
        omega: Float,
        (c1, r1): (Float, Float),
        (c2, r2): (Float, Float),
        gbest: Float,
    ) {
        let x = self.position.x;
        self.velocity =
            omega * self.velocity + c1 * r1 * (self.best.x - x) + c2 * r2 * (gbest - x);
    }
    /// Move the particle along its velocity and saturate the new position to `bound`. The
    /// velocity is left untouched, even when the position ends up on the boundary.
    pub fn update_position(&mut self, bound: &Bound) {
        self.position
            .set_position(bound.clamp(self.position.x + self.velocity));
    }
}
