use crate::{algorithms::particles::Swarm, core::Point, traits::Status, Float};
use serde::{Deserialize, Serialize};

/// A status for particle swarm optimization.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct SwarmStatus {
    /// The global best position found by all particles
    pub gbest: Point,
    /// The global best value after each completed iteration
    pub best_value_history: Vec<Float>,
    /// A message containing information about the condition of the swarm
    pub message: String,
    /// The swarm
    pub swarm: Swarm,
    /// The number of function evaluations
    pub n_f_evals: usize,
}

impl SwarmStatus {
    /// Get the global best `(position, value)` found by the swarm.
    ///
    /// # Panics
    ///
    /// This method will panic if the swarm has not been initialized.
    pub fn get_best(&self) -> (Float, Float) {
        self.gbest.destructure()
    }
}

impl Status for SwarmStatus {
    fn reset(&mut self) {
        self.message = String::new();
        self.gbest = Point::default();
        self.best_value_history = vec![];
        self.swarm.particles = vec![];
        self.n_f_evals = 0;
    }
    fn message(&self) -> &str {
        &self.message
    }
    fn update_message(&mut self, message: &str) {
        self.message = message.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::particles::SwarmParticle;

    #[test]
    fn test_reset_clears_everything() {
        let mut status = SwarmStatus {
            gbest: Point {
                x: 1.0,
                fx: Some(1.0),
            },
            best_value_history: vec![2.0, 1.0],
            message: "Initialized".to_string(),
            swarm: Swarm {
                particles: vec![SwarmParticle::default(); 3],
            },
            n_f_evals: 9,
        };
        assert_eq!(status.get_best(), (1.0, 1.0));
        status.reset();
        assert!(status.gbest.fx.is_none());
        assert!(status.best_value_history.is_empty());
        assert!(status.swarm.is_empty());
        assert_eq!(status.n_f_evals, 0);
        assert_eq!(status.message(), "");
        status.update_message("Initialized");
        assert_eq!(status.message(), "Initialized");
    }
}
