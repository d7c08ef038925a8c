/// Particle-based optimization algorithms.
pub mod particles;
pub use particles::PSO;
