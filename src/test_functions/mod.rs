/// Module containing the parabola test function.
pub mod square;
pub use square::Square;

/// Module containing the Rastrigin test function.
pub mod rastrigin;
pub use rastrigin::Rastrigin;
