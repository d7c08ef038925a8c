/// [`Bound`] type for restricting the search to a closed interval.
pub mod bound;
/// [`ConfigError`] type for rejected configurations.
pub mod error;
/// [`Point`] type for defining a point in the search space.
pub mod point;
/// [`MinimizationSummary`] type for the result of the minimization.
pub mod summary;
/// Random sampling helpers and the warning channel.
pub mod utils;

pub use bound::Bound;
pub use error::ConfigError;
pub use point::Point;
pub use summary::MinimizationSummary;
