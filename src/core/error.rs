use thiserror::Error;

use crate::Float;

/// Errors raised while validating an optimizer configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("the swarm must contain at least one particle")]
    NoParticles,

    #[error("the maximum number of iterations must be at least one")]
    NoIterations,

    #[error("invalid search interval [{lower}, {upper}]: the lower bound must be strictly less than the upper bound")]
    InvalidBound { lower: Float, upper: Float },

    #[error("invalid search interval [{lower}, {upper}]: both bounds must be finite")]
    NonFiniteBound { lower: Float, upper: Float },

    #[error("coefficient `{name}` must be finite, got {value}")]
    NonFiniteCoefficient { name: &'static str, value: Float },
}
