use crate::{
    core::{utils::SampleFloat, ConfigError},
    Float,
};
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A closed interval `[lower, upper]` with finite endpoints and `lower < upper`.
///
/// The only way to build a [`Bound`] is through [`Bound::new`] (or [`TryFrom`]), so every value
/// of this type describes a non-empty search space.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Bound {
    lower: Float,
    upper: Float,
}
impl Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}
impl TryFrom<(Float, Float)> for Bound {
    type Error = ConfigError;

    fn try_from(value: (Float, Float)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1)
    }
}

impl Bound {
    /// Create a new [`Bound`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonFiniteBound`] if either endpoint is infinite or `NaN`, and
    /// [`ConfigError::InvalidBound`] if `lower >= upper`.
    pub fn new(lower: Float, upper: Float) -> Result<Self, ConfigError> {
        if !(lower.is_finite() && upper.is_finite()) {
            return Err(ConfigError::NonFiniteBound { lower, upper });
        }
        if lower >= upper {
            return Err(ConfigError::InvalidBound { lower, upper });
        }
        Ok(Self { lower, upper })
    }
    /// Returns the lower end of the interval.
    pub const fn lower(&self) -> Float {
        self.lower
    }
    /// Returns the upper end of the interval.
    pub const fn upper(&self) -> Float {
        self.upper
    }
    /// Returns the width `upper - lower` of the interval.
    pub fn width(&self) -> Float {
        self.upper - self.lower
    }
    /// Checks whether the given `value` lies inside the interval (endpoints included).
    pub fn contains(&self, value: Float) -> bool {
        value >= self.lower && value <= self.upper
    }
    /// Saturates `value` to the nearest point of the interval.
    ///
    /// `NaN` is passed through unchanged.
    pub fn clamp(&self, value: Float) -> Float {
        value.clamp(self.lower, self.upper)
    }
    /// Checks if the given value sits exactly on one of the endpoints.
    pub fn at_bound(&self, value: Float) -> bool {
        value == self.lower || value == self.upper
    }
    /// Get a value in the uniform distribution between `lower` and `upper`.
    pub fn get_uniform(&self, rng: &mut Rng) -> Float {
        rng.range(self.lower, self.upper)
    }
    /// Returns `n` evenly spaced values from `lower` to `upper` (inclusive).
    ///
    /// A request for a single sample returns the midpoint.
    pub fn linspace(&self, n: usize) -> Vec<Float> {
        match n {
            0 => Vec::new(),
            1 => vec![self.lower + 0.5 * self.width()],
            _ => {
                let step = self.width() / (n - 1) as Float;
                (0..n)
                    .map(|i| {
                        if i == n - 1 {
                            self.upper
                        } else {
                            self.lower + step * i as Float
                        }
                    })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_rejects_bad_intervals() {
        assert_eq!(
            Bound::new(1.0, 1.0),
            Err(ConfigError::InvalidBound {
                lower: 1.0,
                upper: 1.0
            })
        );
        assert_eq!(
            Bound::new(2.0, -2.0),
            Err(ConfigError::InvalidBound {
                lower: 2.0,
                upper: -2.0
            })
        );
        assert!(matches!(
            Bound::new(Float::NEG_INFINITY, 0.0),
            Err(ConfigError::NonFiniteBound { .. })
        ));
        assert!(matches!(
            Bound::try_from((0.0, Float::NAN)),
            Err(ConfigError::NonFiniteBound { .. })
        ));
    }

    #[test]
    fn test_clamp_saturates() {
        let b = Bound::new(-10.0, 10.0).unwrap();
        assert_eq!(b.clamp(12.5), 10.0);
        assert_eq!(b.clamp(-100.0), -10.0);
        assert_eq!(b.clamp(3.0), 3.0);
        assert!(b.clamp(Float::NAN).is_nan());
        assert!(b.at_bound(b.clamp(1e9)));
    }

    #[test]
    fn test_contains() {
        let b = Bound::new(-1.0, 1.0).unwrap();
        assert!(b.contains(-1.0));
        assert!(b.contains(1.0));
        assert!(b.contains(0.0));
        assert!(!b.contains(1.0001));
        assert!(!b.contains(Float::NAN));
    }

    #[test]
    fn test_get_uniform_stays_inside() {
        let b = Bound::new(-3.0, 5.0).unwrap();
        let mut rng = Rng::with_seed(0);
        for _ in 0..1000 {
            assert!(b.contains(b.get_uniform(&mut rng)));
        }
    }

    #[test]
    fn test_linspace() {
        let b = Bound::new(-1.0, 1.0).unwrap();
        assert!(b.linspace(0).is_empty());
        assert_eq!(b.linspace(1), vec![0.0]);
        let xs = b.linspace(5);
        assert_eq!(xs.len(), 5);
        assert_eq!(xs[0], -1.0);
        assert_relative_eq!(xs[2], 0.0);
        assert_eq!(xs[4], 1.0);
    }

    #[test]
    fn test_display() {
        let b = Bound::new(-10.0, 10.0).unwrap();
        assert_eq!(format!("{}", b), "[-10, 10]");
    }
}
