use crate::{core::utils::maybe_warn, traits::CostFunction, Float};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt::Display};

/// Describes a point in the search space that can be used in
/// [`Algorithm`](`crate::traits::Algorithm`)s.
#[derive(Clone, Copy, Default, Debug, Serialize, Deserialize)]
pub struct Point {
    /// the point's position
    pub x: Float,
    /// the point's evaluation (`None` if the point has not yet been evaluated)
    pub fx: Option<Float>,
}
impl Point {
    /// Convert the [`Point`] into a `(x, f(x))` tuple.
    ///
    /// # Panics
    ///
    /// This method will panic if the point is unevaluated.
    pub fn destructure(self) -> (Float, Float) {
        let fx = self.fx_checked();
        (self.x, fx)
    }
    /// Compare two points by their `fx` value. Unevaluated points compare greater than any
    /// evaluated one, and `NaN` values (of either sign) compare greater than any number. Other
    /// values compare numerically, so `-0.0` and `0.0` are equal.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (&self.fx, &other.fx) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(s), Some(o)) => match (s.is_nan(), o.is_nan()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => s.partial_cmp(o).unwrap_or(Ordering::Equal),
            },
        }
    }
    /// Move the point to a new position, resetting the evaluation of the point
    pub fn set_position(&mut self, x: Float) {
        self.x = x;
        self.fx = None;
    }
    /// Get the current evaluation of the point, if it has been evaluated
    ///
    /// # Panics
    ///
    /// This method will panic if the point is unevaluated.
    pub fn fx_checked(&self) -> Float {
        #[allow(clippy::expect_used)]
        self.fx.expect("Point value requested before evaluation")
    }
    /// Evaluate the given function at the point's coordinate and set the `fx` value to the result.
    /// Returns `true` if the function was actually called (points that already hold a value are
    /// not re-evaluated).
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. Users should implement this trait to return a
    /// `std::convert::Infallible` if the function evaluation never fails.
    pub fn evaluate<U, E>(
        &mut self,
        func: &dyn CostFunction<U, E>,
        user_data: &mut U,
    ) -> Result<bool, E> {
        if self.fx.is_some() {
            return Ok(false);
        }
        let fx = func.evaluate(self.x, user_data)?;
        if !fx.is_finite() {
            maybe_warn(&format!("objective returned {fx} at x = {}", self.x));
        }
        self.fx = Some(fx);
        Ok(true)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.fx {
            Some(fx) => write!(f, "x: {}, f(x): {}", self.x, fx),
            None => write!(f, "x: {}, f(x): unevaluated", self.x),
        }
    }
}

impl From<Float> for Point {
    fn from(value: Float) -> Self {
        Self { x: value, fx: None }
    }
}
impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.fx == other.fx
    }
}
impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.fx.partial_cmp(&other.fx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_functions::Square;
    use std::convert::Infallible;

    #[test]
    fn test_destructure_and_fx_checked() {
        let p = Point {
            x: 2.0,
            fx: Some(4.0),
        };
        let (x, fx) = p.destructure();
        assert_eq!(x, 2.0);
        assert_eq!(fx, 4.0);
        assert_eq!(p.fx_checked(), 4.0);
    }

    #[test]
    #[should_panic(expected = "Point value requested before evaluation")]
    fn test_fx_checked_panics_if_unevaluated() {
        let p = Point::from(1.0);
        let _ = p.fx_checked();
    }

    #[test]
    fn test_nan_never_orders_first() {
        let nan = Point {
            x: 0.0,
            fx: Some(-Float::NAN),
        };
        let big = Point {
            x: 1.0,
            fx: Some(Float::INFINITY),
        };
        assert_eq!(nan.total_cmp(&big), Ordering::Greater);
        assert_eq!(big.total_cmp(&nan), Ordering::Less);
        assert_eq!(nan.total_cmp(&Point::from(2.0)), Ordering::Less);
    }

    #[test]
    fn test_signed_zeros_compare_equal() {
        let neg = Point {
            x: -1.0,
            fx: Some(-0.0),
        };
        let pos = Point {
            x: 1.0,
            fx: Some(0.0),
        };
        assert_eq!(neg.total_cmp(&pos), Ordering::Equal);
        assert_eq!(pos.total_cmp(&neg), Ordering::Equal);
    }

    #[test]
    fn test_evaluate_sets_fx_once() {
        struct Counting;
        impl CostFunction<usize, Infallible> for Counting {
            fn evaluate(&self, x: Float, calls: &mut usize) -> Result<Float, Infallible> {
                *calls += 1;
                Ok(x * 3.0)
            }
        }
        let mut calls = 0;
        let mut p = Point::from(2.0);
        assert!(p.evaluate(&Counting, &mut calls).unwrap());
        assert_eq!(p.fx, Some(6.0));
        assert!(!p.evaluate(&Counting, &mut calls).unwrap());
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_total_cmp_and_partial_cmp() {
        let p1 = Point {
            x: 1.0,
            fx: Some(1.0),
        };
        let p2 = Point {
            x: 2.0,
            fx: Some(2.0),
        };
        assert_eq!(p1.total_cmp(&p2), Ordering::Less);
        assert_eq!(p1.partial_cmp(&p2), Some(Ordering::Less));
        assert_eq!(p1.total_cmp(&Point::from(0.0)), Ordering::Less);
        assert_eq!(Point::from(0.0).total_cmp(&Point::from(5.0)), Ordering::Equal);
    }

    #[test]
    fn test_set_position_resets_fx() {
        let mut p = Point::from(3.0);
        p.evaluate(&Square, &mut ()).unwrap();
        assert_eq!(p.fx, Some(9.0));
        p.set_position(-1.0);
        assert_eq!(p.x, -1.0);
        assert!(p.fx.is_none());
    }

    #[test]
    fn test_display() {
        let mut p = Point::from(1.5);
        assert!(format!("{}", p).contains("unevaluated"));
        p.evaluate(&Square, &mut ()).unwrap();
        let s = format!("{}", p);
        assert!(s.contains("x: 1.5"));
        assert!(s.contains("f(x): 2.25"));
    }
}
