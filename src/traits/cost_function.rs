use std::convert::Infallible;

use crate::Float;

/// A trait which describes a function $`f(\mathbb{R}) \to \mathbb{R}`$
///
/// Such a function may also take a `user_data: &mut U` field which can be used to pass external
/// arguments to the function during minimization, or can be modified by the function itself.
///
/// The `CostFunction` trait takes a generic `U` representing the type of user data/arguments
/// and a generic `E` representing any possible errors that might be returned during function
/// execution.
pub trait CostFunction<U = (), E = Infallible> {
    /// The evaluation of the function at a point `x` with the given arguments/user data.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. Users should implement this trait to return a
    /// [`std::convert::Infallible`] if the function evaluation never fails.
    fn evaluate(&self, x: Float, user_data: &mut U) -> Result<Float, E>;
}

/// A [`CostFunction`] built from a plain closure `Fn(Float) -> Float`.
///
/// The closure never fails, so the error type is [`Infallible`], and any user data is ignored.
#[derive(Clone, Copy)]
pub struct Objective<F>(pub F);

impl<F> Objective<F>
where
    F: Fn(Float) -> Float,
{
    /// Wrap a closure so it can be minimized.
    pub const fn new(func: F) -> Self {
        Self(func)
    }
}

impl<F, U> CostFunction<U, Infallible> for Objective<F>
where
    F: Fn(Float) -> Float,
{
    fn evaluate(&self, x: Float, _user_data: &mut U) -> Result<Float, Infallible> {
        Ok((self.0)(x))
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use approx::assert_relative_eq;

    use crate::{
        traits::{CostFunction, Objective},
        Float,
    };

    struct CountingFunction;
    impl CostFunction<usize, Infallible> for CountingFunction {
        fn evaluate(&self, x: Float, user_data: &mut usize) -> Result<Float, Infallible> {
            *user_data += 1;
            Ok(x.powi(2) + 1.0)
        }
    }

    #[test]
    fn test_cost_function() {
        let mut calls = 0;
        let y = CountingFunction.evaluate(2.0, &mut calls).unwrap();
        assert_eq!(y, 5.0);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_objective_closure() {
        let f = Objective::new(|x: Float| (x - 1.0).abs());
        assert_relative_eq!(f.evaluate(-0.5, &mut ()).unwrap(), 1.5);
        assert_relative_eq!(f.evaluate(1.0, &mut ()).unwrap(), 0.0);
    }
}
