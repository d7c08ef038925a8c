use std::convert::Infallible;

use crate::{traits::CostFunction, Float};

/// The parabola $`f(x) = x^2`$, with its only minimum at $`f(0) = 0`$.
pub struct Square;
impl CostFunction<(), Infallible> for Square {
    fn evaluate(&self, x: Float, _user_data: &mut ()) -> Result<Float, Infallible> {
        Ok(x.powi(2))
    }
}
