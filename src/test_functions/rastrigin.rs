use crate::{traits::CostFunction, Float, PI};
use std::convert::Infallible;

/// The one-dimensional Rastrigin function, which has a single global minimum at $`f(0) = 0`$ but
/// a local minimum near every integer.
///
/// ```math
/// f(x) = 10 + x^2 - 10\cos(2\pi x)
/// ```
pub struct Rastrigin;
impl CostFunction<(), Infallible> for Rastrigin {
    fn evaluate(&self, x: Float, _user_data: &mut ()) -> Result<Float, Infallible> {
        #[allow(clippy::suboptimal_flops)]
        Ok(10.0 + x.powi(2) - 10.0 * Float::cos(2.0 * PI * x))
    }
}
