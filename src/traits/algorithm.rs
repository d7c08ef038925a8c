use std::convert::Infallible;

use crate::traits::{CostFunction, Observer, Observers, Status};

/// A trait representing a minimization algorithm.
///
/// This trait is implemented for the algorithms found in the [`algorithms`](crate::algorithms)
/// module, and contains all the methods needed to drive a run with
/// [`Algorithm::process`].
pub trait Algorithm<P, S: Status, U = (), E = Infallible>
where
    P: CostFunction<U, E>,
{
    /// A type which holds a summary of the algorithm's ending state.
    type Summary;

    /// Any setup work done before the main steps of the algorithm should be done here.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. See [`CostFunction::evaluate`] for more
    /// information.
    fn initialize(&mut self, problem: &P, status: &mut S, user_data: &mut U) -> Result<(), E>;

    /// The main "step" of an algorithm, which is repeated until
    /// [`Algorithm::check_for_termination`] returns `true`.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if the evaluation fails. See [`CostFunction::evaluate`] for more
    /// information.
    fn step(
        &mut self,
        current_step: usize,
        problem: &P,
        status: &mut S,
        user_data: &mut U,
    ) -> Result<(), E>;

    /// Checks whether the run is finished after `current_step` completed steps. Implementors may
    /// record the reason in the [`Status`] message.
    fn check_for_termination(&self, current_step: usize, status: &mut S) -> bool;

    /// Generates a new [`Algorithm::Summary`] from the current state of the [`Algorithm`], which
    /// can be displayed or used elsewhere.
    ///
    /// # Errors
    ///
    /// Returns an `Err(E)` if any internal evaluation fails while creating the
    /// [`Algorithm::Summary`]. See [`CostFunction::evaluate`] for more information.
    fn summarize(
        &self,
        current_step: usize,
        problem: &P,
        status: &S,
        user_data: &U,
    ) -> Result<Self::Summary, E>;

    /// Run the algorithm to completion.
    ///
    /// This method first runs [`Algorithm::initialize`], then runs [`Algorithm::step`] until
    /// [`Algorithm::check_for_termination`] returns `true`. Each step is followed by a call to
    /// every [`Observer`] in `observers`. Finally [`Algorithm::summarize`] creates the summary of
    /// the run.
    ///
    /// # Errors
    ///
    /// Returns the first `Err(E)` produced by the [`CostFunction`]; the run is abandoned at that
    /// point.
    fn process(
        &mut self,
        problem: &P,
        user_data: &mut U,
        mut observers: Observers<S, U>,
    ) -> Result<Self::Summary, E> {
        let mut status = S::default();
        self.initialize(problem, &mut status, user_data)?;
        let mut current_step = 0;
        while !self.check_for_termination(current_step, &mut status) {
            self.step(current_step, problem, &mut status, user_data)?;
            current_step += 1;
            observers.callback(current_step, &status, user_data);
        }
        self.summarize(current_step, problem, &status, user_data)
    }
}
