use parking_lot::{Mutex, RwLock};
use std::{cell::RefCell, rc::Rc, sync::Arc};

/// A trait which holds a [`callback`](`Observer::callback`) function that is called after every
/// completed step of an [`Algorithm`](`crate::traits::Algorithm`).
///
/// Observers only get shared access to the [`Status`](crate::traits::Status), so they can report
/// or record the state of a run but can never change it.
pub trait Observer<S, U> {
    /// A function that is called at every step of an [`Algorithm`](`crate::traits::Algorithm`).
    /// `step` is the number of completed steps, starting at `1`.
    fn callback(&mut self, step: usize, status: &S, user_data: &U);
}
impl<T, S, U> Observer<S, U> for Rc<RefCell<T>>
where
    T: Observer<S, U>,
{
    fn callback(&mut self, step: usize, status: &S, user_data: &U) {
        self.borrow_mut().callback(step, status, user_data);
    }
}
impl<T, S, U> Observer<S, U> for Arc<RwLock<T>>
where
    T: Observer<S, U>,
{
    fn callback(&mut self, step: usize, status: &S, user_data: &U) {
        self.write().callback(step, status, user_data);
    }
}
impl<T, S, U> Observer<S, U> for Arc<Mutex<T>>
where
    T: Observer<S, U>,
{
    fn callback(&mut self, step: usize, status: &S, user_data: &U) {
        self.lock().callback(step, status, user_data);
    }
}

/// A set of [`Observer`]s which can be used as an input to
/// [`Algorithm::process`](crate::traits::Algorithm::process).
pub struct Observers<S, U>(Vec<Box<dyn Observer<S, U>>>);
impl<S, U> Observers<S, U> {
    /// Create an empty set of observers.
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Return the set of [`Observers`] with an additional [`Observer`] added.
    pub fn with_observer<O>(mut self, observer: O) -> Self
    where
        O: Observer<S, U> + 'static,
    {
        self.0.push(Box::new(observer));
        self
    }

    /// The number of observers in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set contains no observers.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
impl<S, U> Default for Observers<S, U> {
    fn default() -> Self {
        Self::empty()
    }
}
impl<S, U> Observer<S, U> for Observers<S, U> {
    fn callback(&mut self, step: usize, status: &S, user_data: &U) {
        for observer in &mut self.0 {
            observer.callback(step, status, user_data);
        }
    }
}
