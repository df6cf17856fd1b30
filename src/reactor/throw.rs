//! Throwing Reactor
//!
//! Evaluates to a fault and completes immediately. The fault surfaces as an
//! error when the driver calls `eval().get()`.

use std::error::Error;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::maybe::{Fault, Maybe};
use crate::state::State;

use super::Reactor;

/// A reactor whose single evaluation is a captured fault.
#[derive(Debug, Clone)]
pub struct Throw<T> {
    fault: Fault,
    marker: PhantomData<fn() -> T>,
}

impl<T> Throw<T> {
    /// Create a throwing reactor from an error.
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            fault: Arc::new(error),
            marker: PhantomData,
        }
    }

    /// Create a throwing reactor from an existing fault handle.
    pub fn from_fault(fault: Fault) -> Self {
        Self {
            fault,
            marker: PhantomData,
        }
    }
}

/// Shorthand for [`Throw::new`].
pub fn throw<T, E>(error: E) -> Throw<T>
where
    E: Error + Send + Sync + 'static,
{
    Throw::new(error)
}

impl<T: Clone> Reactor for Throw<T> {
    type Output = T;

    fn commit(&mut self, _sequence: u64) -> State {
        State::CompleteEvaluated
    }

    fn eval(&self) -> Maybe<T> {
        Maybe::fault(Arc::clone(&self.fault))
    }
}
