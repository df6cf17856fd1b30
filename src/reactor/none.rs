//! Empty Reactor
//!
//! Never produces a value; terminal from the first tick.

use std::marker::PhantomData;

use crate::maybe::Maybe;
use crate::state::State;

use super::{unevaluated, Reactor};

/// A reactor that completes without ever producing a value.
#[derive(Debug, Clone)]
pub struct NoneReactor<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T> NoneReactor<T> {
    /// Create an empty reactor.
    pub fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<T> Default for NoneReactor<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for [`NoneReactor::new`].
pub fn none<T>() -> NoneReactor<T> {
    NoneReactor::new()
}

impl<T: Clone> Reactor for NoneReactor<T> {
    type Output = T;

    fn commit(&mut self, _sequence: u64) -> State {
        State::CompleteEmpty
    }

    fn eval(&self) -> Maybe<T> {
        unevaluated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalError;

    #[test]
    fn none_is_complete_empty() {
        let mut reactor = none::<i32>();
        assert_eq!(reactor.commit(0), State::CompleteEmpty);
        assert_eq!(reactor.commit(1), State::CompleteEmpty);
    }

    #[test]
    fn none_eval_is_the_unevaluated_fault() {
        let reactor = none::<i32>();
        let fault = reactor.eval().get().unwrap_err();
        assert!(fault.is::<EvalError>());
    }
}
