//! Constant Reactor
//!
//! Evaluates to a single fixed value and completes immediately.

use crate::maybe::Maybe;
use crate::state::State;

use super::Reactor;

/// A reactor that evaluates to one value and is immediately terminal.
#[derive(Debug, Clone)]
pub struct Constant<T> {
    value: T,
}

impl<T> Constant<T> {
    /// Create a constant reactor evaluating to `value`.
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

/// Shorthand for [`Constant::new`].
pub fn constant<T>(value: T) -> Constant<T> {
    Constant::new(value)
}

impl<T: Clone> Reactor for Constant<T> {
    type Output = T;

    fn commit(&mut self, _sequence: u64) -> State {
        State::CompleteEvaluated
    }

    fn eval(&self) -> Maybe<T> {
        Maybe::value(self.value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_is_terminal_from_the_first_tick() {
        let mut reactor = constant(123);
        assert_eq!(reactor.commit(0), State::CompleteEvaluated);
        assert_eq!(reactor.eval().get().unwrap(), 123);
        assert_eq!(reactor.commit(1), State::CompleteEvaluated);
        assert_eq!(reactor.eval().get().unwrap(), 123);
    }
}
