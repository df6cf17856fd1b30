//! Single Evaluation
//!
//! `First` passes along its child's very first evaluation and then
//! completes. A child that completes without ever producing makes the
//! reactor complete quietly.

use crate::maybe::Maybe;
use crate::reactor::{cached, Reactor};
use crate::state::State;

/// A reactor that emits its child's first evaluation, then completes.
#[derive(Clone)]
pub struct First<A: Reactor> {
    series: A,
    value: Option<Maybe<A::Output>>,
    state: State,
    previous_sequence: Option<u64>,
}

impl<A: Reactor> First<A> {
    /// Take the first evaluation of `series`.
    pub fn new(series: A) -> Self {
        Self {
            series,
            value: None,
            state: State::None,
            previous_sequence: None,
        }
    }
}

/// Shorthand for [`First::new`].
pub fn first<A: Reactor>(series: A) -> First<A> {
    First::new(series)
}

impl<A: Reactor> Reactor for First<A> {
    type Output = A::Output;

    fn commit(&mut self, sequence: u64) -> State {
        if self.previous_sequence == Some(sequence) || self.state.is_complete() {
            return self.state;
        }
        let series_state = self.series.commit(sequence);
        self.state = if series_state.has_evaluation() {
            self.value = Some(self.series.eval());
            State::CompleteEvaluated
        } else if series_state.is_complete() {
            State::Complete
        } else if series_state.has_continuation() {
            State::Continue
        } else {
            State::None
        };
        self.previous_sequence = Some(sequence);
        self.state
    }

    fn eval(&self) -> Maybe<A::Output> {
        cached(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactor::{constant, none, Queue};

    #[test]
    fn takes_a_constant_immediately() {
        let mut reactor = first(constant(123));
        assert_eq!(reactor.commit(0), State::CompleteEvaluated);
        assert_eq!(reactor.eval().get().unwrap(), 123);
    }

    #[test]
    fn completes_quietly_over_an_empty_child() {
        let mut reactor = first(none::<i32>());
        assert_eq!(reactor.commit(0), State::Complete);
    }

    #[test]
    fn waits_for_the_first_queued_value() {
        let queue = Queue::new();
        let mut reactor = first(queue.clone());
        assert_eq!(reactor.commit(0), State::None);

        queue.push(10);
        assert_eq!(reactor.commit(1), State::CompleteEvaluated);
        assert_eq!(reactor.eval().get().unwrap(), 10);

        // Later values are ignored; the reactor is terminal.
        queue.push(11);
        assert_eq!(reactor.commit(2), State::CompleteEvaluated);
        assert_eq!(reactor.eval().get().unwrap(), 10);
    }
}
