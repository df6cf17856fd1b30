//! State Mirror
//!
//! A `StateReactor` evaluates each tick to another reactor's current
//! [`State`]. Lifted functions receive their arguments' *values*; when a
//! function also needs to know whether an argument has finished (as `range`
//! does to decide completion), the argument is passed twice: once directly
//! and once through a `StateReactor` observing the same shared reactor.

use crate::maybe::Maybe;
use crate::state::State;

use super::{cached, Reactor, SharedBox};

/// Mirrors the state of a shared reactor as a stream of values.
pub struct StateReactor<T> {
    reactor: SharedBox<T>,
    value: Option<State>,
    state: State,
    previous_sequence: Option<u64>,
}

impl<T> StateReactor<T> {
    /// Observe `reactor`, evaluating to its state after every tick.
    pub fn new(reactor: SharedBox<T>) -> Self {
        Self {
            reactor,
            value: None,
            state: State::Empty,
            previous_sequence: None,
        }
    }
}

impl<T: Clone> Reactor for StateReactor<T> {
    type Output = State;

    fn commit(&mut self, sequence: u64) -> State {
        if self.previous_sequence == Some(sequence) || self.state.is_complete() {
            return self.state;
        }
        let observed = self.reactor.commit(sequence);
        self.value = Some(observed);
        self.state = if observed.is_complete() {
            State::CompleteEvaluated
        } else if observed.has_continuation() {
            State::ContinueEvaluated
        } else {
            State::Evaluated
        };
        self.previous_sequence = Some(sequence);
        self.state
    }

    fn eval(&self) -> Maybe<State> {
        cached(&self.value.map(Maybe::value))
    }
}
