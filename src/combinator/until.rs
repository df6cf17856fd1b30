//! Conditional Termination
//!
//! `Until` evaluates a series each tick until a condition reactor evaluates
//! to true. The condition is committed first; on the tick it fires, the
//! series is dropped before it can commit, so no further value is emitted,
//! and the reactor completes. A condition fault is stored as the current
//! value and surfaces through `eval`.

use tracing::trace;

use crate::maybe::Maybe;
use crate::reactor::{cached, Reactor};
use crate::state::State;

/// A reactor that commits its series until a condition is reached.
#[derive(Clone)]
pub struct Until<C, T: Reactor> {
    condition: C,
    series: Option<T>,
    value: Option<Maybe<T::Output>>,
    condition_state: State,
    state: State,
    previous_sequence: Option<u64>,
}

impl<C, T: Reactor> Until<C, T> {
    /// Evaluate `series` until `condition` evaluates to true.
    pub fn new(condition: C, series: T) -> Self {
        Self {
            condition,
            series: Some(series),
            value: None,
            condition_state: State::Empty,
            state: State::Empty,
            previous_sequence: None,
        }
    }
}

/// Shorthand for [`Until::new`].
pub fn until<C, T: Reactor>(condition: C, series: T) -> Until<C, T> {
    Until::new(condition, series)
}

impl<C, T> Reactor for Until<C, T>
where
    C: Reactor<Output = bool>,
    T: Reactor,
{
    type Output = T::Output;

    fn commit(&mut self, sequence: u64) -> State {
        if self.previous_sequence == Some(sequence) || self.state.is_complete() {
            return self.state;
        }
        if !self.condition_state.is_complete() {
            let condition_state = self.condition.commit(sequence);
            if condition_state.has_evaluation()
                || (self.condition_state.is_empty() && !condition_state.is_empty())
            {
                match self.condition.eval().get() {
                    Ok(true) => {
                        trace!(sequence, "condition fired; dropping series");
                        self.series = None;
                        self.state = if self.state.is_empty() {
                            State::CompleteEmpty
                        } else {
                            State::Complete
                        };
                    }
                    Ok(false) => {}
                    Err(fault) => {
                        self.value = Some(Maybe::fault(fault));
                    }
                }
            }
            self.condition_state = condition_state;
        }
        if let Some(series) = self.series.as_mut() {
            let series_state = series.commit(sequence);
            if series_state.has_evaluation()
                || (self.state.is_empty() && !series_state.is_empty())
            {
                self.value = Some(series.eval());
                self.state = State::Evaluated;
            } else if self.state.is_empty() {
                self.state = State::Empty;
            } else {
                self.state = State::None;
            }
            if series_state.is_complete() {
                self.state = self.state.combine(State::Complete);
            } else if self.condition_state.has_continuation() || series_state.has_continuation()
            {
                self.state = self.state.combine(State::Continue);
            }
        }
        self.previous_sequence = Some(sequence);
        self.state
    }

    fn eval(&self) -> Maybe<T::Output> {
        cached(&self.value)
    }
}
