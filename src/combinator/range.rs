//! Counting Reactor
//!
//! `range(start, stop, step)` produces `start, start + step, ...` while the
//! value is below `stop`. All three bounds are themselves reactors and may
//! move while the range is running; the next value is always
//! `max(start, previous + step)`, so a start that rises mid-flight ratchets
//! the sequence upward. The range completes once start and stop have
//! settled (both complete) and the next value would reach stop.
//!
//! Internally this is a single lifted function over seven arguments: each
//! bound is passed twice: the value itself and a [`StateReactor`] mirror of
//! it, sharing one underlying reactor, plus a [`perpetual`] ticker that
//! keeps the function firing every tick.

use std::ops::Add;

use crate::maybe::Maybe;
use crate::reactor::{perpetual, Reactor, SharedBox, StateReactor};
use crate::state::State;

use super::lift::{lift, FunctionEvaluation};

/// Counts from `start` toward `stop` (exclusive) by `step`.
pub fn range<S, E, P>(start: S, stop: E, step: P) -> impl Reactor<Output = S::Output>
where
    S: Reactor + Send + Sync + 'static,
    E: Reactor<Output = S::Output> + Send + Sync + 'static,
    P: Reactor<Output = S::Output> + Send + Sync + 'static,
    S::Output: Clone + PartialOrd + Add<Output = S::Output> + Send + Sync + 'static,
{
    let start = SharedBox::new(start);
    let start_updates = StateReactor::new(start.clone());
    let stop = SharedBox::new(stop);
    let stop_updates = StateReactor::new(stop.clone());
    let step = SharedBox::new(step);
    let step_updates = StateReactor::new(step.clone());
    let mut previous: Option<S::Output> = None;
    lift(
        move |start: &Maybe<S::Output>,
              start_state: &Maybe<State>,
              stop: &Maybe<S::Output>,
              stop_state: &Maybe<State>,
              step: &Maybe<S::Output>,
              _step_state: &Maybe<State>,
              _tick: &Maybe<()>|
              -> FunctionEvaluation<S::Output> {
            let start_value = match start.get() {
                Ok(value) => value,
                Err(fault) => return FunctionEvaluation::maybe(Maybe::fault(fault)),
            };
            let stop_value = match stop.get() {
                Ok(value) => value,
                Err(fault) => return FunctionEvaluation::maybe(Maybe::fault(fault)),
            };
            let step_value = match step.get() {
                Ok(value) => value,
                Err(fault) => return FunctionEvaluation::maybe(Maybe::fault(fault)),
            };
            let start_state = start_state.get().unwrap_or(State::None);
            let stop_state = stop_state.get().unwrap_or(State::None);
            let candidate = match &previous {
                None => start_value.clone(),
                Some(previous_value) => {
                    let increment = previous_value.clone() + step_value.clone();
                    if start_value > increment {
                        start_value.clone()
                    } else {
                        increment
                    }
                }
            };
            if candidate >= stop_value {
                if start_state.is_complete() && stop_state.is_complete() {
                    return FunctionEvaluation::from_state(State::Complete);
                }
                return FunctionEvaluation::from_state(State::None);
            }
            previous = Some(candidate.clone());
            if start_state.is_complete()
                && stop_state.is_complete()
                && candidate.clone() + step_value >= stop_value
            {
                return FunctionEvaluation::with_state(candidate, State::Complete);
            }
            FunctionEvaluation::value(candidate)
        },
        (
            start,
            start_updates,
            stop,
            stop_updates,
            step,
            step_updates,
            perpetual(),
        ),
    )
}
