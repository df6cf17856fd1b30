//! Duplicate Suppression
//!
//! `unconsecutive` passes a series through, dropping evaluations equal to
//! the previous one. A fault clears the memory and is re-emitted.

use crate::maybe::Maybe;
use crate::reactor::Reactor;
use crate::state::State;

use super::lift::{lift, FunctionEvaluation};

/// Suppress consecutive duplicate evaluations of `series`.
pub fn unconsecutive<A>(series: A) -> impl Reactor<Output = A::Output>
where
    A: Reactor,
    A::Output: PartialEq,
{
    let mut previous: Option<A::Output> = None;
    lift(
        move |value: &Maybe<A::Output>| -> FunctionEvaluation<A::Output> {
            match value.as_ref() {
                Ok(value) => {
                    if previous.as_ref() == Some(value) {
                        FunctionEvaluation::from_state(State::None)
                    } else {
                        previous = Some(value.clone());
                        FunctionEvaluation::value(value.clone())
                    }
                }
                Err(fault) => {
                    previous = None;
                    FunctionEvaluation::maybe(Maybe::fault(fault))
                }
            }
        },
        (series,),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactor::Queue;

    #[test]
    fn drops_consecutive_duplicates() {
        let queue = Queue::new();
        let mut reactor = unconsecutive(queue.clone());
        let mut values = Vec::new();
        for (sequence, value) in [1, 1, 2, 2, 1].into_iter().enumerate() {
            queue.push(value);
            if reactor.commit(sequence as u64).has_evaluation() {
                values.push(reactor.eval().get().unwrap());
            }
        }
        assert_eq!(values, vec![1, 2, 1]);
    }

    #[test]
    fn completes_with_its_series() {
        let queue = Queue::new();
        queue.push(5);
        queue.set_complete();
        let mut reactor = unconsecutive(queue);
        assert_eq!(reactor.commit(0), State::CompleteEvaluated);
        assert_eq!(reactor.eval().get().unwrap(), 5);
    }
}
