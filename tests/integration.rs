//! Integration Tests for the Dataflow Engine
//!
//! These tests drive whole reactor graphs the way an external driver would:
//! commit with increasing sequence numbers, read `eval` whenever the state
//! carries an evaluation, stop on completion.

use proptest::prelude::*;

use ripple_core::{
    chain, constant, first, lift, none, range, throw, until, Maybe, Queue, Reactor, State,
};

/// Drive a reactor to completion, collecting every evaluated value.
fn drain<R: Reactor>(reactor: &mut R) -> Vec<R::Output> {
    let mut values = Vec::new();
    for sequence in 0..1_000 {
        let state = reactor.commit(sequence);
        if state.has_evaluation() {
            values.push(reactor.eval().get().expect("evaluated state backs a value"));
        }
        if state.is_complete() {
            return values;
        }
    }
    panic!("reactor did not complete within 1000 ticks");
}

#[test]
fn chain_of_two_constants() {
    let mut reactor = chain(constant(100), constant(200));
    assert_eq!(reactor.commit(0), State::Evaluated);
    assert_eq!(reactor.eval().get().unwrap(), 100);
    assert_eq!(reactor.commit(1), State::CompleteEvaluated);
    assert_eq!(reactor.eval().get().unwrap(), 200);
}

#[test]
fn chain_with_terminal_nothing() {
    let mut reactor = chain(constant(911), none::<i32>());
    assert_eq!(reactor.commit(0), State::Evaluated);
    assert_eq!(reactor.eval().get().unwrap(), 911);
    assert_eq!(reactor.commit(1), State::Complete);
    assert_eq!(reactor.eval().get().unwrap(), 911);
}

#[test]
fn chain_empty_first() {
    let mut reactor = chain(none::<i32>(), constant(911));
    assert_eq!(reactor.commit(0), State::CompleteEvaluated);
    assert_eq!(reactor.eval().get().unwrap(), 911);
}

#[test]
fn chain_empty_empty() {
    let mut reactor = chain(none::<i32>(), none::<i32>());
    assert_eq!(reactor.commit(0), State::CompleteEmpty);
}

#[test]
fn first_of_constant() {
    let mut reactor = first(constant(123));
    assert_eq!(reactor.commit(0), State::CompleteEvaluated);
    assert_eq!(reactor.eval().get().unwrap(), 123);
}

#[test]
fn first_of_a_queue() {
    let queue = Queue::new();
    let mut reactor = first(queue.clone());
    assert_eq!(reactor.commit(0), State::None);
    queue.push(10);
    assert_eq!(reactor.commit(1), State::CompleteEvaluated);
    assert_eq!(reactor.eval().get().unwrap(), 10);
}

#[test]
fn throw_surfaces_through_eval() {
    let mut reactor = throw::<i32, _>(std::fmt::Error);
    assert_eq!(reactor.commit(0), State::CompleteEvaluated);
    let fault = reactor.eval().get().unwrap_err();
    assert!(fault.is::<std::fmt::Error>());
}

#[test]
fn range_counts_to_completion() {
    let mut reactor = range(constant(0), constant(3), constant(1));
    assert_eq!(drain(&mut reactor), vec![0, 1, 2]);
}

#[test]
fn lifted_pipeline_over_live_sources() {
    let left = Queue::new();
    let right = Queue::new();
    let mut reactor: ripple_core::Lift<_, _, i32> = lift(
        |a: &Maybe<i32>, b: &Maybe<i32>| -> Option<i32> {
            match (a.get(), b.get()) {
                (Ok(a), Ok(b)) => Some(a + b),
                _ => None,
            }
        },
        (left.clone(), right.clone()),
    );

    assert_eq!(reactor.commit(0), State::Empty);

    // Only one side has produced; the function declines.
    left.push(1);
    assert_eq!(reactor.commit(1), State::None);

    right.push(2);
    assert_eq!(reactor.commit(2), State::Evaluated);
    assert_eq!(reactor.eval().get().unwrap(), 3);

    // A new left value re-fires against the cached right value.
    left.push(10);
    assert_eq!(reactor.commit(3), State::Evaluated);
    assert_eq!(reactor.eval().get().unwrap(), 12);
}

#[test]
fn until_stops_a_counter() {
    let condition = Queue::new();
    let counter = range(constant(0), constant(100), constant(1));
    let mut reactor = until(condition.clone(), counter);

    condition.push(false);
    assert_eq!(reactor.commit(0), State::Evaluated);
    assert_eq!(reactor.eval().get().unwrap(), 0);

    assert_eq!(reactor.commit(1), State::Evaluated);
    assert_eq!(reactor.eval().get().unwrap(), 1);

    condition.push(true);
    assert_eq!(reactor.commit(2), State::Complete);
    // The last emitted value remains readable.
    assert_eq!(reactor.eval().get().unwrap(), 1);
}

#[test]
fn evaluated_states_back_a_repeatable_value() {
    let queue = Queue::new();
    queue.push(5);
    let mut reactor = first(queue);
    let state = reactor.commit(0);
    assert!(state.has_evaluation());
    // eval is stable between commits.
    assert_eq!(reactor.eval().get().unwrap(), 5);
    assert_eq!(reactor.eval().get().unwrap(), 5);
}

#[test]
fn completed_reactors_never_change_state() {
    let mut reactor = chain(constant(1), constant(2));
    let mut sequence = 0;
    let terminal = loop {
        let state = reactor.commit(sequence);
        if state.is_complete() {
            break state;
        }
        sequence += 1;
    };
    for later in sequence + 1..sequence + 10 {
        assert_eq!(reactor.commit(later), terminal);
    }
}

proptest! {
    #[test]
    fn range_produces_the_arithmetic_sequence(
        start in -50i64..50,
        len in 0i64..40,
        step in 1i64..5,
    ) {
        let stop = start + len;
        let mut reactor = range(constant(start), constant(stop), constant(step));
        let mut values = Vec::new();
        for sequence in 0..200 {
            let state = reactor.commit(sequence);
            if state.has_evaluation() {
                values.push(reactor.eval().get().unwrap());
            }
            if state.is_complete() {
                break;
            }
        }
        let mut expected = Vec::new();
        let mut value = start;
        while value < stop {
            expected.push(value);
            value += step;
        }
        prop_assert_eq!(values, expected);
    }

    #[test]
    fn queue_driving_is_idempotent_and_terminal(
        values in proptest::collection::vec(-100i32..100, 0..8),
    ) {
        let queue = Queue::new();
        for value in &values {
            queue.push(*value);
        }
        queue.set_complete();

        let mut reactor = queue.clone();
        let mut drained = Vec::new();
        let mut sequence = 0;
        loop {
            let state = reactor.commit(sequence);
            // Idempotence: recommitting the same sequence changes nothing.
            prop_assert_eq!(reactor.commit(sequence), state);
            if state.has_evaluation() {
                drained.push(reactor.eval().get().unwrap());
            }
            if state.is_complete() {
                // Terminality: later commits keep reporting the same state.
                for later in sequence + 1..sequence + 4 {
                    prop_assert_eq!(reactor.commit(later), state);
                }
                break;
            }
            sequence += 1;
        }
        prop_assert_eq!(drained, values);
    }

    #[test]
    fn first_takes_the_head_of_any_stream(
        values in proptest::collection::vec(-100i32..100, 1..8),
    ) {
        let queue = Queue::new();
        for value in &values {
            queue.push(*value);
        }
        queue.set_complete();

        let mut reactor = first(queue);
        prop_assert_eq!(drain(&mut reactor), vec![values[0]]);
    }
}
