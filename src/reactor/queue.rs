//! Queue Reactor
//!
//! An externally fed source. Any holder of a handle can push values (or
//! faults) between ticks; each commit pops at most one entry and evaluates
//! to it.
//!
//! # Shared Handles
//!
//! Cloning a `Queue` shares identity: the inner state lives behind an
//! `Arc<RwLock<..>>`, so one clone can sit inside a reactor graph while
//! another is used to push values from the outside. Commits are memoized by
//! sequence number, so a tick that reaches the queue through two paths of a
//! DAG pops a single entry.

use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use crate::maybe::Maybe;
use crate::state::State;

use super::{cached, Reactor};

struct Inner<T> {
    pending: VecDeque<Maybe<T>>,
    complete: bool,
    value: Option<Maybe<T>>,
    state: State,
    previous_sequence: Option<u64>,
}

/// An externally pushed source of values.
pub struct Queue<T> {
    inner: Arc<RwLock<Inner<T>>>,
}

impl<T> Queue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                pending: VecDeque::new(),
                complete: false,
                value: None,
                state: State::Empty,
                previous_sequence: None,
            })),
        }
    }

    /// Enqueue a value to be evaluated on an upcoming tick.
    pub fn push(&self, value: T) {
        self.inner
            .write()
            .expect("queue lock poisoned")
            .pending
            .push_back(Maybe::value(value));
    }

    /// Enqueue a fault to be emitted as an evaluated fault.
    pub fn push_fault<E>(&self, error: E)
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.inner
            .write()
            .expect("queue lock poisoned")
            .pending
            .push_back(Maybe::from_error(error));
    }

    /// Mark the end of the stream. Already queued entries still drain, one
    /// per tick, before the queue reports completion.
    pub fn set_complete(&self) {
        self.inner.write().expect("queue lock poisoned").complete = true;
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Queue<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone> Reactor for Queue<T> {
    type Output = T;

    fn commit(&mut self, sequence: u64) -> State {
        let mut inner = self.inner.write().expect("queue lock poisoned");
        if inner.previous_sequence == Some(sequence) || inner.state.is_complete() {
            return inner.state;
        }
        let state = if let Some(entry) = inner.pending.pop_front() {
            inner.value = Some(entry);
            let mut state = State::Evaluated;
            if !inner.pending.is_empty() {
                state = state.combine(State::Continue);
            } else if inner.complete {
                state = state.combine(State::Complete);
            }
            state
        } else if inner.complete {
            if inner.value.is_some() {
                State::Complete
            } else {
                State::CompleteEmpty
            }
        } else if inner.value.is_some() {
            State::None
        } else {
            State::Empty
        };
        inner.state = state;
        inner.previous_sequence = Some(sequence);
        state
    }

    fn eval(&self) -> Maybe<T> {
        cached(&self.inner.read().expect("queue lock poisoned").value)
    }
}
