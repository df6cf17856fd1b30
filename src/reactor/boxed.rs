//! Type-Erased Reactors
//!
//! Heterogeneous graphs need a common handle: a `Chain` of a `Constant` and
//! a `Queue` has two different concrete types on each side, and external
//! object systems deal in fully opaque values. This module provides:
//!
//! - [`Boxed<T>`]: single-owner dynamic-dispatch handle over any reactor
//!   producing `T`.
//! - [`SharedBox<T>`]: the same, with shared ownership; clones refer to one
//!   underlying reactor, which commits once per tick no matter how many
//!   holders reach it.
//! - [`Object`]: a type-erased value, plus the [`ToObject`] and [`ToVoid`]
//!   adapters that re-type a reactor's output for heterogeneous consumers.

use std::any::Any;
use std::sync::{Arc, RwLock};

use crate::maybe::Maybe;
use crate::state::State;

use super::Reactor;

/// A fully type-erased value produced by a reactor in a heterogeneous graph.
pub type Object = Arc<dyn Any + Send + Sync>;

/// Dispatch surface for a type-erased reactor: commit and eval.
trait ErasedReactor<T>: Send + Sync {
    fn commit(&mut self, sequence: u64) -> State;
    fn eval(&self) -> Maybe<T>;
}

impl<R> ErasedReactor<R::Output> for R
where
    R: Reactor + Send + Sync,
{
    fn commit(&mut self, sequence: u64) -> State {
        Reactor::commit(self, sequence)
    }

    fn eval(&self) -> Maybe<R::Output> {
        Reactor::eval(self)
    }
}

/// A single-owner, dynamically dispatched reactor producing `T`.
pub struct Boxed<T> {
    inner: Box<dyn ErasedReactor<T>>,
}

impl<T> Boxed<T> {
    /// Erase a concrete reactor.
    pub fn new<R>(reactor: R) -> Self
    where
        R: Reactor<Output = T> + Send + Sync + 'static,
    {
        Self {
            inner: Box::new(reactor),
        }
    }
}

impl<T: Clone> Reactor for Boxed<T> {
    type Output = T;

    fn commit(&mut self, sequence: u64) -> State {
        self.inner.commit(sequence)
    }

    fn eval(&self) -> Maybe<T> {
        self.inner.eval()
    }
}

/// A shared, dynamically dispatched reactor producing `T`.
///
/// Clones share the underlying reactor. Because every reactor memoizes by
/// sequence number, multiple holders committing the same tick advance the
/// shared reactor exactly once.
pub struct SharedBox<T> {
    inner: Arc<RwLock<dyn ErasedReactor<T>>>,
}

impl<T> SharedBox<T> {
    /// Erase a concrete reactor behind a shared handle.
    pub fn new<R>(reactor: R) -> Self
    where
        R: Reactor<Output = T> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(RwLock::new(reactor)),
        }
    }
}

impl<T> Clone for SharedBox<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone> Reactor for SharedBox<T> {
    type Output = T;

    fn commit(&mut self, sequence: u64) -> State {
        self.inner
            .write()
            .expect("shared reactor lock poisoned")
            .commit(sequence)
    }

    fn eval(&self) -> Maybe<T> {
        self.inner
            .read()
            .expect("shared reactor lock poisoned")
            .eval()
    }
}

/// Adapts a reactor's output into the type-erased [`Object`].
#[derive(Debug, Clone)]
pub struct ToObject<R> {
    reactor: R,
}

impl<R> ToObject<R> {
    /// Wrap `reactor`, erasing its output type.
    pub fn new(reactor: R) -> Self {
        Self { reactor }
    }
}

impl<R> Reactor for ToObject<R>
where
    R: Reactor,
    R::Output: Send + Sync + 'static,
{
    type Output = Object;

    fn commit(&mut self, sequence: u64) -> State {
        self.reactor.commit(sequence)
    }

    fn eval(&self) -> Maybe<Object> {
        self.reactor.eval().map(|value| Arc::new(value) as Object)
    }
}

/// Adapts a reactor into one producing `()`, keeping only its states.
#[derive(Debug, Clone)]
pub struct ToVoid<R> {
    reactor: R,
}

impl<R> ToVoid<R> {
    /// Wrap `reactor`, discarding its values.
    pub fn new(reactor: R) -> Self {
        Self { reactor }
    }
}

impl<R: Reactor> Reactor for ToVoid<R> {
    type Output = ();

    fn commit(&mut self, sequence: u64) -> State {
        self.reactor.commit(sequence)
    }

    fn eval(&self) -> Maybe<()> {
        self.reactor.eval().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactor::{constant, none, Queue};

    #[test]
    fn boxed_homogenizes_reactor_types() {
        let mut reactors: Vec<Boxed<i32>> =
            vec![Boxed::new(constant(1)), Boxed::new(none::<i32>())];
        assert_eq!(Reactor::commit(&mut reactors[0], 0), State::CompleteEvaluated);
        assert_eq!(Reactor::commit(&mut reactors[1], 0), State::CompleteEmpty);
        assert_eq!(Reactor::eval(&reactors[0]).get().unwrap(), 1);
    }

    #[test]
    fn shared_box_commits_once_per_tick() {
        let queue = Queue::new();
        queue.push(3);
        queue.push(4);

        let shared = SharedBox::new(queue);
        let mut first_holder = shared.clone();
        let mut second_holder = shared;

        // Both holders commit tick 0; the queue pops a single entry.
        assert_eq!(Reactor::commit(&mut first_holder, 0), State::ContinueEvaluated);
        assert_eq!(Reactor::commit(&mut second_holder, 0), State::ContinueEvaluated);
        assert_eq!(Reactor::eval(&second_holder).get().unwrap(), 3);
    }

    #[test]
    fn to_object_erases_the_value_type() {
        let mut reactor = ToObject::new(constant(5));
        assert_eq!(Reactor::commit(&mut reactor, 0), State::CompleteEvaluated);
        let object = Reactor::eval(&reactor).get().unwrap();
        assert_eq!(*object.downcast_ref::<i32>().unwrap(), 5);
    }

    #[test]
    fn to_void_keeps_only_states() {
        let mut reactor = ToVoid::new(constant(5));
        assert_eq!(Reactor::commit(&mut reactor, 0), State::CompleteEvaluated);
        assert!(Reactor::eval(&reactor).get().is_ok());
    }
}
