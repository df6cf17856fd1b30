//! Reactors
//!
//! A reactor is a value-producing node in a dataflow graph, advanced by
//! discrete ticks. The driver calls [`Reactor::commit`] with a
//! monotonically increasing sequence number; the reactor advances its
//! children (at most once per sequence), reports a [`State`], and, when the
//! state carries an evaluation, exposes the produced value through
//! [`Reactor::eval`].
//!
//! # Contract
//!
//! 1. `commit` is idempotent within a sequence: a repeated call with the
//!    same sequence returns the cached state without advancing children.
//!
//! 2. Completion is terminal: once a commit reports a complete state, every
//!    later commit returns that state unchanged.
//!
//! 3. If a commit's state satisfies `has_evaluation`, `eval` returns a
//!    defined [`Maybe`] (a value or a captured fault), and keeps returning
//!    it until the next commit.
//!
//! `eval` is total: reading a reactor that has never produced yields a
//! `Maybe` carrying [`EvalError::Unevaluated`](crate::error::EvalError)
//! rather than panicking. Combinators rely on this when a function is
//! invoked while some of its arguments are still empty.
//!
//! This module provides the leaf reactors; composition lives in
//! [`crate::combinator`].

mod boxed;
mod constant;
mod none;
mod perpetual;
mod queue;
mod state_reactor;
mod throw;

pub use boxed::{Boxed, Object, SharedBox, ToObject, ToVoid};
pub use constant::{constant, Constant};
pub use none::{none, NoneReactor};
pub use perpetual::{perpetual, Perpetual};
pub use queue::Queue;
pub use state_reactor::StateReactor;
pub use throw::{throw, Throw};

use crate::error::EvalError;
use crate::maybe::Maybe;
use crate::state::State;

/// A value-producing node in a dataflow graph.
pub trait Reactor {
    /// The type of value this reactor evaluates to.
    type Output: Clone;

    /// Advance the reactor by one tick and report its state.
    ///
    /// Sequence numbers start at 0 and strictly increase between ticks.
    fn commit(&mut self, sequence: u64) -> State;

    /// The value produced by the most recent evaluating commit.
    fn eval(&self) -> Maybe<Self::Output>;
}

/// The fault handed out when a reactor without an evaluation is read.
pub(crate) fn unevaluated<T>() -> Maybe<T> {
    Maybe::from_error(EvalError::Unevaluated)
}

/// Read a cached evaluation slot, falling back to the unevaluated fault.
pub(crate) fn cached<T: Clone>(value: &Option<Maybe<T>>) -> Maybe<T> {
    match value {
        Some(maybe) => maybe.clone(),
        None => unevaluated(),
    }
}
