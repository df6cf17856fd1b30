//! Ripple Core
//!
//! This crate provides a synchronous reactive-dataflow engine. A graph of
//! *reactors* is advanced over discrete ticks: each tick, a driver commits
//! the root with a monotonically increasing sequence number, the commit
//! descends through the children, and every reactor reports a [`State`]
//! describing what happened: whether it produced a value, whether it can
//! still produce more, and whether it wants to be committed again
//! immediately.
//!
//! # Architecture
//!
//! The crate is organized into a few modules:
//!
//! - [`state`]: the eight commit states, their predicates, and `combine`
//! - [`maybe`]: the value-or-fault carrier flowing between commits and reads
//! - [`reactor`]: the [`Reactor`] trait, the leaf reactors, and type erasure
//! - [`combinator`]: composition: [`lift`] and the combinators built on
//!   the state algebra
//! - [`registry`]: the process-wide boxer registry for adapter layers
//!
//! # Example
//!
//! ```rust
//! use ripple_core::{chain, constant, Reactor, State};
//!
//! // Evaluate 100, then 200.
//! let mut reactor = chain(constant(100), constant(200));
//!
//! assert_eq!(reactor.commit(0), State::Evaluated);
//! assert_eq!(reactor.eval().get().unwrap(), 100);
//!
//! assert_eq!(reactor.commit(1), State::CompleteEvaluated);
//! assert_eq!(reactor.eval().get().unwrap(), 200);
//! ```
//!
//! The driver loop is external and deliberately simple: commit with
//! sequence numbers starting at 0, read `eval` whenever the reported state
//! carries an evaluation, stop once it is complete.

pub mod combinator;
pub mod error;
pub mod maybe;
pub mod reactor;
pub mod registry;
pub mod state;

pub use combinator::{
    chain, first, lift, range, unconsecutive, until, Chain, First, FunctionEvaluation, Lift,
    LiftResult, StaticCommitHandler,
};
pub use maybe::{Fault, Maybe};
pub use reactor::{
    constant, none, perpetual, throw, Boxed, Constant, NoneReactor, Object, Perpetual, Queue,
    Reactor, SharedBox, StateReactor, Throw, ToObject, ToVoid,
};
pub use state::State;
