//! Composition
//!
//! Combinators build reactors out of reactors. The workhorse is [`lift`],
//! which applies an ordinary function across reactor-typed arguments; the
//! rest are either built on it (`range`, `unconsecutive`) or implemented
//! directly on the state algebra where their transitions cannot be
//! expressed as a lifted function (`chain`, `until`, `first`).

mod chain;
mod first;
mod handler;
mod lift;
mod range;
mod unconsecutive;
mod until;

pub use chain::{chain, Chain};
pub use first::{first, First};
pub use handler::{ReactorTuple, StaticCommitHandler};
pub use lift::{lift, FunctionEvaluation, Lift, LiftResult};
pub use range::range;
pub use unconsecutive::unconsecutive;
pub use until::{until, Until};
