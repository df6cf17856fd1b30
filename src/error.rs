//! Error types.

use thiserror::Error;

/// Errors surfaced when reading a reactor's value.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// The reactor has not produced an evaluation yet.
    ///
    /// `eval` is total: instead of undefined behavior, reading a reactor
    /// that never produced yields this fault. A lifted function receives it
    /// as the argument's `Maybe` and may ignore it or propagate it.
    #[error("reactor has no evaluation")]
    Unevaluated,
}
