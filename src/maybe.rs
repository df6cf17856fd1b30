//! Deferred Values
//!
//! A [`Maybe`] carries either a value or a captured fault. Commits produce
//! them, `eval` hands them out, and the fault only turns back into an error
//! when someone calls [`Maybe::get`]. This keeps failures flowing through
//! the graph as ordinary data: a faulting argument does not abort a tick,
//! it is delivered to whichever function consumes that argument, which then
//! decides whether to propagate.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// A cheaply-cloneable, type-erased handle to the originating error of a
/// fault.
pub type Fault = Arc<dyn Error + Send + Sync + 'static>;

/// A value or a deferred fault.
#[derive(Debug, Clone)]
pub enum Maybe<T> {
    /// A successfully produced value.
    Value(T),

    /// A captured fault, surfaced when the value is requested.
    Fault(Fault),
}

impl<T> Maybe<T> {
    /// Wrap a value.
    pub fn value(value: T) -> Self {
        Maybe::Value(value)
    }

    /// Wrap a fault handle.
    pub fn fault(fault: Fault) -> Self {
        Maybe::Fault(fault)
    }

    /// Capture an error into a fault.
    pub fn from_error<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Maybe::Fault(Arc::new(error))
    }

    /// Whether this carries a fault rather than a value.
    pub fn is_fault(&self) -> bool {
        matches!(self, Maybe::Fault(_))
    }

    /// Return the value, or propagate the fault.
    pub fn get(&self) -> Result<T, Fault>
    where
        T: Clone,
    {
        match self {
            Maybe::Value(value) => Ok(value.clone()),
            Maybe::Fault(fault) => Err(Arc::clone(fault)),
        }
    }

    /// Borrow the value, or propagate the fault.
    pub fn as_ref(&self) -> Result<&T, Fault> {
        match self {
            Maybe::Value(value) => Ok(value),
            Maybe::Fault(fault) => Err(Arc::clone(fault)),
        }
    }

    /// Consume into a `Result`.
    pub fn into_result(self) -> Result<T, Fault> {
        match self {
            Maybe::Value(value) => Ok(value),
            Maybe::Fault(fault) => Err(fault),
        }
    }

    /// Map the value, passing faults through untouched.
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Value(value) => Maybe::Value(f(value)),
            Maybe::Fault(fault) => Maybe::Fault(fault),
        }
    }
}

impl<T> From<Result<T, Fault>> for Maybe<T> {
    fn from(result: Result<T, Fault>) -> Self {
        match result {
            Ok(value) => Maybe::Value(value),
            Err(fault) => Maybe::Fault(fault),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Value(value) => write!(f, "{value}"),
            Maybe::Fault(fault) => write!(f, "fault: {fault}"),
        }
    }
}
