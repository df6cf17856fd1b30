//! Function Application
//!
//! `Lift` turns an ordinary function into a reactor over reactor-typed
//! arguments: each tick it advances its children, decides whether the
//! function should run, runs it with every argument's current evaluation,
//! and folds the function's verdict with the children's into its own state.
//!
//! # When the function runs
//!
//! The function is invoked on a tick when any of these hold:
//!
//! 1. some argument delivered a value this tick;
//! 2. the previous invocation requested a continuation;
//! 3. the children just finalized with at least one having produced; the
//!    function gets one last chance to react to the terminal tick.
//!
//! # What the function sees and returns
//!
//! Each argument arrives as a `&Maybe<_>`: a value, or a captured fault
//! (including the unevaluated fault for arguments that have not produced
//! yet). The function decides whether to propagate a fault by returning it.
//!
//! The return value may take several shapes: a plain value, an
//! `Option` (absent means "quiet this tick"), a `Maybe`, a `Result`
//! (`Err` is captured as an evaluated fault), or a full
//! [`FunctionEvaluation`] to also steer the reactor's state. The
//! [`LiftResult`] trait canonicalizes all of them.

use std::error::Error;

use tracing::trace;

use crate::maybe::Maybe;
use crate::reactor::{cached, Reactor};
use crate::state::State;

use super::handler::{ReactorTuple, StaticCommitHandler};

/// The canonical result of one function invocation: an optional value and
/// the state the function steers the reactor toward.
#[derive(Debug, Clone)]
pub struct FunctionEvaluation<T> {
    /// The value produced, if any. Absent means no value this tick.
    pub value: Option<Maybe<T>>,

    /// The state of the reactor after the invocation.
    pub state: State,
}

impl<T> FunctionEvaluation<T> {
    /// No value, state `None`.
    pub fn new() -> Self {
        Self {
            value: None,
            state: State::None,
        }
    }

    /// A value; state `Evaluated`.
    pub fn value(value: T) -> Self {
        Self::maybe(Maybe::value(value))
    }

    /// A value or fault; state `Evaluated`.
    pub fn maybe(value: Maybe<T>) -> Self {
        Self {
            value: Some(value),
            state: State::Evaluated,
        }
    }

    /// An optional value; state `Evaluated` when present, `None` otherwise.
    pub fn optional(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::value(value),
            None => Self::new(),
        }
    }

    /// A value together with a steering state.
    pub fn with_state(value: T, state: State) -> Self {
        Self::maybe_with_state(Maybe::value(value), state)
    }

    /// A value or fault together with a steering state: completion maps to
    /// `CompleteEvaluated`, continuation to `ContinueEvaluated`, anything
    /// else to `Evaluated`.
    pub fn maybe_with_state(value: Maybe<T>, state: State) -> Self {
        let state = if state.is_complete() {
            State::CompleteEvaluated
        } else if state.has_continuation() {
            State::ContinueEvaluated
        } else {
            State::Evaluated
        };
        Self {
            value: Some(value),
            state,
        }
    }

    /// An optional value together with a steering state.
    pub fn optional_with_state(value: Option<Maybe<T>>, state: State) -> Self {
        match value {
            Some(value) => Self::maybe_with_state(value, state),
            None => Self::from_state(state),
        }
    }

    /// A state alone. The state must not claim an evaluation: there is no
    /// value to back it.
    pub fn from_state(state: State) -> Self {
        debug_assert!(
            !state.has_evaluation(),
            "evaluation state without a value: {state:?}"
        );
        Self { value: None, state }
    }
}

impl<T> Default for FunctionEvaluation<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifts the supported return shapes of a user function into the canonical
/// [`FunctionEvaluation`].
pub trait LiftResult<T> {
    /// Canonicalize this return value.
    fn into_evaluation(self) -> FunctionEvaluation<T>;
}

impl<T> LiftResult<T> for FunctionEvaluation<T> {
    fn into_evaluation(self) -> FunctionEvaluation<T> {
        self
    }
}

impl<T> LiftResult<T> for T {
    fn into_evaluation(self) -> FunctionEvaluation<T> {
        FunctionEvaluation::value(self)
    }
}

impl<T> LiftResult<T> for Option<T> {
    fn into_evaluation(self) -> FunctionEvaluation<T> {
        FunctionEvaluation::optional(self)
    }
}

impl<T> LiftResult<T> for Maybe<T> {
    fn into_evaluation(self) -> FunctionEvaluation<T> {
        FunctionEvaluation::maybe(self)
    }
}

impl<T> LiftResult<T> for Option<Maybe<T>> {
    fn into_evaluation(self) -> FunctionEvaluation<T> {
        match self {
            Some(value) => FunctionEvaluation::maybe(value),
            None => FunctionEvaluation::new(),
        }
    }
}

impl<T, E> LiftResult<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    fn into_evaluation(self) -> FunctionEvaluation<T> {
        match self {
            Ok(value) => FunctionEvaluation::value(value),
            Err(error) => FunctionEvaluation::maybe(Maybe::from_error(error)),
        }
    }
}

/// A reactor that applies a function to its reactor-typed arguments.
#[derive(Clone)]
pub struct Lift<F, A, T> {
    function: F,
    arguments: A,
    handler: StaticCommitHandler,
    value: Option<Maybe<T>>,
    state: State,
    previous_sequence: Option<u64>,
    has_continuation: bool,
    had_evaluation: bool,
}

impl<F, A: ReactorTuple, T> Lift<F, A, T> {
    /// Construct a lifted function over a tuple of argument reactors.
    pub fn new(function: F, arguments: A) -> Self {
        Self {
            function,
            arguments,
            handler: StaticCommitHandler::new(A::LEN),
            value: None,
            state: State::None,
            previous_sequence: None,
            has_continuation: false,
            had_evaluation: false,
        }
    }
}

/// Lift a function to operate on reactors.
///
/// `arguments` is a tuple of reactors, one per function parameter; the
/// function receives each argument's current evaluation as a `&Maybe<_>`.
/// Pass `()` for a function of no arguments: it is invoked exactly once, on
/// the first commit, and the reactor completes immediately.
pub fn lift<F, A: ReactorTuple, T>(function: F, arguments: A) -> Lift<F, A, T> {
    Lift::new(function, arguments)
}

/// Fold one invocation's verdict with the children's summarized state.
fn fold_invocation(
    invocation: State,
    child_state: State,
    had_evaluation: bool,
    has_continuation: &mut bool,
) -> State {
    if invocation == State::None {
        if child_state.is_complete() {
            if had_evaluation {
                State::Complete
            } else {
                State::CompleteEmpty
            }
        } else if child_state.has_continuation() {
            State::Continue
        } else {
            State::None
        }
    } else if invocation.is_complete() {
        if invocation.has_evaluation() {
            State::CompleteEvaluated
        } else if had_evaluation {
            State::Complete
        } else {
            State::CompleteEmpty
        }
    } else {
        *has_continuation = invocation.has_continuation();
        let mut state = invocation;
        if child_state.has_continuation() {
            state = state.combine(State::Continue);
        } else if child_state.is_complete() && !*has_continuation {
            // The children are done; the invocation decides completion.
            state = state.combine(State::Complete);
        }
        state
    }
}

macro_rules! impl_lift_reactor {
    ($(($name:ident, $index:tt)),+) => {
        impl<F, R, T, $($name),+> Reactor for Lift<F, ($($name,)+), T>
        where
            F: FnMut($(&Maybe<$name::Output>),+) -> R,
            R: LiftResult<T>,
            T: Clone,
            $($name: Reactor,)+
        {
            type Output = T;

            fn commit(&mut self, sequence: u64) -> State {
                if self.previous_sequence == Some(sequence) || self.state.is_complete() {
                    return self.state;
                }
                let child_state = self.handler.commit(&mut self.arguments, sequence);
                let invoke = child_state.has_evaluation()
                    || self.has_continuation
                    || (child_state.is_complete() && !child_state.is_empty());
                if invoke {
                    self.has_continuation = false;
                    let evaluation = (self.function)(
                        $(&self.arguments.$index.eval()),+
                    )
                    .into_evaluation();
                    if let Some(value) = evaluation.value {
                        self.value = Some(value);
                    }
                    self.state = fold_invocation(
                        evaluation.state,
                        child_state,
                        self.had_evaluation,
                        &mut self.has_continuation,
                    );
                } else {
                    trace!(sequence, ?child_state, "lift invocation skipped");
                    self.state = child_state;
                }
                self.previous_sequence = Some(sequence);
                self.had_evaluation |= self.state.has_evaluation();
                self.state
            }

            fn eval(&self) -> Maybe<T> {
                cached(&self.value)
            }
        }
    };
}

impl_lift_reactor!((A0, 0));
impl_lift_reactor!((A0, 0), (A1, 1));
impl_lift_reactor!((A0, 0), (A1, 1), (A2, 2));
impl_lift_reactor!((A0, 0), (A1, 1), (A2, 2), (A3, 3));
impl_lift_reactor!((A0, 0), (A1, 1), (A2, 2), (A3, 3), (A4, 4));
impl_lift_reactor!((A0, 0), (A1, 1), (A2, 2), (A3, 3), (A4, 4), (A5, 5));
impl_lift_reactor!((A0, 0), (A1, 1), (A2, 2), (A3, 3), (A4, 4), (A5, 5), (A6, 6));
impl_lift_reactor!(
    (A0, 0),
    (A1, 1),
    (A2, 2),
    (A3, 3),
    (A4, 4),
    (A5, 5),
    (A6, 6),
    (A7, 7)
);

/// A function of no arguments is invoked exactly once, on the first commit,
/// and the reactor is terminal from then on.
impl<F, R, T> Reactor for Lift<F, (), T>
where
    F: FnMut() -> R,
    R: LiftResult<T>,
    T: Clone,
{
    type Output = T;

    fn commit(&mut self, _sequence: u64) -> State {
        if self.state != State::None {
            return self.state;
        }
        let evaluation = (self.function)().into_evaluation();
        let evaluated = evaluation.state.has_evaluation();
        if let Some(value) = evaluation.value {
            self.value = Some(value);
        }
        self.state = if evaluated {
            State::CompleteEvaluated
        } else {
            State::CompleteEmpty
        };
        self.state
    }

    fn eval(&self) -> Maybe<T> {
        cached(&self.value)
    }
}
