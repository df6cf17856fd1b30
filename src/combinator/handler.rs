//! Child Commit Handling
//!
//! A combinator over several children must advance all of them each tick and
//! summarize what happened. [`StaticCommitHandler`] does exactly that for a
//! fixed tuple of children: commit each in declaration order (skipping
//! children that already completed) and fold the observed states into one.
//!
//! # Identity
//!
//! The handler stores per-child states *by position* and walks the owner's
//! argument tuple through [`ReactorTuple::commit_at`]. It holds no pointers
//! into the owner, so cloning a combinator clones the handler and the new
//! copy is automatically bound to the new owner's arguments.

use crate::reactor::Reactor;
use crate::state::State;

/// A fixed tuple of reactors, committable by child index.
pub trait ReactorTuple {
    /// Number of children in the tuple.
    const LEN: usize;

    /// Commit the child at `index` for the given sequence.
    fn commit_at(&mut self, index: usize, sequence: u64) -> State;
}

impl ReactorTuple for () {
    const LEN: usize = 0;

    fn commit_at(&mut self, index: usize, _sequence: u64) -> State {
        unreachable!("child index {index} out of range for an empty tuple")
    }
}

macro_rules! impl_reactor_tuple {
    ($len:expr => $(($name:ident, $index:tt)),+) => {
        impl<$($name: Reactor),+> ReactorTuple for ($($name,)+) {
            const LEN: usize = $len;

            fn commit_at(&mut self, index: usize, sequence: u64) -> State {
                match index {
                    $($index => self.$index.commit(sequence),)+
                    _ => unreachable!("child index {index} out of range"),
                }
            }
        }
    };
}

impl_reactor_tuple!(1 => (A0, 0));
impl_reactor_tuple!(2 => (A0, 0), (A1, 1));
impl_reactor_tuple!(3 => (A0, 0), (A1, 1), (A2, 2));
impl_reactor_tuple!(4 => (A0, 0), (A1, 1), (A2, 2), (A3, 3));
impl_reactor_tuple!(5 => (A0, 0), (A1, 1), (A2, 2), (A3, 3), (A4, 4));
impl_reactor_tuple!(6 => (A0, 0), (A1, 1), (A2, 2), (A3, 3), (A4, 4), (A5, 5));
impl_reactor_tuple!(7 => (A0, 0), (A1, 1), (A2, 2), (A3, 3), (A4, 4), (A5, 5), (A6, 6));
impl_reactor_tuple!(8 => (A0, 0), (A1, 1), (A2, 2), (A3, 3), (A4, 4), (A5, 5), (A6, 6), (A7, 7));

/// Commits a fixed tuple of children and folds their states.
#[derive(Debug, Clone)]
pub struct StaticCommitHandler {
    states: Vec<State>,
}

impl StaticCommitHandler {
    /// Create a handler for `len` children, all initially empty.
    pub fn new(len: usize) -> Self {
        Self {
            states: vec![State::Empty; len],
        }
    }

    /// Commit every non-complete child in declaration order and fold.
    ///
    /// The fold:
    /// - all children complete and empty: `CompleteEmpty`;
    /// - all children complete: `Complete`, with the EVALUATED bit when a
    ///   child evaluated this tick;
    /// - otherwise the OR of this tick's EVALUATED and CONTINUE bits, on a
    ///   base of `Empty` when every non-complete child has yet to produce,
    ///   `None` otherwise.
    ///
    /// Children whose stored state is complete are not committed again and
    /// contribute no per-tick bits; their completion and emptiness still
    /// count toward the fold.
    pub fn commit<A: ReactorTuple>(&mut self, arguments: &mut A, sequence: u64) -> State {
        debug_assert_eq!(self.states.len(), A::LEN, "handler bound to a different arity");
        let mut any_evaluation = false;
        let mut any_continuation = false;
        let mut all_complete = true;
        let mut all_empty = true;
        let mut active_all_empty = true;
        for (index, stored) in self.states.iter_mut().enumerate() {
            if !stored.is_complete() {
                *stored = arguments.commit_at(index, sequence);
                if stored.has_evaluation() {
                    any_evaluation = true;
                }
                if stored.has_continuation() {
                    any_continuation = true;
                }
                if !stored.is_complete() && !stored.is_empty() {
                    active_all_empty = false;
                }
            }
            if !stored.is_complete() {
                all_complete = false;
            }
            if !stored.is_empty() {
                all_empty = false;
            }
        }
        if all_complete {
            if all_empty {
                State::CompleteEmpty
            } else if any_evaluation {
                State::CompleteEvaluated
            } else {
                State::Complete
            }
        } else {
            let mut state = if active_all_empty {
                State::Empty
            } else {
                State::None
            };
            if any_evaluation {
                state = state.combine(State::Evaluated);
            }
            if any_continuation {
                state = state.combine(State::Continue);
            }
            state
        }
    }
}
