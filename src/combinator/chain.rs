//! Sequential Composition
//!
//! `Chain` evaluates its first child until it completes, then switches to
//! the second. The tick on which the first child delivers its final value
//! still belongs to the first child: the chain reports a plain evaluation
//! (stripping the completion) and starts the second child on the next tick.
//! A first child that completes without delivering anything hands over
//! immediately, within the same tick.

use crate::maybe::Maybe;
use crate::reactor::Reactor;
use crate::state::State;

/// Which child the chain is currently advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    /// Still evaluating the first child.
    First,

    /// The first child delivered its final value last tick; the second
    /// starts on the next commit.
    Transition,

    /// Evaluating the second child.
    Second,
}

/// A reactor that evaluates one child to completion, then another.
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
    status: Status,
    second_evaluated: bool,
    had_evaluation: bool,
    state: State,
    previous_sequence: Option<u64>,
}

impl<A, B> Chain<A, B> {
    /// Chain `first` before `second`.
    pub fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            status: Status::First,
            second_evaluated: false,
            had_evaluation: false,
            state: State::Empty,
            previous_sequence: None,
        }
    }
}

/// Shorthand for [`Chain::new`].
pub fn chain<A, B>(first: A, second: B) -> Chain<A, B> {
    Chain::new(first, second)
}

impl<A, B> Chain<A, B>
where
    A: Reactor,
    B: Reactor<Output = A::Output>,
{
    /// Advance the second child and translate its state into the chain's.
    ///
    /// Once the chain has evaluated, the second child's "never produced"
    /// states no longer describe the chain: EMPTY reads as quiet and
    /// COMPLETE_EMPTY as plain completion.
    fn commit_second(&mut self, sequence: u64) -> State {
        let second_state = self.second.commit(sequence);
        if second_state.has_evaluation() {
            self.second_evaluated = true;
        }
        if self.had_evaluation && second_state.is_empty() {
            if second_state.is_complete() {
                State::Complete
            } else {
                State::None
            }
        } else {
            second_state
        }
    }
}

impl<A, B> Reactor for Chain<A, B>
where
    A: Reactor,
    B: Reactor<Output = A::Output>,
{
    type Output = A::Output;

    fn commit(&mut self, sequence: u64) -> State {
        if self.previous_sequence == Some(sequence) || self.state.is_complete() {
            return self.state;
        }
        let state = match self.status {
            Status::First => {
                let first_state = self.first.commit(sequence);
                if first_state.is_complete() {
                    if first_state.has_evaluation() {
                        // The first child's last value is this tick's; hold
                        // the handover until the next one.
                        self.status = Status::Transition;
                        State::Evaluated
                    } else {
                        self.status = Status::Second;
                        self.commit_second(sequence)
                    }
                } else {
                    first_state
                }
            }
            Status::Transition => {
                self.status = Status::Second;
                self.commit_second(sequence)
            }
            Status::Second => self.commit_second(sequence),
        };
        self.state = state;
        self.previous_sequence = Some(sequence);
        self.had_evaluation |= state.has_evaluation();
        state
    }

    fn eval(&self) -> Maybe<A::Output> {
        if self.second_evaluated {
            self.second.eval()
        } else {
            self.first.eval()
        }
    }
}
