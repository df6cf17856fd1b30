//! Commit States
//!
//! Every reactor reports a `State` after every commit. The state answers
//! four independent questions about the tick that just ran:
//!
//! 1. Did the reactor produce a value this tick? (`has_evaluation`)
//! 2. Is the reactor finished for good? (`is_complete`)
//! 3. Does the reactor want to be committed again immediately?
//!    (`has_continuation`)
//! 4. Has the reactor never produced anything at all? (`is_empty`)
//!
//! # Representation
//!
//! The answers map onto three orthogonal flag bits (EVALUATED, COMPLETE,
//! CONTINUE) plus the distinguished EMPTY marker. Not every bit pattern is a
//! meaningful state: a complete reactor cannot also request an immediate
//! recommit, and a reactor that evaluated is by definition not empty.
//! [`State::combine`] performs the bitwise union and then normalizes those
//! degenerate patterns away, so every union lands back on one of the eight
//! named states.
//!
//! EMPTY and NONE are deliberately distinct: EMPTY means "has never produced
//! a value", NONE means "quiet this tick, but ran before".

const EMPTY_BIT: u8 = 0b0001;
const EVALUATED_BIT: u8 = 0b0010;
const COMPLETE_BIT: u8 = 0b0100;
const CONTINUE_BIT: u8 = 0b1000;

/// The outcome of committing a reactor for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum State {
    /// No value this tick; the reactor may still produce later.
    None = 0,

    /// The reactor has never produced a value, but may still produce.
    Empty = EMPTY_BIT,

    /// The reactor produced a value this tick.
    Evaluated = EVALUATED_BIT,

    /// Terminal; the reactor will never produce again.
    Complete = COMPLETE_BIT,

    /// Terminal without ever having produced a value.
    CompleteEmpty = COMPLETE_BIT | EMPTY_BIT,

    /// Produced a value this tick and is terminal.
    CompleteEvaluated = COMPLETE_BIT | EVALUATED_BIT,

    /// The reactor will definitely have work next tick; requests an
    /// immediate recommit.
    Continue = CONTINUE_BIT,

    /// Produced a value this tick and requests an immediate recommit.
    ContinueEvaluated = CONTINUE_BIT | EVALUATED_BIT,
}

impl State {
    /// Whether the reactor produced a value this tick.
    pub fn has_evaluation(self) -> bool {
        self.bits() & EVALUATED_BIT != 0
    }

    /// Whether the reactor is terminal and will never produce again.
    pub fn is_complete(self) -> bool {
        self.bits() & COMPLETE_BIT != 0
    }

    /// Whether the reactor requests an immediate recommit.
    pub fn has_continuation(self) -> bool {
        self.bits() & CONTINUE_BIT != 0
    }

    /// Whether the reactor has never produced a value.
    pub fn is_empty(self) -> bool {
        self.bits() & EMPTY_BIT != 0
    }

    /// Merge two states into the state carrying the union of their
    /// properties.
    ///
    /// Degenerate unions are normalized: completion dominates continuation,
    /// and an evaluation or a pending continuation clears EMPTY (a reactor
    /// with either is not "never produced").
    pub fn combine(self, other: State) -> State {
        let mut bits = self.bits() | other.bits();
        if bits & COMPLETE_BIT != 0 {
            bits &= !CONTINUE_BIT;
        }
        if bits & (EVALUATED_BIT | CONTINUE_BIT) != 0 {
            bits &= !EMPTY_BIT;
        }
        State::from_bits(bits)
    }

    fn bits(self) -> u8 {
        self as u8
    }

    fn from_bits(bits: u8) -> State {
        match bits {
            0 => State::None,
            b if b == EMPTY_BIT => State::Empty,
            b if b == EVALUATED_BIT => State::Evaluated,
            b if b == COMPLETE_BIT => State::Complete,
            b if b == (COMPLETE_BIT | EMPTY_BIT) => State::CompleteEmpty,
            b if b == (COMPLETE_BIT | EVALUATED_BIT) => State::CompleteEvaluated,
            b if b == CONTINUE_BIT => State::Continue,
            b if b == (CONTINUE_BIT | EVALUATED_BIT) => State::ContinueEvaluated,
            _ => unreachable!("normalized state bits: {bits:#b}"),
        }
    }

    /// All eight states, in discriminant order. Handy for exhaustive tests.
    pub const ALL: [State; 8] = [
        State::None,
        State::Empty,
        State::Evaluated,
        State::Complete,
        State::CompleteEmpty,
        State::CompleteEvaluated,
        State::Continue,
        State::ContinueEvaluated,
    ];
}
