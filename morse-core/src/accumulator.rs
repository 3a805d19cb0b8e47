//! Input accumulation: builds the in-progress answer from symbol events

use crate::types::{Sequence, Symbol, MAX_SYMBOLS};

/// What the accumulator is collecting for
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Five-symbol level command, matched by length
    SelectingLevel,
    /// Answer to a round whose target has `expected_len` symbols
    Round { expected_len: usize },
}

/// Result of feeding one event into the accumulator
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Accepted {
    /// Answer still open
    Pending,
    /// Answer closed, ready to be taken
    Finalized,
}

/// The answer being built for the current round or level selection
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct PendingAnswer {
    symbols: Sequence,
    timed_out: bool,
    committed: bool,
}

impl PendingAnswer {
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Closed by the watchdog window expiring
    pub fn timed_out(&self) -> bool {
        self.timed_out
    }

    /// Closed by the commit button
    pub fn committed(&self) -> bool {
        self.committed
    }
}

/// Collects symbols until an answer is complete
#[derive(Debug, Default)]
pub struct InputAccumulator {
    answer: PendingAnswer,
    finalized: bool,
}

impl InputAccumulator {
    pub const fn new() -> Self {
        Self {
            answer: PendingAnswer {
                symbols: Sequence::new(),
                timed_out: false,
                committed: false,
            },
            finalized: false,
        }
    }

    /// Current answer, still open or finalized
    pub fn answer(&self) -> &PendingAnswer {
        &self.answer
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Append a symbol and finalize once the phase's length is reached.
    ///
    /// # Panics
    /// Panics if the buffer is already full or finalized. Finalized answers
    /// are taken within the same event, so this never happens in a correct
    /// event loop.
    pub fn accept_symbol(&mut self, symbol: Symbol, phase: Phase) -> Accepted {
        if self.finalized || self.answer.symbols.push(symbol).is_err() {
            panic!("answer buffer overflow");
        }

        let len = self.answer.len();
        let complete = match phase {
            Phase::Round { expected_len } => len == expected_len || len == MAX_SYMBOLS,
            Phase::SelectingLevel => len == MAX_SYMBOLS,
        };
        self.finalize_if(complete)
    }

    /// Commit button. Closes a round answer, even an empty one; ignored
    /// during level selection.
    pub fn accept_commit(&mut self, phase: Phase) -> Accepted {
        match phase {
            Phase::Round { .. } => {
                self.answer.committed = true;
                self.finalize_if(true)
            }
            Phase::SelectingLevel => Accepted::Pending,
        }
    }

    /// Watchdog expiry. Always closes a round answer; closes a level
    /// selection entry only if something was entered.
    pub fn timeout_elapsed(&mut self, phase: Phase) -> Accepted {
        let close = match phase {
            Phase::Round { .. } => true,
            Phase::SelectingLevel => !self.answer.is_empty(),
        };
        if close {
            self.answer.timed_out = true;
        }
        self.finalize_if(close)
    }

    /// Hand out the answer and reset for the next one
    pub fn take(&mut self) -> PendingAnswer {
        self.finalized = false;
        core::mem::take(&mut self.answer)
    }

    fn finalize_if(&mut self, complete: bool) -> Accepted {
        if complete {
            self.finalized = true;
            Accepted::Finalized
        } else {
            Accepted::Pending
        }
    }
}
