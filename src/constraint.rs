//! Accumulated knowledge from past guesses, and the candidate filter.
//!
//! [`ConstraintState`] is the fold of every guess/feedback pair seen in the
//! current game. It never touches the word pool itself; it only narrows the
//! predicate [`filter`] applies. The candidate set is recomputed from the
//! full pool each round rather than updated incrementally.
//!
//! The folded model is single-occurrence: a hit fixes a position, a present
//! letter is required somewhere (but banned where it was tried), and an
//! absent letter is banned everywhere unless some other mark confirmed it.
//! No letter counts are tracked.

use crate::feedback::{Feedback, FeedbackPattern};
use crate::word::Word;
use crate::WORD_LENGTH;

fn bit(letter: u8) -> u32 {
    1 << (letter - b'a')
}

/// Knowledge folded from all guesses made so far in one game.
///
/// Created empty at game start, folded exactly once per completed round,
/// and discarded when the game ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintState {
    /// Letters locked in by a hit, per position.
    fixed: [Option<u8>; WORD_LENGTH],
    /// Letters ruled out at a specific position (present or absent there).
    banned_at: [u32; WORD_LENGTH],
    /// Letters confirmed to occur somewhere in the solution.
    required: u32,
    /// Letters ruled out of the whole word.
    absent: u32,
}

impl ConstraintState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one completed guess into the state.
    pub fn fold(&mut self, guess: &Word, pattern: FeedbackPattern) {
        let feedbacks = pattern.to_feedbacks();
        let letters = guess.letters();

        // Hits and presents first, so a duplicate letter marked absent at one
        // position is not banned globally when another position confirmed it.
        for (i, &fb) in feedbacks.iter().enumerate() {
            let b = bit(letters[i]);
            match fb {
                Feedback::Hit => {
                    self.fixed[i] = Some(letters[i]);
                    self.required |= b;
                }
                Feedback::Present => {
                    self.required |= b;
                    self.banned_at[i] |= b;
                }
                Feedback::Absent => {}
            }
        }
        for (i, &fb) in feedbacks.iter().enumerate() {
            if fb == Feedback::Absent {
                let b = bit(letters[i]);
                self.banned_at[i] |= b;
                if self.required & b == 0 {
                    self.absent |= b;
                }
            }
        }
    }

    /// Does `word` satisfy everything learned so far?
    pub fn allows(&self, word: &Word) -> bool {
        let letters = word.letters();
        let mut seen = 0u32;

        for i in 0..WORD_LENGTH {
            let b = bit(letters[i]);
            if let Some(f) = self.fixed[i] {
                if letters[i] != f {
                    return false;
                }
            }
            if self.absent & b != 0 && self.required & b == 0 {
                return false;
            }
            if self.banned_at[i] & b != 0 {
                return false;
            }
            seen |= b;
        }

        // Every confirmed letter must occur somewhere.
        self.required & !seen == 0
    }
}

/// Keep the members of `pool` consistent with `state`.
///
/// Pure and linear in `pool`; an empty result is a normal outcome meaning
/// the search space is exhausted, not an error.
pub fn filter(pool: &[Word], state: &ConstraintState) -> Vec<Word> {
    pool.iter().copied().filter(|w| state.allows(w)).collect()
}
