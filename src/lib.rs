//! # Wordle Guesser
//!
//! A five-letter word-guessing bot. Given the feedback from each guess it
//! narrows a fixed word list to the candidates still consistent with
//! everything seen so far, and can rank candidates by how many of the
//! remaining words each would be expected to eliminate if guessed next.
//!
//! The expected-elimination ranking is quadratic in the candidate count, so
//! it is fanned out over a worker pool sized from [`GameConfig::worker_count`].

pub mod constraint;
pub mod feedback;
pub mod scorer;
pub mod selector;
pub mod word;

pub use constraint::{filter, ConstraintState};
pub use feedback::{Feedback, FeedbackPattern};
pub use scorer::{expected_eliminations, ParallelEvaluator, ScoreTable};
pub use selector::{
    ExhaustionReason, GameConfig, GameOutcome, GameRecord, GuessSelector, Strategy,
};
pub use word::{Word, WordError, WordPool};

/// Word length for the game
pub const WORD_LENGTH: usize = 5;

/// Load the default word pool from the embedded word list
pub fn load_dictionary() -> WordPool {
    WordPool::parse(include_str!("../dictionary/words.txt"))
        .expect("embedded word list is valid")
}
