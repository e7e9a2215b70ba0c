//! Round orchestration: pick a guess, apply its feedback, repeat.
//!
//! Each round runs `AwaitingGuess -> GuessMade -> FeedbackApplied` and then
//! either loops or terminates as solved or exhausted. The loop itself is
//! strictly sequential; only the informed ranking inside a round fans out.

use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::thread_rng;
use rayon::ThreadPoolBuildError;

use crate::constraint::{filter, ConstraintState};
use crate::feedback::FeedbackPattern;
use crate::scorer::{ParallelEvaluator, ProgressFn};
use crate::word::{Word, WordPool};

/// How the next guess is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Uniform choice over the current candidates.
    #[default]
    Random,
    /// Maximum expected eliminations over the current candidates.
    Informed,
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "r" | "random" => Ok(Strategy::Random),
            "i" | "informed" => Ok(Strategy::Informed),
            other => Err(format!("unknown strategy \"{other}\" (use random or informed)")),
        }
    }
}

/// Options recognized by the engine.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub strategy: Strategy,
    /// Guesses allowed before the game is exhausted. At least 1.
    pub max_guesses: usize,
    /// Workers for the informed scoring pass. At least 1 (sequential).
    pub worker_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Random,
            max_guesses: 6,
            worker_count: 1,
        }
    }
}

/// Why a game ended without being solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExhaustionReason {
    /// The guess budget ran out with candidates still in play.
    OutOfGuesses,
    /// The candidate set became empty: the solution was never in the pool,
    /// or the feedback contradicted itself.
    Contradiction,
}

/// Terminal result of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Solved { rounds: usize },
    Exhausted { reason: ExhaustionReason, rounds: usize },
}

/// Everything that happened in one game: the guesses in order, each with
/// its feedback and the candidate count left after applying it.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub guesses: Vec<(Word, FeedbackPattern, usize)>,
    pub outcome: GameOutcome,
}

/// Drives one game: owns the constraint state and candidate set, chooses a
/// guess each round, and folds the real feedback back in.
pub struct GuessSelector {
    pool: WordPool,
    state: ConstraintState,
    candidates: Vec<Word>,
    evaluator: ParallelEvaluator,
    config: GameConfig,
    progress: Option<Box<ProgressFn>>,
}

impl GuessSelector {
    /// Sizes the worker pool once, up front, from `config.worker_count`.
    pub fn new(pool: WordPool, config: GameConfig) -> Result<Self, ThreadPoolBuildError> {
        let evaluator = ParallelEvaluator::new(config.worker_count)?;
        let candidates = pool.words().to_vec();
        Ok(Self {
            pool,
            state: ConstraintState::new(),
            candidates,
            evaluator,
            config,
            progress: None,
        })
    }

    /// Attach a progress sink for long informed scoring passes.
    pub fn with_progress(mut self, progress: Box<ProgressFn>) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    pub fn remaining_count(&self) -> usize {
        self.candidates.len()
    }

    /// Switch strategy between games without rebuilding the worker pool.
    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.config.strategy = strategy;
    }

    /// Forget everything learned and start a fresh game over the same pool.
    pub fn reset(&mut self) {
        self.state = ConstraintState::new();
        self.candidates = self.pool.words().to_vec();
    }

    /// Choose the next guess, or `None` when the candidate set is empty.
    pub fn choose_guess(&self) -> Option<Word> {
        match self.config.strategy {
            Strategy::Random => self.random_guess(),
            Strategy::Informed => self.informed_guess(),
        }
    }

    fn random_guess(&self) -> Option<Word> {
        self.candidates.choose(&mut thread_rng()).copied()
    }

    /// Pick the candidate with the highest expected-elimination score.
    ///
    /// A candidate set of size <= 1 short-circuits; scoring it would be
    /// degenerate. Ties fall back to a random choice among the tied words.
    fn informed_guess(&self) -> Option<Word> {
        if self.candidates.len() <= 1 {
            return self.candidates.first().copied();
        }

        let scores =
            self.evaluator
                .score_all(&self.candidates, &self.state, self.progress.as_deref());
        let best = scores
            .iter()
            .map(|&(_, score)| score)
            .fold(f64::NEG_INFINITY, f64::max);
        let tied: Vec<Word> = scores
            .iter()
            .filter(|&&(_, score)| score == best)
            .map(|&(word, _)| word)
            .collect();
        tied.choose(&mut thread_rng()).copied()
    }

    /// Fold one round's real feedback in and recompute the candidate set
    /// from the full pool.
    pub fn apply_feedback(&mut self, guess: &Word, pattern: FeedbackPattern) {
        self.state.fold(guess, pattern);
        self.candidates = filter(self.pool.words(), &self.state);
    }

    /// Play a full game against a feedback source.
    ///
    /// `feedback` compares a guess against the hidden solution: a pure
    /// comparison in automated play, or a human relaying colors in
    /// interactive use. The loop ends on an all-hits pattern, on an empty
    /// candidate set (contradiction), or when the guess budget is spent.
    pub fn play<F>(&mut self, mut feedback: F) -> GameRecord
    where
        F: FnMut(&Word) -> FeedbackPattern,
    {
        let mut guesses = Vec::new();

        for round in 1..=self.config.max_guesses {
            let guess = match self.choose_guess() {
                Some(word) => word,
                None => {
                    return GameRecord {
                        guesses,
                        outcome: GameOutcome::Exhausted {
                            reason: ExhaustionReason::Contradiction,
                            rounds: round - 1,
                        },
                    }
                }
            };

            let pattern = feedback(&guess);
            self.apply_feedback(&guess, pattern);
            guesses.push((guess, pattern, self.candidates.len()));

            if pattern.is_win() {
                return GameRecord {
                    guesses,
                    outcome: GameOutcome::Solved { rounds: round },
                };
            }
            if self.candidates.is_empty() {
                return GameRecord {
                    guesses,
                    outcome: GameOutcome::Exhausted {
                        reason: ExhaustionReason::Contradiction,
                        rounds: round,
                    },
                };
            }
        }

        GameRecord {
            guesses,
            outcome: GameOutcome::Exhausted {
                reason: ExhaustionReason::OutOfGuesses,
                rounds: self.config.max_guesses,
            },
        }
    }

    /// Play against a known solution, answering each guess with the honest
    /// comparison. For automated runs and tests.
    pub fn play_for_solution(&mut self, solution: &Word) -> GameRecord {
        self.play(|guess| FeedbackPattern::calculate(guess, solution))
    }
}
