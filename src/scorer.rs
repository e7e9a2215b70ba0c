//! Expected-elimination scoring and its parallel fan-out.
//!
//! Scoring one candidate means simulating it as a guess against every word
//! that could still be the solution and counting how many candidates would
//! survive the resulting feedback. Ranking every candidate this way is
//! O(n²) per round, which is why [`ParallelEvaluator`] exists.

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

use crate::constraint::ConstraintState;
use crate::feedback::FeedbackPattern;
use crate::word::Word;

/// Candidate words paired with their scores, live for one ranking pass.
pub type ScoreTable = Vec<(Word, f64)>;

/// Progress sink: called with (words scored so far, total). Observational
/// only; must never influence iteration order or results.
pub type ProgressFn = dyn Fn(usize, usize) + Sync;

/// How many scored words between progress reports.
const PROGRESS_STRIDE: usize = 32;

/// Expected number of candidates a guess of `candidate` would eliminate,
/// averaged over every `candidates` member treated in turn as the truth.
///
/// Returns `n - mean_survivors` where `n = candidates.len()`: higher is
/// better, and the score is normalized by the candidate count exactly once.
/// Degenerate sets (`n <= 1`) score 0; there is nothing left to eliminate.
pub fn expected_eliminations(
    candidate: &Word,
    state: &ConstraintState,
    candidates: &[Word],
) -> f64 {
    let n = candidates.len();
    if n <= 1 {
        return 0.0;
    }

    let mut surviving = 0usize;
    for truth in candidates {
        let pattern = FeedbackPattern::calculate(candidate, truth);
        let mut hypothetical = state.clone();
        hypothetical.fold(candidate, pattern);
        surviving += candidates.iter().filter(|w| hypothetical.allows(w)).count();
    }

    n as f64 - surviving as f64 / n as f64
}

/// Fans the scoring of a whole candidate set out over a fixed worker pool.
///
/// The pool is sized once from the configured worker count and reused for
/// every round of the game. Candidates are split into contiguous chunks,
/// each worker reads the shared slices and produces its chunk's scores, and
/// the pass completes only when every chunk has; there are no partial
/// results and no shared mutable state.
pub struct ParallelEvaluator {
    pool: ThreadPool,
}

impl ParallelEvaluator {
    /// Build an evaluator with `workers` threads (1 = sequential).
    pub fn new(workers: usize) -> Result<Self, ThreadPoolBuildError> {
        let pool = ThreadPoolBuilder::new().num_threads(workers.max(1)).build()?;
        Ok(Self { pool })
    }

    pub fn worker_count(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Score every candidate, preserving candidate order in the result.
    pub fn score_all(
        &self,
        candidates: &[Word],
        state: &ConstraintState,
        progress: Option<&ProgressFn>,
    ) -> ScoreTable {
        let total = candidates.len();
        let scored = AtomicUsize::new(0);
        let chunk_len = total.div_ceil(self.worker_count()).max(1);

        self.pool.install(|| {
            candidates
                .par_chunks(chunk_len)
                .map(|chunk| {
                    let mut partial = Vec::with_capacity(chunk.len());
                    for word in chunk {
                        let score = expected_eliminations(word, state, candidates);
                        partial.push((*word, score));

                        let done = scored.fetch_add(1, Ordering::Relaxed) + 1;
                        if let Some(report) = progress {
                            if done % PROGRESS_STRIDE == 0 || done == total {
                                report(done, total);
                            }
                        }
                    }
                    partial
                })
                .reduce(Vec::new, |mut table, mut partial| {
                    table.append(&mut partial);
                    table
                })
        })
    }
}
