use wordle_guesser::{
    load_dictionary, ExhaustionReason, Feedback, FeedbackPattern, GameConfig, GameOutcome,
    GuessSelector, Strategy, Word, WordPool,
};

fn word(s: &str) -> Word {
    s.parse().unwrap()
}

fn pool(list: &[&str]) -> WordPool {
    WordPool::new(list.iter().map(|s| s.parse().unwrap()).collect())
}

fn selector(words: WordPool, config: GameConfig) -> GuessSelector {
    GuessSelector::new(words, config).unwrap()
}

#[test]
fn test_forced_crane_narrows_to_crate() {
    // crane against crate hits c-r-a-_-e and rules out n, which leaves
    // exactly one candidate; the follow-up game solves on its first round,
    // two guesses in total.
    let words = pool(&["crate", "crane", "trace", "grate", "plate"]);
    let solution = word("crate");

    let mut sel = selector(words, GameConfig::default());
    let first = word("crane");
    sel.apply_feedback(&first, FeedbackPattern::calculate(&first, &solution));
    assert_eq!(sel.candidates(), &[word("crate")]);

    let record = sel.play_for_solution(&solution);
    assert_eq!(record.outcome, GameOutcome::Solved { rounds: 1 });
}

#[test]
fn test_solves_with_informed_strategy() {
    let words = pool(&[
        "crane", "slate", "trace", "crate", "raise", "arise", "stare", "roast", "toast", "beast",
        "least", "steal", "cause", "pause", "badge", "gauge", "mount", "pound", "sound", "round",
        "brine", "shine", "spine", "swine", "whine", "thine", "prone", "stone", "drone", "clone",
    ]);
    let config = GameConfig {
        strategy: Strategy::Informed,
        worker_count: 2,
        ..GameConfig::default()
    };
    let mut sel = selector(words, config);

    let record = sel.play_for_solution(&word("crane"));
    let (last, pattern, remaining) = *record.guesses.last().unwrap();
    assert!(matches!(record.outcome, GameOutcome::Solved { .. }));
    assert!(pattern.is_win());
    assert_eq!(last, word("crane"));
    assert_eq!(remaining, 1);
}

#[test]
fn test_solves_with_random_strategy() {
    let words = pool(&["crane", "slate", "trace", "crate", "raise"]);
    let mut sel = selector(words, GameConfig::default());

    let record = sel.play_for_solution(&word("trace"));
    assert!(matches!(record.outcome, GameOutcome::Solved { .. }));
}

#[test]
fn test_random_guess_comes_from_candidates() {
    let words = load_dictionary();
    let solution = word("pound");
    let mut sel = selector(words, GameConfig::default());

    let probe = word("crane");
    sel.apply_feedback(&probe, FeedbackPattern::calculate(&probe, &solution));
    let candidates = sel.candidates().to_vec();
    assert!(candidates.len() > 1);

    for _ in 0..50 {
        let guess = sel.choose_guess().unwrap();
        assert!(candidates.contains(&guess));
    }
}

#[test]
fn test_missing_solution_reports_contradiction() {
    // The hidden word is not in the pool; honest feedback must collapse the
    // candidate set to empty and be reported as a contradiction, not a crash.
    let words = pool(&["crane", "slate", "pound", "guilt"]);
    let mut sel = selector(words, GameConfig::default());

    let record = sel.play_for_solution(&word("moist"));
    assert!(matches!(
        record.outcome,
        GameOutcome::Exhausted {
            reason: ExhaustionReason::Contradiction,
            ..
        }
    ));
}

#[test]
fn test_budget_exhaustion_at_exact_round() {
    // Seven words sharing c-r-a-_-e with distinct middle letters. Feedback
    // always marks the middle letter absent, so each round eliminates only
    // the guessed word and the budget runs out at exactly round 6.
    let words = pool(&[
        "crate", "crane", "craze", "crake", "crape", "crave", "crame",
    ]);
    let mut sel = selector(words, GameConfig::default());

    let not_quite = FeedbackPattern::new([
        Feedback::Hit,
        Feedback::Hit,
        Feedback::Hit,
        Feedback::Absent,
        Feedback::Hit,
    ]);
    let record = sel.play(|_| not_quite);

    assert_eq!(
        record.outcome,
        GameOutcome::Exhausted {
            reason: ExhaustionReason::OutOfGuesses,
            rounds: 6,
        }
    );
    assert_eq!(record.guesses.len(), 6);
    // Candidates were never empty along the way.
    for &(_, _, remaining) in &record.guesses {
        assert!(remaining > 0);
    }
}

#[test]
fn test_singleton_candidate_short_circuits_informed_mode() {
    let words = pool(&["crate", "crane"]);
    let config = GameConfig {
        strategy: Strategy::Informed,
        ..GameConfig::default()
    };
    let mut sel = selector(words, config);

    let probe = word("crane");
    sel.apply_feedback(&probe, FeedbackPattern::calculate(&probe, &word("crate")));
    assert_eq!(sel.remaining_count(), 1);
    assert_eq!(sel.choose_guess(), Some(word("crate")));
}

#[test]
fn test_empty_pool_yields_no_guess() {
    let sel = selector(pool(&[]), GameConfig::default());
    assert_eq!(sel.choose_guess(), None);
}

#[test]
fn test_reset_restores_the_full_pool() {
    let words = load_dictionary();
    let total = words.len();
    let mut sel = selector(words, GameConfig::default());

    let probe = word("slate");
    sel.apply_feedback(&probe, FeedbackPattern::calculate(&probe, &word("crumb")));
    assert!(sel.remaining_count() < total);

    sel.reset();
    assert_eq!(sel.remaining_count(), total);
}

#[test]
fn test_record_tracks_shrinking_candidates() {
    let mut sel = selector(load_dictionary(), GameConfig::default());
    let record = sel.play_for_solution(&word("siren"));

    let counts: Vec<usize> = record.guesses.iter().map(|&(_, _, n)| n).collect();
    for pair in counts.windows(2) {
        assert!(pair[1] <= pair[0]);
    }
}

#[test]
fn test_strategy_parsing() {
    assert_eq!("random".parse::<Strategy>().unwrap(), Strategy::Random);
    assert_eq!("I".parse::<Strategy>().unwrap(), Strategy::Informed);
    assert!("clever".parse::<Strategy>().is_err());
}
