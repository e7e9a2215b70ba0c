//! Feedback from comparing a guess against the hidden solution.
//!
//! Standard three-state rules per position: `Hit` (right letter, right
//! position), `Present` (letter occurs elsewhere), `Absent` (letter does not
//! occur, once copies explained by other positions are accounted for).

use crate::word::Word;
use crate::WORD_LENGTH;

/// The feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Correct letter in the correct position (green)
    Hit,
    /// Letter occurs in the solution but not here (yellow)
    Present,
    /// Letter does not occur in the solution (gray)
    Absent,
}

impl Feedback {
    pub fn to_char(self) -> char {
        match self {
            Feedback::Hit => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        }
    }

    /// Parse from a character (g=green, y=yellow, b=black/gray)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Some(Feedback::Hit),
            'y' | '1' => Some(Feedback::Present),
            'b' | 'x' | '0' => Some(Feedback::Absent),
            _ => None,
        }
    }
}

/// A complete feedback pattern for one guess.
/// Encoded as a single u8 (0-242): each position contributes 0 (absent),
/// 1 (present), or 2 (hit), pattern = p0 + 3*p1 + 9*p2 + 27*p3 + 81*p4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackPattern(pub u8);

impl FeedbackPattern {
    /// The pattern indicating every position is a hit (solved)
    pub const ALL_HITS: Self = Self(2 + 2 * 3 + 2 * 9 + 2 * 27 + 2 * 81); // 242

    /// Total number of possible patterns (3^5)
    pub const NUM_PATTERNS: usize = 243;

    pub fn new(feedbacks: [Feedback; WORD_LENGTH]) -> Self {
        let mut pattern: u8 = 0;
        let mut multiplier: u8 = 1;
        for fb in feedbacks {
            let value = match fb {
                Feedback::Absent => 0,
                Feedback::Present => 1,
                Feedback::Hit => 2,
            };
            pattern += value * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Compute the feedback `guess` would receive if `solution` were the
    /// hidden word.
    ///
    /// Hits are claimed first; remaining solution letters then satisfy
    /// `Present` marks left to right, so duplicate letters in the guess are
    /// only marked as often as they occur in the solution.
    pub fn calculate(guess: &Word, solution: &Word) -> Self {
        let guess = guess.letters();
        let solution = solution.letters();

        let mut feedback = [Feedback::Absent; WORD_LENGTH];
        let mut unexplained = [0u8; 26];

        for i in 0..WORD_LENGTH {
            if guess[i] == solution[i] {
                feedback[i] = Feedback::Hit;
            } else {
                unexplained[(solution[i] - b'a') as usize] += 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if feedback[i] != Feedback::Hit {
                let idx = (guess[i] - b'a') as usize;
                if unexplained[idx] > 0 {
                    feedback[i] = Feedback::Present;
                    unexplained[idx] -= 1;
                }
            }
        }

        Self::new(feedback)
    }

    /// Decode back to per-position feedback values
    pub fn to_feedbacks(self) -> [Feedback; WORD_LENGTH] {
        let mut pattern = self.0;
        let mut feedbacks = [Feedback::Absent; WORD_LENGTH];
        for feedback in feedbacks.iter_mut() {
            *feedback = match pattern % 3 {
                0 => Feedback::Absent,
                1 => Feedback::Present,
                2 => Feedback::Hit,
                _ => unreachable!(),
            };
            pattern /= 3;
        }
        feedbacks
    }

    /// True when the guess matched the solution exactly
    pub fn is_win(self) -> bool {
        self == Self::ALL_HITS
    }

    /// Parse a pattern from a string like "gybbb" or "21000"
    pub fn parse(s: &str) -> Option<Self> {
        if s.chars().count() != WORD_LENGTH {
            return None;
        }
        let feedbacks: Option<Vec<_>> = s.chars().map(Feedback::from_char).collect();
        let arr: [Feedback; WORD_LENGTH] = feedbacks?.try_into().ok()?;
        Some(Self::new(arr))
    }
}

impl std::fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for fb in self.to_feedbacks() {
            write!(f, "{}", fb.to_char())?;
        }
        Ok(())
    }
}
