//! Words and the word pool.
//!
//! A [`Word`] is validated once at construction (length, lowercase ASCII
//! alphabet) and is immutable afterwards; nothing downstream re-checks it.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use crate::WORD_LENGTH;

/// A word rejected while building a pool.
#[derive(Error, Debug)]
pub enum WordError {
    #[error("expected a {expected}-letter word, found \"{word}\" of length {}", word.len())]
    WrongLength { word: String, expected: usize },
    #[error("word \"{word}\" contains a character outside a-z")]
    NotAlphabetic { word: String },
}

/// Errors from loading a word-list file.
#[derive(Error, Debug)]
pub enum PoolError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Word(#[from] WordError),
}

/// A fixed-length lowercase word, stored as raw letter bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    /// Zero-based alphabet index of the letter at `pos`.
    pub fn letter_index(&self, pos: usize) -> usize {
        (self.0[pos] - b'a') as usize
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bytes: [u8; WORD_LENGTH] =
            s.as_bytes()
                .try_into()
                .map_err(|_| WordError::WrongLength {
                    word: s.to_string(),
                    expected: WORD_LENGTH,
                })?;
        if !bytes.iter().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::NotAlphabetic {
                word: s.to_string(),
            });
        }
        Ok(Self(bytes))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{self}\"")
    }
}

/// The immutable universe of words a game is played over.
///
/// Construction sorts and deduplicates, so a pool loaded from the original
/// unsorted comma-separated format comes out as an ordered word list.
#[derive(Debug, Clone)]
pub struct WordPool {
    words: Vec<Word>,
}

impl WordPool {
    pub fn new(mut words: Vec<Word>) -> Self {
        words.sort_by_key(|w| *w.letters());
        words.dedup();
        Self { words }
    }

    /// Parse a word list from text. Tokens may be separated by commas,
    /// newlines, or other whitespace; empty tokens are skipped. Any malformed
    /// token rejects the whole list.
    pub fn parse(text: &str) -> Result<Self, WordError> {
        let words = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|tok| !tok.is_empty())
            .map(|tok| tok.to_lowercase().parse())
            .collect::<Result<Vec<Word>, _>>()?;
        Ok(Self::new(words))
    }

    /// Load a word list from a file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PoolError> {
        let text = fs::read_to_string(path)?;
        Ok(Self::parse(&text)?)
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search_by_key(word.letters(), |w| *w.letters()).is_ok()
    }
}
