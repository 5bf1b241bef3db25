//! Response codes: the per-letter outcome of comparing a guess to an answer
//!
//! Each position is marked absent (0), present elsewhere (1) or exact (2).
//! The five marks are packed as a base-3 number with position 0 least
//! significant, then offset by one so the value (1-243) can be used directly
//! as a one-based dense index. [`Response::index`] gives the zero-based slot.
//!
//! The text form uses one character per position: `-` absent, `y` present
//! elsewhere, `g` exact.

use super::word::{WORD_LEN, Word};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of distinct responses (3^5)
pub const RESPONSE_COUNT: usize = 243;

/// Outcome for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Absent = 0,
    Present = 1,
    Exact = 2,
}

impl Mark {
    /// Character used for this mark in the text form
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Absent => '-',
            Self::Present => 'y',
            Self::Exact => 'g',
        }
    }

    /// Parse a mark from its symbol (case-insensitive)
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '-' => Some(Self::Absent),
            'y' | 'Y' => Some(Self::Present),
            'g' | 'G' => Some(Self::Exact),
            _ => None,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            0 => Self::Absent,
            1 => Self::Present,
            _ => Self::Exact,
        }
    }
}

/// Error type for malformed response strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    #[error("invalid response {input:?}: {reason}")]
    InvalidFormat { input: String, reason: String },
}

/// Packed response code (1-243)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Response(u8);

impl Response {
    /// All positions exact
    pub const PERFECT: Self = Self(243); // 2 + 2×3 + 2×9 + 2×27 + 2×81, plus one

    /// All positions absent
    pub const ALL_ABSENT: Self = Self(1);

    /// Create a response from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value is outside 1-243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value >= 1 && value as usize <= RESPONSE_COUNT);
        Self(value)
    }

    /// Checked construction from a raw value
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        if value >= 1 && value as usize <= RESPONSE_COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the raw one-based value (1-243)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Zero-based dense slot (0-242)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }

    /// Build a response from its zero-based slot
    ///
    /// # Panics
    /// Panics in debug mode if index >= 243
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::new(index as u8 + 1)
    }

    /// Iterate over all 243 responses in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..RESPONSE_COUNT).map(Self::from_index)
    }

    /// Compare `guess` against `answer`
    ///
    /// Exact matches are marked first and consume their answer slot. Every
    /// other guess position then takes the leftmost unconsumed answer slot
    /// holding the same letter, if any. A letter therefore never earns more
    /// exact plus present marks than it has occurrences in the answer.
    ///
    /// # Examples
    /// ```
    /// use wordle_tree::core::{Response, Word};
    ///
    /// let guess = Word::new("nanny").unwrap();
    /// let answer = Word::new("wrung").unwrap();
    /// assert_eq!(Response::compute(guess, answer).to_string(), "---g-");
    /// ```
    #[must_use]
    // Allow: positions index guess, answer, marks and consumed together
    #[allow(clippy::needless_range_loop)]
    pub fn compute(guess: Word, answer: Word) -> Self {
        let guess = guess.letters();
        let answer = answer.letters();
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut consumed = [false; WORD_LEN];

        for i in 0..WORD_LEN {
            if guess[i] == answer[i] {
                marks[i] = Mark::Exact;
                consumed[i] = true;
            }
        }

        for i in 0..WORD_LEN {
            if marks[i] == Mark::Exact {
                continue;
            }
            if let Some(j) = (0..WORD_LEN).find(|&j| !consumed[j] && answer[j] == guess[i]) {
                marks[i] = Mark::Present;
                consumed[j] = true;
            }
        }

        Self::from_marks(marks)
    }

    /// Pack five marks into a response
    #[must_use]
    pub fn from_marks(marks: [Mark; WORD_LEN]) -> Self {
        let packed = marks
            .iter()
            .rev()
            .fold(0u8, |acc, &mark| acc * 3 + mark as u8);
        Self(packed + 1)
    }

    /// Unpack into per-position marks
    #[must_use]
    pub fn marks(self) -> [Mark; WORD_LEN] {
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut val = self.0 - 1;
        for mark in &mut marks {
            *mark = Mark::from_digit(val % 3);
            val /= 3;
        }
        marks
    }

    /// Check if every position is exact
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Count the exact positions
    #[must_use]
    pub fn count_exact(self) -> usize {
        self.marks().iter().filter(|&&m| m == Mark::Exact).count()
    }

    /// Count the present-elsewhere positions
    #[must_use]
    pub fn count_present(self) -> usize {
        self.marks().iter().filter(|&&m| m == Mark::Present).count()
    }
}

impl FromStr for Response {
    type Err = ResponseError;

    /// Parse a response such as `"gy--g"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| ResponseError::InvalidFormat {
            input: s.to_string(),
            reason,
        };

        let count = s.chars().count();
        if count != WORD_LEN {
            return Err(invalid(format!(
                "expected {WORD_LEN} characters, got {count}"
            )));
        }

        let mut marks = [Mark::Absent; WORD_LEN];
        for (slot, ch) in marks.iter_mut().zip(s.chars()) {
            *slot = Mark::from_symbol(ch)
                .ok_or_else(|| invalid(format!("unexpected character {ch:?}")))?;
        }

        Ok(Self::from_marks(marks))
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.marks().iter().map(|m| m.symbol()).collect();
        f.write_str(&text)
    }
}
