//! Precomputed response table
//!
//! Holds `Response::compute(guesses[g], answers[a])` for every answer/guess
//! pair, one byte per cell. Cells are stored guess-major so the responses of
//! all answers to one guess form a contiguous column, which is exactly what a
//! partition build walks.

use crate::core::{Response, Word};
use crate::wordlists::Lexicon;
use rayon::prelude::*;

/// Dense answer × guess matrix of response codes
#[derive(Debug, Clone)]
pub struct ResponseTable {
    answer_count: usize,
    guess_count: usize,
    cells: Vec<u8>,
}

impl ResponseTable {
    /// Build the table for a lexicon's answers and guesses
    #[must_use]
    pub fn build(lexicon: &Lexicon) -> Self {
        Self::from_words(lexicon.answers().as_slice(), lexicon.guesses().as_slice())
    }

    /// Build the table for explicit word slices
    ///
    /// Columns are filled in parallel; every cell is independent.
    ///
    /// # Examples
    /// ```
    /// use wordle_tree::core::{Response, Word};
    /// use wordle_tree::solver::ResponseTable;
    ///
    /// let answers = [Word::new("wrung").unwrap()];
    /// let guesses = [Word::new("nanny").unwrap(), Word::new("wrung").unwrap()];
    /// let table = ResponseTable::from_words(&answers, &guesses);
    ///
    /// assert_eq!(table.response(0, 0).to_string(), "---g-");
    /// assert_eq!(table.response(0, 1), Response::PERFECT);
    /// ```
    #[must_use]
    pub fn from_words(answers: &[Word], guesses: &[Word]) -> Self {
        let mut cells = vec![0u8; answers.len() * guesses.len()];

        if !answers.is_empty() {
            cells
                .par_chunks_mut(answers.len())
                .zip(guesses.par_iter())
                .for_each(|(column, &guess)| {
                    for (cell, &answer) in column.iter_mut().zip(answers) {
                        *cell = Response::compute(guess, answer).value();
                    }
                });
        }

        Self {
            answer_count: answers.len(),
            guess_count: guesses.len(),
            cells,
        }
    }

    /// Response observed when `guess` is played against `answer`
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    #[must_use]
    pub fn response(&self, answer: usize, guess: usize) -> Response {
        Response::new(self.column(guess)[answer])
    }

    /// Raw response values of every answer to `guess`, indexed by answer
    ///
    /// # Panics
    /// Panics if `guess` is out of range.
    #[inline]
    #[must_use]
    pub fn column(&self, guess: usize) -> &[u8] {
        let start = guess * self.answer_count;
        &self.cells[start..start + self.answer_count]
    }

    #[inline]
    #[must_use]
    pub const fn answer_count(&self) -> usize {
        self.answer_count
    }

    #[inline]
    #[must_use]
    pub const fn guess_count(&self) -> usize {
        self.guess_count
    }
}
