//! Solver context
//!
//! Owns the lexicon and its response table. Build one per word list at
//! startup and pass it around by reference; everything else borrows from it.

use super::config::SearchConfig;
use super::entropy::{PartitionMetrics, RankedGuess, calculate_metrics, rank_guesses};
use super::error::SearchError;
use super::partition::{Partition, partition};
use super::search::{SearchOutcome, TreeSearch};
use super::table::ResponseTable;
use crate::core::{Response, Word};
use crate::wordlists::{Lexicon, LexiconError};

/// Which guesses the search may play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuessPool {
    /// Every accepted guess
    #[default]
    All,
    /// Only words that can themselves be answers
    Answers,
}

/// Main Wordle solver
///
/// Immutable after construction; safe to share across threads.
pub struct Solver {
    lexicon: Lexicon,
    table: ResponseTable,
}

impl Solver {
    /// Index the lexicon and build its response table
    #[must_use]
    pub fn new(lexicon: Lexicon) -> Self {
        let table = ResponseTable::build(&lexicon);
        Self { lexicon, table }
    }

    #[inline]
    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    #[inline]
    #[must_use]
    pub const fn table(&self) -> &ResponseTable {
        &self.table
    }

    /// Guess indices for a pool selection
    #[must_use]
    pub fn guess_pool(&self, pool: GuessPool) -> Vec<usize> {
        match pool {
            GuessPool::All => self.lexicon.all_guesses(),
            GuessPool::Answers => self.lexicon.answer_guesses(),
        }
    }

    /// Every answer index
    #[must_use]
    pub fn all_answers(&self) -> Vec<usize> {
        self.lexicon.all_answers()
    }

    /// Look up a guess word
    ///
    /// # Errors
    ///
    /// Returns `LexiconError::NotFound` if the word is not an accepted guess.
    pub fn guess_index(&self, word: &str) -> Result<usize, LexiconError> {
        self.lexicon.guesses().index_of(word)
    }

    /// Look up an answer word
    ///
    /// # Errors
    ///
    /// Returns `LexiconError::NotFound` if the word is not a candidate answer.
    pub fn answer_index(&self, word: &str) -> Result<usize, LexiconError> {
        self.lexicon.answers().index_of(word)
    }

    #[must_use]
    pub fn guess_word(&self, guess: usize) -> Word {
        self.lexicon.guesses().word_at(guess)
    }

    #[must_use]
    pub fn answer_word(&self, answer: usize) -> Word {
        self.lexicon.answers().word_at(answer)
    }

    /// Response to a guess when the answer is known
    #[must_use]
    pub fn response(&self, answer: usize, guess: usize) -> Response {
        self.table.response(answer, guess)
    }

    /// Partition `candidates` by their responses to `guess`
    #[must_use]
    pub fn partition(&self, guess: usize, candidates: &[usize]) -> Partition {
        partition(&self.table, guess, candidates)
    }

    /// Metrics of `guess` against `candidates`
    #[must_use]
    pub fn metrics(&self, guess: usize, candidates: &[usize]) -> PartitionMetrics {
        calculate_metrics(&self.partition(guess, candidates))
    }

    /// Top `width` guesses by remaining entropy
    ///
    /// # Errors
    ///
    /// See [`rank_guesses`].
    pub fn rank_guesses(
        &self,
        candidates: &[usize],
        guess_pool: &[usize],
        width: usize,
    ) -> Result<Vec<RankedGuess>, SearchError> {
        rank_guesses(&self.table, candidates, guess_pool, width)
    }

    /// Tree search for the best guess over `candidates`
    ///
    /// # Errors
    ///
    /// See [`TreeSearch::run`].
    pub fn search(
        &self,
        candidates: &[usize],
        guess_pool: &[usize],
        config: SearchConfig,
    ) -> Result<SearchOutcome, SearchError> {
        TreeSearch::new(&self.table, guess_pool, config).run(candidates)
    }
}
