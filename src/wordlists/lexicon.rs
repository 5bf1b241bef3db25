//! Indexed word lists
//!
//! A `Lexicon` holds the answer list and the guess list. Each list is sorted
//! and duplicate-free; a word's index is its sort position and never changes
//! for the lifetime of the lexicon.

use crate::core::{Word, WordError};
use rustc_hash::FxHashMap;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or querying a lexicon
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("word {0:?} not in word list")]
    NotFound(String),

    #[error("{origin}:{line}: {error}")]
    Load {
        origin: String,
        line: usize,
        #[source]
        error: WordError,
    },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Sorted, duplicate-free list of words with a reverse index
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashMap<Word, usize>,
}

impl WordList {
    /// Sort and dedupe `words`, then assign indices by position
    #[must_use]
    pub fn new(mut words: Vec<Word>) -> Self {
        words.sort_unstable();
        words.dedup();

        let index = words
            .iter()
            .enumerate()
            .map(|(i, &word)| (word, i))
            .collect();

        Self { words, index }
    }

    /// Index of `word` in this list
    ///
    /// # Errors
    /// Returns `LexiconError::NotFound` if the word is absent (or is not a
    /// well-formed word at all).
    pub fn index_of(&self, word: &str) -> Result<usize, LexiconError> {
        Word::new(word)
            .ok()
            .and_then(|w| self.position(w))
            .ok_or_else(|| LexiconError::NotFound(word.to_string()))
    }

    /// Index of an already validated word
    #[inline]
    #[must_use]
    pub fn position(&self, word: Word) -> Option<usize> {
        self.index.get(&word).copied()
    }

    /// Word stored at `index`
    ///
    /// # Panics
    /// Panics if `index` was not produced by this list.
    #[inline]
    #[must_use]
    pub fn word_at(&self, index: usize) -> Word {
        self.words[index]
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: Word) -> bool {
        self.index.contains_key(&word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in index order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = Word> + '_ {
        self.words.iter().copied()
    }

    /// Every index of this list, ascending
    #[must_use]
    pub fn all_indices(&self) -> Vec<usize> {
        (0..self.words.len()).collect()
    }
}

/// Candidate answers plus the (larger) list of accepted guesses
#[derive(Debug, Clone)]
pub struct Lexicon {
    answers: WordList,
    guesses: WordList,
}

impl Lexicon {
    /// Build from parsed words. Guesses become `answers ∪ extra_guesses`.
    #[must_use]
    pub fn new(answers: Vec<Word>, extra_guesses: Vec<Word>) -> Self {
        let mut guesses = extra_guesses;
        guesses.extend_from_slice(&answers);

        Self {
            answers: WordList::new(answers),
            guesses: WordList::new(guesses),
        }
    }

    /// Build from in-memory strings, validating every entry
    ///
    /// # Errors
    /// Returns `LexiconError::Load` naming the list and 1-based position of
    /// the first malformed entry.
    ///
    /// # Examples
    /// ```
    /// use wordle_tree::wordlists::Lexicon;
    ///
    /// let lexicon = Lexicon::from_words(["abate", "aback"], ["zesty"]).unwrap();
    /// assert_eq!(lexicon.answers().index_of("abate").unwrap(), 1);
    /// assert_eq!(lexicon.guesses().len(), 3);
    /// ```
    pub fn from_words<A, E>(answers: A, extra_guesses: E) -> Result<Self, LexiconError>
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        Ok(Self::new(
            parse_list(answers, "answers")?,
            parse_list(extra_guesses, "guesses")?,
        ))
    }

    #[inline]
    #[must_use]
    pub const fn answers(&self) -> &WordList {
        &self.answers
    }

    #[inline]
    #[must_use]
    pub const fn guesses(&self) -> &WordList {
        &self.guesses
    }

    /// Every answer index, the root candidate set
    #[must_use]
    pub fn all_answers(&self) -> Vec<usize> {
        self.answers.all_indices()
    }

    /// Every guess index, the full guess pool
    #[must_use]
    pub fn all_guesses(&self) -> Vec<usize> {
        self.guesses.all_indices()
    }

    /// Guess indices of the words that are also answers
    #[must_use]
    pub fn answer_guesses(&self) -> Vec<usize> {
        self.answers
            .iter()
            .filter_map(|word| self.guesses.position(word))
            .collect()
    }
}

fn parse_list<I>(entries: I, origin: &str) -> Result<Vec<Word>, LexiconError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            Word::new(entry.as_ref()).map_err(|error| LexiconError::Load {
                origin: origin.to_string(),
                line: i + 1,
                error,
            })
        })
        .collect()
}
