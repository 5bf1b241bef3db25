//! Errors raised by ranking and tree search

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("candidate set is empty")]
    EmptyInput,

    #[error("search width must be at least 1")]
    ZeroWidth,

    #[error("no guess in the pool distinguishes the {candidates} remaining candidates")]
    NoDistinguishingGuess { candidates: usize },

    #[error("search exceeded the maximum depth of {max_depth}")]
    DepthExceeded { max_depth: usize },
}
