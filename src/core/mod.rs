//! Core domain types for Wordle
//!
//! Words and response codes. Pure values with clear algebraic properties;
//! everything that needs a word list or a table lives in `wordlists` and
//! `solver`.

mod response;
mod word;

pub use response::{Mark, RESPONSE_COUNT, Response, ResponseError};
pub use word::{WORD_LEN, Word, WordError};
