//! Word lists for Wordle solving
//!
//! Loads the answer and guess lists and indexes them into a [`Lexicon`].

mod lexicon;
pub mod loader;

pub use lexicon::{Lexicon, LexiconError, WordList};
pub use loader::load;
