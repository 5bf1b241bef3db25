//! Wordle tree search
//!
//! Estimates the best Wordle strategy by a width-bounded search of the game
//! tree: at each node only the guesses that leave the least entropy are
//! expanded, and the guess with the lowest expected number of guesses wins.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_tree::solver::{GuessPool, SearchConfig, Solver};
//! use wordle_tree::wordlists::Lexicon;
//!
//! let lexicon = Lexicon::from_words(["aback", "abase", "abate", "abbey"], ["abbot"]).unwrap();
//! let solver = Solver::new(lexicon);
//!
//! let pool = solver.guess_pool(GuessPool::All);
//! let outcome = solver
//!     .search(&solver.all_answers(), &pool, SearchConfig::new(4))
//!     .unwrap();
//!
//! assert_eq!(solver.guess_word(outcome.result.guess).as_str(), "abase");
//! assert!((outcome.result.average - 1.75).abs() < 1e-12);
//! ```

// Words and responses
pub mod core;

// Response table, ranking and tree search
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
