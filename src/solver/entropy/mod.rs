//! Entropy heuristic
//!
//! Scores partitions by the uncertainty they leave and ranks guesses by that
//! score. This is the ordering the tree search explores guesses in.

mod calculator;
mod ranker;

pub use calculator::{PartitionMetrics, calculate_metrics, entropy, weighted_log_size};
pub(crate) use ranker::{PARALLEL_THRESHOLD, rank};
pub use ranker::{RankedGuess, rank_guesses, rank_guesses_with};
