//! Wordle strategy search
//!
//! Response table, partitions, the entropy heuristic and the width-bounded
//! tree search built on top of them.

mod config;
mod engine;
pub mod entropy;
mod error;
mod partition;
mod search;
mod table;

pub use config::SearchConfig;
pub use engine::{GuessPool, Solver};
pub use entropy::{PartitionMetrics, RankedGuess, entropy, rank_guesses};
pub use error::SearchError;
pub use partition::{Partition, partition};
pub use search::{SearchOutcome, SearchResult, SearchStats, TreeSearch, search};
pub use table::ResponseTable;

use crate::wordlists::Lexicon;

/// Build the response table for a lexicon
///
/// # Examples
/// ```
/// use wordle_tree::solver::build_response_table;
/// use wordle_tree::wordlists::Lexicon;
///
/// let lexicon = Lexicon::from_words(["wrung"], ["nanny"]).unwrap();
/// let table = build_response_table(&lexicon);
/// assert_eq!((table.answer_count(), table.guess_count()), (1, 2));
/// ```
#[must_use]
pub fn build_response_table(lexicon: &Lexicon) -> ResponseTable {
    ResponseTable::build(lexicon)
}
