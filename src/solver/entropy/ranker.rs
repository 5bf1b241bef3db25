//! Entropy-based guess ranking
//!
//! Scores every guess in a pool by the uncertainty its partition leaves and
//! keeps the best `width`. Ties keep pool order, and the parallel path gives
//! each rayon worker a private scratch partition, so the ranking is identical
//! however many threads run it.

use super::calculator::entropy;
use crate::solver::error::SearchError;
use crate::solver::partition::Partition;
use crate::solver::table::ResponseTable;
use rayon::prelude::*;

/// Below this many table lookups a ranking is not worth spreading over rayon
pub(crate) const PARALLEL_THRESHOLD: usize = 1 << 14;

/// A guess index with its remaining-entropy score (lower is better)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedGuess {
    pub guess: usize,
    pub score: f64,
}

/// Rank `guess_pool` against `candidates` and keep the `width` best
///
/// Uses the rayon pool for large inputs.
///
/// # Errors
///
/// Returns `SearchError::EmptyInput` for an empty candidate set and
/// `SearchError::ZeroWidth` for a zero width.
///
/// # Examples
/// ```
/// use wordle_tree::solver::{ResponseTable, rank_guesses};
/// use wordle_tree::wordlists::Lexicon;
///
/// let lexicon = Lexicon::from_words(["aback", "abase", "abate", "abbey"], Vec::<&str>::new()).unwrap();
/// let table = ResponseTable::build(&lexicon);
/// let all = lexicon.all_answers();
///
/// let ranked = rank_guesses(&table, &all, &lexicon.all_guesses(), 2).unwrap();
/// let names: Vec<String> = ranked
///     .iter()
///     .map(|r| lexicon.guesses().word_at(r.guess).to_string())
///     .collect();
/// assert_eq!(names, ["abase", "abate"]);
/// ```
pub fn rank_guesses(
    table: &ResponseTable,
    candidates: &[usize],
    guess_pool: &[usize],
    width: usize,
) -> Result<Vec<RankedGuess>, SearchError> {
    let parallel = candidates.len() * guess_pool.len() >= PARALLEL_THRESHOLD;
    rank(table, candidates, guess_pool, width, None, parallel)
}

/// Rank sequentially, reusing `scratch` for every partition
///
/// # Errors
///
/// Same as [`rank_guesses`].
pub fn rank_guesses_with(
    scratch: &mut Partition,
    table: &ResponseTable,
    candidates: &[usize],
    guess_pool: &[usize],
    width: usize,
) -> Result<Vec<RankedGuess>, SearchError> {
    rank(table, candidates, guess_pool, width, Some(scratch), false)
}

/// Shared ranking core used by both entry points and by tree search
pub(crate) fn rank(
    table: &ResponseTable,
    candidates: &[usize],
    guess_pool: &[usize],
    width: usize,
    scratch: Option<&mut Partition>,
    parallel: bool,
) -> Result<Vec<RankedGuess>, SearchError> {
    if candidates.is_empty() {
        return Err(SearchError::EmptyInput);
    }
    if width == 0 {
        return Err(SearchError::ZeroWidth);
    }

    let score = |partition: &mut Partition, guess: usize| {
        partition.build(table, guess, candidates);
        RankedGuess {
            guess,
            score: entropy(partition),
        }
    };

    let mut ranked: Vec<RankedGuess> = match scratch {
        Some(partition) if !parallel => guess_pool
            .iter()
            .map(|&guess| score(partition, guess))
            .collect(),
        None if !parallel => {
            let mut partition = Partition::new();
            guess_pool
                .iter()
                .map(|&guess| score(&mut partition, guess))
                .collect()
        }
        _ => guess_pool
            .par_iter()
            .map_init(Partition::new, |partition, &guess| score(partition, guess))
            .collect(),
    };

    // Stable: equal scores keep pool order
    ranked.sort_by(|a, b| a.score.total_cmp(&b.score));
    ranked.truncate(width);

    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Lexicon;

    fn setup() -> (Lexicon, ResponseTable) {
        let lexicon = Lexicon::from_words(
            ["aback", "abase", "abate", "abbey"],
            ["zzzzz", "abbot"],
        )
        .unwrap();
        let table = ResponseTable::build(&lexicon);
        (lexicon, table)
    }

    fn names(lexicon: &Lexicon, ranked: &[RankedGuess]) -> Vec<String> {
        ranked
            .iter()
            .map(|r| lexicon.guesses().word_at(r.guess).to_string())
            .collect()
    }

    #[test]
    fn ranks_ascending_with_pool_order_ties() {
        let (lexicon, table) = setup();
        let ranked =
            rank_guesses(&table, &lexicon.all_answers(), &lexicon.all_guesses(), 10).unwrap();

        assert_eq!(
            names(&lexicon, &ranked),
            ["abase", "abate", "aback", "abbey", "abbot", "zzzzz"]
        );
        assert!(ranked.windows(2).all(|w| w[0].score <= w[1].score));
        assert!((ranked[5].score - 2.0).abs() < 1e-12);
    }

    #[test]
    fn truncates_to_width() {
        let (lexicon, table) = setup();
        let ranked =
            rank_guesses(&table, &lexicon.all_answers(), &lexicon.all_guesses(), 3).unwrap();
        assert_eq!(names(&lexicon, &ranked), ["abase", "abate", "aback"]);
    }

    #[test]
    fn tie_break_follows_given_pool_order() {
        let (lexicon, table) = setup();
        let abase = lexicon.guesses().index_of("abase").unwrap();
        let abate = lexicon.guesses().index_of("abate").unwrap();

        let ranked = rank_guesses(&table, &lexicon.all_answers(), &[abate, abase], 1).unwrap();
        assert_eq!(ranked[0].guess, abate);
    }

    #[test]
    fn parallel_matches_sequential() {
        let (lexicon, table) = setup();
        let candidates = lexicon.all_answers();
        let pool = lexicon.all_guesses();

        let sequential = rank(&table, &candidates, &pool, 4, None, false).unwrap();
        let parallel = rank(&table, &candidates, &pool, 4, None, true).unwrap();
        let mut scratch = Partition::new();
        let reused = rank_guesses_with(&mut scratch, &table, &candidates, &pool, 4).unwrap();

        assert_eq!(sequential, parallel);
        assert_eq!(sequential, reused);
    }

    #[test]
    fn empty_candidates_rejected() {
        let (lexicon, table) = setup();
        assert_eq!(
            rank_guesses(&table, &[], &lexicon.all_guesses(), 3),
            Err(SearchError::EmptyInput)
        );
    }

    #[test]
    fn zero_width_rejected() {
        let (lexicon, table) = setup();
        assert_eq!(
            rank_guesses(&table, &lexicon.all_answers(), &lexicon.all_guesses(), 0),
            Err(SearchError::ZeroWidth)
        );
    }

    #[test]
    fn empty_pool_ranks_nothing() {
        let (lexicon, table) = setup();
        let ranked = rank_guesses(&table, &lexicon.all_answers(), &[], 3).unwrap();
        assert!(ranked.is_empty());
    }
}
