//! Guess ranking command
//!
//! Lists the guesses the tree search would explore first.

use crate::solver::{GuessPool, SearchError, Solver};

/// One ranked guess with its partition summary
pub struct RankEntry {
    pub word: String,
    pub score: f64,
    pub buckets: usize,
    pub largest_bucket: usize,
    pub is_answer: bool,
}

/// Result of ranking the guess pool against every answer
pub struct RankResult {
    pub candidates: usize,
    pub pool_size: usize,
    pub entries: Vec<RankEntry>,
}

/// Rank the pool against all answers and keep the `width` best
///
/// # Errors
///
/// Returns `SearchError::EmptyInput` if there are no answers and
/// `SearchError::ZeroWidth` for a zero width.
pub fn rank_top_guesses(
    solver: &Solver,
    pool: GuessPool,
    width: usize,
) -> Result<RankResult, SearchError> {
    let candidates = solver.all_answers();
    let guess_pool = solver.guess_pool(pool);
    let ranked = solver.rank_guesses(&candidates, &guess_pool, width)?;

    let entries = ranked
        .into_iter()
        .map(|entry| {
            let word = solver.guess_word(entry.guess);
            let metrics = solver.metrics(entry.guess, &candidates);
            RankEntry {
                word: word.to_string(),
                score: entry.score,
                buckets: metrics.buckets,
                largest_bucket: metrics.largest_bucket,
                is_answer: solver.lexicon().answers().contains(word),
            }
        })
        .collect();

    Ok(RankResult {
        candidates: candidates.len(),
        pool_size: guess_pool.len(),
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Lexicon;

    #[test]
    fn ranks_with_metrics() {
        let solver = Solver::new(
            Lexicon::from_words(["aback", "abase", "abate", "abbey"], ["zzzzz"]).unwrap(),
        );
        let result = rank_top_guesses(&solver, GuessPool::All, 10).unwrap();

        assert_eq!(result.candidates, 4);
        assert_eq!(result.pool_size, 5);
        let words: Vec<&str> = result.entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, ["abase", "abate", "aback", "abbey", "zzzzz"]);

        let first = &result.entries[0];
        assert_eq!(first.buckets, 4);
        assert_eq!(first.largest_bucket, 1);
        assert!(first.is_answer);

        let last = &result.entries[4];
        assert_eq!(last.buckets, 1);
        assert!(!last.is_answer);
        assert!((last.score - 2.0).abs() < 1e-12);
    }
}
