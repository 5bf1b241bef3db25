//! Best first guess command
//!
//! Runs the tree search over every answer and reports the winning guess.

use crate::solver::{GuessPool, SearchConfig, SearchError, SearchStats, Solver};
use std::time::{Duration, Instant};

/// Result of a best-guess search
pub struct BestGuessResult {
    pub guess: String,
    pub average: f64,
    pub candidates: usize,
    pub pool_size: usize,
    pub width: usize,
    pub stats: SearchStats,
    pub complete: bool,
    pub duration: Duration,
}

/// Search for the guess minimizing the expected number of guesses
///
/// # Errors
///
/// Returns the search error if the answer list is empty, the width is zero,
/// or the pool cannot separate some candidate set.
pub fn find_best_guess(
    solver: &Solver,
    pool: GuessPool,
    config: SearchConfig,
) -> Result<BestGuessResult, SearchError> {
    let candidates = solver.all_answers();
    let guess_pool = solver.guess_pool(pool);

    let start = Instant::now();
    let outcome = solver.search(&candidates, &guess_pool, config)?;

    Ok(BestGuessResult {
        guess: solver.guess_word(outcome.result.guess).to_string(),
        average: outcome.result.average,
        candidates: candidates.len(),
        pool_size: guess_pool.len(),
        width: config.width,
        stats: outcome.stats,
        complete: outcome.is_complete(),
        duration: start.elapsed(),
    })
}
