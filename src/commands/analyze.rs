//! Word analysis command
//!
//! Shows how a single guess splits the answer list.

use crate::core::Response;
use crate::solver::{PartitionMetrics, Solver};
use crate::wordlists::LexiconError;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub metrics: PartitionMetrics,
    pub total_candidates: usize,
    /// Largest buckets first, each with its answers
    pub largest: Vec<(Response, Vec<String>)>,
}

/// Partition every answer by `word` and keep the `show` largest buckets
///
/// # Errors
///
/// Returns `LexiconError::NotFound` if the word is not an accepted guess.
pub fn analyze_word(
    solver: &Solver,
    word: &str,
    show: usize,
) -> Result<AnalysisResult, LexiconError> {
    let guess = solver.guess_index(word)?;
    let candidates = solver.all_answers();
    let partition = solver.partition(guess, &candidates);

    let mut buckets: Vec<(Response, &[usize])> = partition.iter().collect();
    // Stable: equal sizes keep first-seen order
    buckets.sort_by(|a, b| b.1.len().cmp(&a.1.len()));

    let largest = buckets
        .into_iter()
        .take(show)
        .map(|(response, bucket)| {
            let words = bucket
                .iter()
                .map(|&answer| solver.answer_word(answer).to_string())
                .collect();
            (response, words)
        })
        .collect();

    Ok(AnalysisResult {
        word: solver.guess_word(guess).to_string(),
        metrics: solver.metrics(guess, &candidates),
        total_candidates: candidates.len(),
        largest,
    })
}
