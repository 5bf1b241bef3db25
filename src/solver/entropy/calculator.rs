//! Remaining-uncertainty scores for partitions
//!
//! Unlike Shannon entropy of the response distribution, the score here is the
//! information still missing after the guess: the size-weighted average of
//! `log2(bucket size)`. Lower is better.

use crate::solver::partition::Partition;

/// Summary of how well a guess splits a candidate set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartitionMetrics {
    /// Expected bits still unknown after the guess
    pub entropy: f64,
    /// Number of distinct responses
    pub buckets: usize,
    /// Worst-case remaining candidates
    pub largest_bucket: usize,
    /// Buckets that pin down the answer
    pub singletons: usize,
    /// Expected number of remaining candidates
    pub expected_remaining: f64,
}

/// Expected remaining uncertainty in bits
///
/// `Σ nᵢ·log2(nᵢ) / Σ nᵢ` over the non-empty buckets. A partition of all
/// singletons scores exactly 0; so does an empty partition. A single bucket
/// holding everything scores `log2(n)`, the maximum.
///
/// # Examples
/// ```
/// use wordle_tree::solver::{ResponseTable, entropy, partition};
/// use wordle_tree::wordlists::Lexicon;
///
/// let lexicon = Lexicon::from_words(["aback", "abase", "abate", "abbey"], ["abbot"]).unwrap();
/// let table = ResponseTable::build(&lexicon);
/// let abbot = lexicon.guesses().index_of("abbot").unwrap();
///
/// // buckets of 2, 1 and 1: (2·log2 2) / 4
/// let split = partition(&table, abbot, &lexicon.all_answers());
/// assert!((entropy(&split) - 0.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn entropy(partition: &Partition) -> f64 {
    weighted_log_size(partition.bucket_sizes())
}

/// Size-weighted mean of `log2(size)` for a sequence of bucket sizes
#[must_use]
pub fn weighted_log_size(sizes: impl IntoIterator<Item = usize>) -> f64 {
    let (total, weighted) = sizes
        .into_iter()
        .filter(|&size| size > 0)
        .fold((0usize, 0.0f64), |(total, weighted), size| {
            let n = size as f64;
            (total + size, weighted + n * n.log2())
        });

    if total == 0 {
        return 0.0;
    }

    weighted / total as f64
}

/// Calculate the full set of metrics for a built partition
#[must_use]
pub fn calculate_metrics(partition: &Partition) -> PartitionMetrics {
    let total = partition.candidate_count();
    let expected_remaining = if total == 0 {
        0.0
    } else {
        partition
            .bucket_sizes()
            .map(|size| (size * size) as f64)
            .sum::<f64>()
            / total as f64
    };

    PartitionMetrics {
        entropy: entropy(partition),
        buckets: partition.bucket_count(),
        largest_bucket: partition.largest_bucket(),
        singletons: partition.bucket_sizes().filter(|&size| size == 1).count(),
        expected_remaining,
    }
}
