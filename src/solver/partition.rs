//! Reusable grouping of candidates by response
//!
//! A `Partition` owns one bucket per possible response plus the list of
//! responses whose bucket is currently non-empty. Rebuilding only clears the
//! buckets that were used, so one instance is allocated per search context
//! and refilled on every guess without freeing its storage.

use super::table::ResponseTable;
use crate::core::{RESPONSE_COUNT, Response};

/// Candidate answer indices bucketed by the response they give to one guess
#[derive(Debug, Clone)]
pub struct Partition {
    buckets: Vec<Vec<usize>>,
    occupied: Vec<Response>,
}

impl Default for Partition {
    fn default() -> Self {
        Self::new()
    }
}

impl Partition {
    #[must_use]
    pub fn new() -> Self {
        Self {
            buckets: vec![Vec::new(); RESPONSE_COUNT],
            occupied: Vec::with_capacity(RESPONSE_COUNT),
        }
    }

    /// Empty every bucket, keeping allocations
    pub fn reset(&mut self) {
        for response in self.occupied.drain(..) {
            self.buckets[response.index()].clear();
        }
    }

    /// Group `candidates` (answer indices) by their response to `guess`
    ///
    /// After this call the non-empty buckets are disjoint and together hold
    /// exactly `candidates`, each bucket in candidate order.
    pub fn build(&mut self, table: &ResponseTable, guess: usize, candidates: &[usize]) {
        self.reset();
        let column = table.column(guess);

        for &answer in candidates {
            let response = Response::new(column[answer]);
            let bucket = &mut self.buckets[response.index()];
            if bucket.is_empty() {
                self.occupied.push(response);
            }
            bucket.push(answer);
        }
    }

    /// Non-empty buckets in the order their responses first appeared
    pub fn iter(&self) -> impl Iterator<Item = (Response, &[usize])> + '_ {
        self.occupied
            .iter()
            .map(|&response| (response, self.buckets[response.index()].as_slice()))
    }

    /// Bucket for `response`, empty if no candidate gave it
    #[inline]
    #[must_use]
    pub fn bucket_for(&self, response: Response) -> &[usize] {
        &self.buckets[response.index()]
    }

    /// Sizes of the non-empty buckets
    pub fn bucket_sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.iter().map(|(_, bucket)| bucket.len())
    }

    /// Number of non-empty buckets
    #[inline]
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.occupied.len()
    }

    /// Total number of candidates across all buckets
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.bucket_sizes().sum()
    }

    /// Size of the largest bucket (0 when empty)
    #[must_use]
    pub fn largest_bucket(&self) -> usize {
        self.bucket_sizes().max().unwrap_or(0)
    }

    /// True when every candidate landed in the same bucket, i.e. the guess
    /// tells the candidates apart not at all
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.occupied.len() == 1
    }
}

/// Build a fresh partition of `candidates` by `guess`
///
/// Convenience for one-off use; hot loops should keep a `Partition` and call
/// [`Partition::build`] instead.
#[must_use]
pub fn partition(table: &ResponseTable, guess: usize, candidates: &[usize]) -> Partition {
    let mut partition = Partition::new();
    partition.build(table, guess, candidates);
    partition
}
