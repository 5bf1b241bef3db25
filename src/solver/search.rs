//! Width-bounded tree search for the expected number of guesses
//!
//! At every node the `width` best guesses by entropy are expanded. Each guess
//! splits the candidates into buckets by response; buckets of one or two
//! candidates have closed-form costs and larger buckets are searched
//! recursively. The guess with the lowest expected total number of guesses
//! wins, the first one found on ties.
//!
//! Nothing is memoized. Scratch partitions form a stack with one level per
//! recursion depth, so a node can walk its own buckets while its children
//! rebuild theirs.

use super::config::SearchConfig;
use super::entropy::{PARALLEL_THRESHOLD, RankedGuess, rank};
use super::error::SearchError;
use super::partition::Partition;
use super::table::ResponseTable;
use std::time::Instant;

/// Cost of a bucket holding exactly two candidates: guess one of them, which
/// is right on the first try half the time and needs a second guess otherwise
const PAIR_COST: f64 = 3.0;

/// Best guess for a candidate set and its expected number of guesses
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// Index into the guess list
    pub guess: usize,
    /// Expected guesses to finish, counting this one
    pub average: f64,
}

/// Work counters for one search run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes expanded
    pub nodes: usize,
    /// Guess partitions built for ranking
    pub guesses_scored: usize,
    /// Ranked guesses skipped because they separate nothing
    pub degenerate_skipped: usize,
    /// Ranked guesses abandoned early by pruning
    pub pruned: usize,
    /// Ranked guesses dropped because a bucket below them could not be
    /// solved within the depth limit or split by any explored guess
    pub infeasible: usize,
    /// The time limit passed and later nodes were explored greedily
    pub deadline_hit: bool,
}

/// Result of a [`TreeSearch::run`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    pub result: SearchResult,
    pub stats: SearchStats,
}

impl SearchOutcome {
    /// False when the time limit cut the search short
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        !self.stats.deadline_hit
    }
}

/// Reusable tree search over one table and guess pool
pub struct TreeSearch<'a> {
    table: &'a ResponseTable,
    guess_pool: &'a [usize],
    config: SearchConfig,
    levels: Vec<Partition>,
}

impl<'a> TreeSearch<'a> {
    /// Prepare a search; scratch for every depth level is allocated here
    #[must_use]
    pub fn new(table: &'a ResponseTable, guess_pool: &'a [usize], config: SearchConfig) -> Self {
        Self {
            table,
            guess_pool,
            config,
            levels: (0..config.max_depth).map(|_| Partition::new()).collect(),
        }
    }

    /// Find the guess minimizing the expected number of guesses to solve
    /// `candidates` (answer indices)
    ///
    /// # Errors
    ///
    /// - `EmptyInput` if `candidates` is empty
    /// - `ZeroWidth` if the configured width is 0
    /// - `NoDistinguishingGuess` if no explored guess splits `candidates`
    ///   into buckets the search can solve
    /// - `DepthExceeded` if every explored guess needs more than `max_depth`
    ///   levels
    ///
    /// A guess whose subtree fails either way is dropped; the error is only
    /// returned when no explored guess at the root survives.
    pub fn run(&mut self, candidates: &[usize]) -> Result<SearchOutcome, SearchError> {
        if candidates.is_empty() {
            return Err(SearchError::EmptyInput);
        }
        if self.config.width == 0 {
            return Err(SearchError::ZeroWidth);
        }

        let mut stats = SearchStats::default();

        let result = if let &[answer] = candidates {
            self.determined(answer)?
        } else {
            let node = Node {
                table: self.table,
                guess_pool: self.guess_pool,
                config: self.config,
                deadline: self
                    .config
                    .time_limit
                    .and_then(|limit| Instant::now().checked_add(limit)),
            };
            node.search(&mut self.levels, &mut stats, candidates)?
        };

        Ok(SearchOutcome { result, stats })
    }

    /// A single candidate is already known; play it if the pool allows
    fn determined(&self, answer: usize) -> Result<SearchResult, SearchError> {
        self.guess_pool
            .iter()
            .copied()
            .find(|&guess| self.table.response(answer, guess).is_perfect())
            .map(|guess| SearchResult {
                guess,
                average: 1.0,
            })
            .ok_or(SearchError::NoDistinguishingGuess { candidates: 1 })
    }
}

/// Immutable per-run state shared by every recursion level
struct Node<'a> {
    table: &'a ResponseTable,
    guess_pool: &'a [usize],
    config: SearchConfig,
    deadline: Option<Instant>,
}

impl Node<'_> {
    fn past_deadline(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    fn search(
        &self,
        levels: &mut [Partition],
        stats: &mut SearchStats,
        candidates: &[usize],
    ) -> Result<SearchResult, SearchError> {
        let Some((scratch, deeper)) = levels.split_first_mut() else {
            return Err(SearchError::DepthExceeded {
                max_depth: self.config.max_depth,
            });
        };
        stats.nodes += 1;

        let width = if self.past_deadline() {
            stats.deadline_hit = true;
            1
        } else {
            self.config.width
        };
        let parallel = self.config.parallel
            && candidates.len() * self.guess_pool.len() >= PARALLEL_THRESHOLD;

        let ranked = rank(
            self.table,
            candidates,
            self.guess_pool,
            width,
            Some(&mut *scratch),
            parallel,
        )?;
        stats.guesses_scored += self.guess_pool.len();

        let count = candidates.len() as f64;
        let mut best: Option<SearchResult> = None;
        let mut failure: Option<SearchError> = None;

        'guesses: for RankedGuess { guess, .. } in ranked {
            scratch.build(self.table, guess, candidates);
            if scratch.is_degenerate() {
                stats.degenerate_skipped += 1;
                continue;
            }

            let mut total = 0.0;
            for (response, bucket) in scratch.iter() {
                total += match bucket.len() {
                    1 if response.is_perfect() => 0.0,
                    1 => 1.0,
                    2 => PAIR_COST,
                    size => match self.search(deeper, stats, bucket) {
                        Ok(child) => child.average * size as f64,
                        Err(
                            error @ (SearchError::DepthExceeded { .. }
                            | SearchError::NoDistinguishingGuess { .. }),
                        ) => {
                            stats.infeasible += 1;
                            failure.get_or_insert(error);
                            continue 'guesses;
                        }
                        Err(error) => return Err(error),
                    },
                };

                // Bucket costs are non-negative, so the average only grows
                if self.config.prune
                    && let Some(best) = &best
                    && total / count + 1.0 >= best.average
                {
                    stats.pruned += 1;
                    continue 'guesses;
                }
            }

            let average = total / count + 1.0;
            if best.is_none_or(|b| average < b.average) {
                best = Some(SearchResult { guess, average });
            }
        }

        best.ok_or_else(|| {
            failure.unwrap_or(SearchError::NoDistinguishingGuess {
                candidates: candidates.len(),
            })
        })
    }
}

/// Run a tree search with default settings at the given width
///
/// # Errors
///
/// See [`TreeSearch::run`].
///
/// # Examples
/// ```
/// use wordle_tree::solver::{ResponseTable, search};
/// use wordle_tree::wordlists::Lexicon;
///
/// let lexicon = Lexicon::from_words(["aback", "abase", "abate", "abbey"], Vec::<&str>::new()).unwrap();
/// let table = ResponseTable::build(&lexicon);
///
/// let best = search(&table, &lexicon.all_answers(), &lexicon.all_guesses(), 4).unwrap();
/// assert_eq!(lexicon.guesses().word_at(best.guess).as_str(), "abase");
/// assert!((best.average - 1.75).abs() < 1e-12);
/// ```
pub fn search(
    table: &ResponseTable,
    candidates: &[usize],
    guess_pool: &[usize],
    width: usize,
) -> Result<SearchResult, SearchError> {
    TreeSearch::new(table, guess_pool, SearchConfig::new(width))
        .run(candidates)
        .map(|outcome| outcome.result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Lexicon;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::seq::IndexedRandom;
    use std::time::Duration;

    const EPS: f64 = 1e-9;

    fn setup(answers: &[&str], extra: &[&str]) -> (Lexicon, ResponseTable) {
        let lexicon = Lexicon::from_words(answers, extra).unwrap();
        let table = ResponseTable::build(&lexicon);
        (lexicon, table)
    }

    fn four() -> (Lexicon, ResponseTable) {
        setup(&["aback", "abase", "abate", "abbey"], &[])
    }

    fn guess_index(lexicon: &Lexicon, word: &str) -> usize {
        lexicon.guesses().index_of(word).unwrap()
    }

    fn random_lexicon(seed: u64, answers: usize, extra: usize) -> (Lexicon, ResponseTable) {
        let mut rng = StdRng::seed_from_u64(seed);
        let alphabet = b"abcdeg";
        let mut words = |count: usize| -> Vec<String> {
            (0..count)
                .map(|_| {
                    (0..5)
                        .map(|_| char::from(*alphabet.choose(&mut rng).unwrap()))
                        .collect()
                })
                .collect()
        };
        let answer_words = words(answers);
        let extra_words = words(extra);
        let lexicon = Lexicon::from_words(&answer_words, &extra_words).unwrap();
        let table = ResponseTable::build(&lexicon);
        (lexicon, table)
    }

    #[test]
    fn four_word_example() {
        let (lexicon, table) = four();
        let result =
            search(&table, &lexicon.all_answers(), &lexicon.all_guesses(), 4).unwrap();

        assert_eq!(result.guess, guess_index(&lexicon, "abase"));
        assert!((result.average - 1.75).abs() < EPS);
    }

    #[test]
    fn equal_averages_keep_first_ranked_guess() {
        // abase and abate both reach 1.75 with equal entropy; pool order decides
        let (lexicon, table) = four();
        let abase = guess_index(&lexicon, "abase");
        let abate = guess_index(&lexicon, "abate");
        let candidates = lexicon.all_answers();

        let forward = search(&table, &candidates, &[abase, abate], 2).unwrap();
        let backward = search(&table, &candidates, &[abate, abase], 2).unwrap();

        assert_eq!(forward.guess, abase);
        assert_eq!(backward.guess, abate);
        assert!((forward.average - backward.average).abs() < EPS);
    }

    #[test]
    fn single_candidate_is_played_directly() {
        let (lexicon, table) = four();
        let abate = lexicon.answers().index_of("abate").unwrap();

        let result = search(&table, &[abate], &lexicon.all_guesses(), 3).unwrap();
        assert_eq!(result.guess, guess_index(&lexicon, "abate"));
        assert!((result.average - 1.0).abs() < EPS);
    }

    #[test]
    fn single_candidate_missing_from_pool() {
        let (lexicon, table) = setup(&["aback", "abase"], &["zzzzz"]);
        let zzzzz = guess_index(&lexicon, "zzzzz");

        assert_eq!(
            search(&table, &[0], &[zzzzz], 3),
            Err(SearchError::NoDistinguishingGuess { candidates: 1 })
        );
    }

    #[test]
    fn two_candidates_average_one_and_a_half() {
        let (lexicon, table) = four();
        let result = search(&table, &[0, 3], &lexicon.all_guesses(), 4).unwrap();
        assert!((result.average - 1.5).abs() < EPS);
        assert_eq!(result.guess, guess_index(&lexicon, "aback"));
    }

    #[test]
    fn sequential_elimination_chain() {
        // Every guess only confirms or rules out itself: 1 + 2 + 3 + 4 + 5 over 5
        let (lexicon, table) = setup(&["aaaaa", "bbbbb", "ccccc", "ddddd", "eeeee"], &[]);
        let result =
            search(&table, &lexicon.all_answers(), &lexicon.all_guesses(), 5).unwrap();

        assert!((result.average - 3.0).abs() < EPS);
        assert_eq!(result.guess, guess_index(&lexicon, "aaaaa"));
    }

    #[test]
    fn degenerate_guess_is_never_chosen() {
        let (lexicon, table) = setup(&["aaaaa", "bbbbb", "ccccc", "ddddd"], &["zzzzz", "abcde"]);
        let pool = [guess_index(&lexicon, "zzzzz"), guess_index(&lexicon, "abcde")];

        let outcome = TreeSearch::new(&table, &pool, SearchConfig::new(2))
            .run(&lexicon.all_answers())
            .unwrap();

        assert_eq!(outcome.result.guess, pool[1]);
        assert!((outcome.result.average - 2.0).abs() < EPS);
        assert_eq!(outcome.stats.degenerate_skipped, 1);
    }

    #[test]
    fn pool_that_separates_nothing() {
        let (lexicon, table) = setup(&["aaaaa", "bbbbb", "ccccc"], &["zzzzz"]);
        let pool = [guess_index(&lexicon, "zzzzz")];

        assert_eq!(
            search(&table, &lexicon.all_answers(), &pool, 1),
            Err(SearchError::NoDistinguishingGuess { candidates: 3 })
        );
    }

    #[test]
    fn empty_candidates_rejected() {
        let (lexicon, table) = four();
        assert_eq!(
            search(&table, &[], &lexicon.all_guesses(), 4),
            Err(SearchError::EmptyInput)
        );
    }

    #[test]
    fn zero_width_rejected() {
        let (lexicon, table) = four();
        assert_eq!(
            search(&table, &lexicon.all_answers(), &lexicon.all_guesses(), 0),
            Err(SearchError::ZeroWidth)
        );
    }

    #[test]
    fn depth_limit_fails_when_every_guess_is_too_deep() {
        let (lexicon, table) = setup(&["aaaaa", "bbbbb", "ccccc", "ddddd", "eeeee"], &[]);
        let pool = lexicon.all_guesses();
        let config = SearchConfig::new(5).with_max_depth(2);

        assert_eq!(
            TreeSearch::new(&table, &pool, config).run(&lexicon.all_answers()),
            Err(SearchError::DepthExceeded { max_depth: 2 })
        );

        let config = SearchConfig::new(5).with_max_depth(3);
        assert!(TreeSearch::new(&table, &pool, config)
            .run(&lexicon.all_answers())
            .is_ok());
    }

    #[test]
    fn too_deep_alternative_is_dropped() {
        // abcde splits every answer into a singleton; the chain guesses need
        // three levels and only two are allowed
        let (lexicon, table) =
            setup(&["aaaaa", "bbbbb", "ccccc", "ddddd", "eeeee"], &["abcde"]);
        let pool = lexicon.all_guesses();
        let candidates = lexicon.all_answers();
        let abcde = guess_index(&lexicon, "abcde");

        for prune in [true, false] {
            let narrow = SearchConfig::new(1).with_max_depth(2).with_prune(prune);
            let wide = SearchConfig::new(pool.len()).with_max_depth(2).with_prune(prune);

            let narrow = TreeSearch::new(&table, &pool, narrow).run(&candidates).unwrap();
            let wide = TreeSearch::new(&table, &pool, wide).run(&candidates).unwrap();

            assert_eq!(narrow.result.guess, abcde);
            assert_eq!(wide.result, narrow.result);
            assert!((wide.result.average - 2.0).abs() < EPS);
            assert!(wide.stats.infeasible > 0);
            assert_eq!(narrow.stats.infeasible, 0);
        }
    }

    #[test]
    fn width_is_monotone_under_a_depth_limit() {
        let (lexicon, table) =
            setup(&["aaaaa", "bbbbb", "ccccc", "ddddd", "eeeee"], &["abcde"]);
        let pool = lexicon.all_guesses();
        let candidates = lexicon.all_answers();

        let mut previous = f64::INFINITY;
        for width in 1..=pool.len() {
            let config = SearchConfig::new(width).with_max_depth(2);
            let outcome = TreeSearch::new(&table, &pool, config).run(&candidates).unwrap();
            assert!(outcome.result.average <= previous + EPS, "width {width}");
            previous = outcome.result.average;
        }
    }

    #[test]
    fn width_is_monotone() {
        for seed in 0..4 {
            let (lexicon, table) = random_lexicon(seed, 16, 6);
            let candidates = lexicon.all_answers();
            let pool = lexicon.all_guesses();

            let mut previous = f64::INFINITY;
            for width in 1..=pool.len() + 1 {
                let result = search(&table, &candidates, &pool, width).unwrap();
                assert!(
                    result.average <= previous + EPS,
                    "seed {seed}: width {width} gave {} after {previous}",
                    result.average
                );
                previous = result.average;
            }
        }
    }

    #[test]
    fn width_beyond_pool_is_exhaustive() {
        let (lexicon, table) = random_lexicon(42, 14, 4);
        let candidates = lexicon.all_answers();
        let pool = lexicon.all_guesses();

        let exact = search(&table, &candidates, &pool, pool.len()).unwrap();
        let wider = search(&table, &candidates, &pool, pool.len() * 3).unwrap();
        assert_eq!(exact, wider);
    }

    #[test]
    fn pruning_and_parallelism_do_not_change_the_result() {
        let (lexicon, table) = random_lexicon(5, 18, 8);
        let candidates = lexicon.all_answers();
        let pool = lexicon.all_guesses();

        let reference = TreeSearch::new(
            &table,
            &pool,
            SearchConfig::new(6).with_prune(false).with_parallel(false),
        )
        .run(&candidates)
        .unwrap();

        for config in [
            SearchConfig::new(6).with_parallel(false),
            SearchConfig::new(6).with_prune(false),
            SearchConfig::new(6),
        ] {
            let outcome = TreeSearch::new(&table, &pool, config).run(&candidates).unwrap();
            assert_eq!(outcome.result, reference.result);
        }
        assert_eq!(reference.stats.pruned, 0);
    }

    #[test]
    fn expired_time_limit_still_returns_a_result() {
        let (lexicon, table) = random_lexicon(9, 16, 6);
        let candidates = lexicon.all_answers();
        let pool = lexicon.all_guesses();

        let full = search(&table, &candidates, &pool, pool.len()).unwrap();
        let outcome = TreeSearch::new(
            &table,
            &pool,
            SearchConfig::new(pool.len()).with_time_limit(Duration::ZERO),
        )
        .run(&candidates)
        .unwrap();

        assert!(!outcome.is_complete());
        assert!(outcome.result.average + EPS >= full.average);
    }

    #[test]
    fn search_is_reusable() {
        let (lexicon, table) = four();
        let pool = lexicon.all_guesses();
        let mut tree = TreeSearch::new(&table, &pool, SearchConfig::new(4));

        let first = tree.run(&lexicon.all_answers()).unwrap();
        let second = tree.run(&lexicon.all_answers()).unwrap();
        assert_eq!(first, second);
        assert!(first.is_complete());
        assert_eq!(first.stats.nodes, 1);
    }
}
