//! Tree search configuration

use std::time::Duration;

/// Knobs for [`TreeSearch`](super::TreeSearch)
///
/// `width` trades fidelity for runtime: each node explores only the `width`
/// best guesses by entropy. Larger widths approach exhaustive search at
/// super-linear cost, and a width at least the guess pool size is exhaustive.
/// The result is an approximation either way; no optimality is claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Guesses explored per node
    pub width: usize,
    /// Deepest recursion allowed before giving up
    pub max_depth: usize,
    /// Score guesses on the rayon pool
    pub parallel: bool,
    /// Abandon a guess once its partial average cannot beat the best so far
    pub prune: bool,
    /// Once exceeded, remaining nodes are explored greedily (width 1)
    pub time_limit: Option<Duration>,
}

impl SearchConfig {
    pub const DEFAULT_WIDTH: usize = 10;
    pub const DEFAULT_MAX_DEPTH: usize = 16;

    #[must_use]
    pub const fn new(width: usize) -> Self {
        Self {
            width,
            max_depth: Self::DEFAULT_MAX_DEPTH,
            parallel: true,
            prune: true,
            time_limit: None,
        }
    }

    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[must_use]
    pub const fn with_prune(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    #[must_use]
    pub const fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.width, 10);
        assert_eq!(config.max_depth, 16);
        assert!(config.parallel);
        assert!(config.prune);
        assert_eq!(config.time_limit, None);
    }

    #[test]
    fn builders_override_fields() {
        let config = SearchConfig::new(3)
            .with_max_depth(4)
            .with_parallel(false)
            .with_prune(false)
            .with_time_limit(Duration::from_secs(2));
        assert_eq!(config.width, 3);
        assert_eq!(config.max_depth, 4);
        assert!(!config.parallel);
        assert!(!config.prune);
        assert_eq!(config.time_limit, Some(Duration::from_secs(2)));
    }
}
