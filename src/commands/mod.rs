//! Command implementations

pub mod analyze;
pub mod best;
pub mod rank;
pub mod score;

pub use analyze::{AnalysisResult, analyze_word};
pub use best::{BestGuessResult, find_best_guess};
pub use rank::{RankEntry, RankResult, rank_top_guesses};
pub use score::{ScoreResult, score_words};
