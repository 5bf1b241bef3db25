//! Formatting utilities for terminal output

use crate::core::{Mark, Response, Word};
use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Format a response as emoji squares
#[must_use]
pub fn response_to_emoji(response: Response) -> String {
    response
        .marks()
        .iter()
        .map(|mark| match mark {
            Mark::Absent => '⬜',
            Mark::Present => '🟨',
            Mark::Exact => '🟩',
        })
        .collect()
}

/// Color each letter of a guess by its mark
#[must_use]
pub fn colorize_guess(guess: Word, response: Response) -> String {
    guess
        .letters()
        .iter()
        .zip(response.marks())
        .map(|(&letter, mark)| {
            let tile = format!(" {} ", char::from(letter.to_ascii_uppercase()));
            let tile: ColoredString = match mark {
                Mark::Absent => tile.white().on_bright_black(),
                Mark::Present => tile.black().on_yellow(),
                Mark::Exact => tile.black().on_green(),
            };
            tile.bold().to_string()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Remaining entropy as a bar scaled to the worst case for `candidates`
#[must_use]
pub fn entropy_bar(entropy: f64, candidates: usize, width: usize) -> String {
    let max_entropy = (candidates.max(1) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

/// Spinner for long-running steps; hidden when stderr is not a terminal
#[must_use]
pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed_precise}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
