//! Display functions for command results

use super::formatters::{colorize_guess, entropy_bar, response_to_emoji};
use crate::commands::{AnalysisResult, BestGuessResult, RankResult, ScoreResult};
use colored::Colorize;

fn header(title: &str, subject: Option<&str>) {
    println!("\n{}", "═".repeat(60).cyan());
    match subject {
        Some(subject) => println!(
            " {} {} ",
            title.bright_cyan().bold(),
            subject.to_uppercase().bright_yellow().bold()
        ),
        None => println!(" {} ", title.bright_cyan().bold()),
    }
    println!("{}", "═".repeat(60).cyan());
}

/// Print the result of a best-guess search
pub fn print_best_result(result: &BestGuessResult) {
    header("BEST GUESS:", Some(&result.guess));

    println!(
        "\n📊 Against {} answers with {} guesses (width {}):",
        result.candidates, result.pool_size, result.width
    );
    println!(
        "   Expected guesses: {}",
        format!("{:.4}", result.average).bright_yellow().bold()
    );
    println!(
        "   Total guesses:    {:.0}",
        result.average * result.candidates as f64
    );

    println!("\n🔎 {}", "Search:".bright_cyan().bold());
    println!("   Nodes expanded:   {}", result.stats.nodes);
    println!("   Guesses scored:   {}", result.stats.guesses_scored);
    println!("   Degenerate:       {}", result.stats.degenerate_skipped);
    println!("   Pruned:           {}", result.stats.pruned);
    println!("   Infeasible:       {}", result.stats.infeasible);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if !result.complete {
        println!(
            "\n{}",
            "⚠ Time limit reached; later nodes were searched greedily"
                .yellow()
                .bold()
        );
    }
}

/// Print the ranked guesses
pub fn print_rank_result(result: &RankResult) {
    header("TOP GUESSES", None);

    println!(
        "\n📊 Ranked {} guesses against {} answers:\n",
        result.pool_size, result.candidates
    );
    for (i, entry) in result.entries.iter().enumerate() {
        let word = entry.word.to_uppercase();
        let word = if entry.is_answer {
            word.green().bold()
        } else {
            word.normal()
        };
        println!(
            "   {:>3}. {}  [{}] {:.4} bits  {:>3} buckets, largest {}",
            i + 1,
            word,
            entropy_bar(entry.score, result.candidates, 20).green(),
            entry.score,
            entry.buckets,
            entry.largest_bucket
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    header("ENTROPY ANALYSIS:", Some(&result.word));

    let metrics = &result.metrics;
    let bar = entropy_bar(metrics.entropy, result.total_candidates, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Remaining:   [{}] {}",
        bar.green(),
        format!("{:.3} bits", metrics.entropy).bright_yellow()
    );
    println!("   Buckets:     {}", metrics.buckets);
    println!("   Singletons:  {}", metrics.singletons);
    println!("   Worst case:  {} candidates", metrics.largest_bucket);
    println!(
        "   Expected:    {:.1} candidates remain",
        metrics.expected_remaining
    );

    if !result.largest.is_empty() {
        println!("\n📈 {}", "Largest buckets:".bright_cyan().bold());
        for (response, words) in &result.largest {
            let preview: Vec<&str> = words.iter().take(8).map(String::as_str).collect();
            let more = words.len().saturating_sub(preview.len());
            let suffix = if more > 0 {
                format!(" (+{more} more)")
            } else {
                String::new()
            };
            println!(
                "   {} {:>4}  {}{}",
                response_to_emoji(*response),
                words.len(),
                preview.join(" "),
                suffix.bright_black()
            );
        }
    }
}

/// Print a scored guess
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\n{}  {}  {}",
        colorize_guess(result.guess, result.response),
        response_to_emoji(result.response),
        result.response.to_string().bright_black()
    );
    println!(
        "   code {} (answer {})",
        result.response.value(),
        result.answer.to_string().to_uppercase()
    );
}
