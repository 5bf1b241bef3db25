//! Wordle tree search - CLI
//!
//! Finds the first guess that minimizes the expected number of guesses by
//! searching the most promising guesses at every node of the game tree.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;
use wordle_tree::{
    commands::{analyze_word, find_best_guess, rank_top_guesses, score_words},
    output::{
        print_analysis_result, print_best_result, print_rank_result, print_score_result, spinner,
    },
    solver::{GuessPool, SearchConfig, Solver},
    wordlists,
};

#[derive(Parser)]
#[command(
    name = "wordle_tree",
    about = "Width-bounded tree search for the best Wordle strategy",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Answer list, one word per line
    #[arg(long, global = true, default_value = "data/answers.txt")]
    answers: PathBuf,

    /// Extra accepted guesses, one word per line
    #[arg(long, global = true, default_value = "data/guesses.txt")]
    guesses: PathBuf,

    /// Guesses expanded at each node
    #[arg(short, long, global = true, default_value_t = SearchConfig::DEFAULT_WIDTH)]
    width: usize,

    /// Deepest recursion allowed
    #[arg(long, global = true, default_value_t = SearchConfig::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Seconds before the search falls back to greedy expansion
    #[arg(long, global = true)]
    time_limit: Option<f64>,

    /// Rank guesses on the current thread only
    #[arg(long, global = true)]
    sequential: bool,

    /// Guesses the search may play
    #[arg(long, global = true, value_enum, default_value_t = PoolArg::All)]
    pool: PoolArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum PoolArg {
    /// Every accepted guess
    All,
    /// Only possible answers
    Answers,
}

impl From<PoolArg> for GuessPool {
    fn from(arg: PoolArg) -> Self {
        match arg {
            PoolArg::All => Self::All,
            PoolArg::Answers => Self::Answers,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Search for the best first guess
    Best,

    /// List the top guesses by remaining entropy
    Rank,

    /// Show how one guess splits the answers
    Analyze {
        /// Word to analyze
        word: String,

        /// Number of largest buckets to list
        #[arg(short, long, default_value = "5")]
        show: usize,
    },

    /// Print the response a guess gets from an answer
    Score {
        guess: String,
        answer: String,
    },
}

impl Cli {
    fn search_config(&self) -> Result<SearchConfig> {
        let time_limit = self
            .time_limit
            .map(Duration::try_from_secs_f64)
            .transpose()
            .context("invalid --time-limit")?;

        let mut config = SearchConfig::new(self.width)
            .with_max_depth(self.max_depth)
            .with_parallel(!self.sequential);
        if let Some(limit) = time_limit {
            config = config.with_time_limit(limit);
        }
        Ok(config)
    }

    fn load_solver(&self) -> Result<Solver> {
        let lexicon = wordlists::load(&self.answers, &self.guesses)
            .context("failed to load word lists")?;

        let pb = spinner(format!(
            "Scoring {} guesses against {} answers",
            lexicon.guesses().len(),
            lexicon.answers().len()
        ));
        let solver = Solver::new(lexicon);
        pb.finish_and_clear();

        Ok(solver)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Best => run_best_command(&cli),
        Commands::Rank => run_rank_command(&cli),
        Commands::Analyze { word, show } => run_analyze_command(&cli, word, *show),
        Commands::Score { guess, answer } => run_score_command(guess, answer),
    }
}

fn run_best_command(cli: &Cli) -> Result<()> {
    let config = cli.search_config()?;
    let solver = cli.load_solver()?;

    let pb = spinner(format!("Searching with width {}", config.width));
    let result = find_best_guess(&solver, cli.pool.into(), config);
    pb.finish_and_clear();

    print_best_result(&result.context("search failed")?);
    Ok(())
}

fn run_rank_command(cli: &Cli) -> Result<()> {
    let solver = cli.load_solver()?;
    let result =
        rank_top_guesses(&solver, cli.pool.into(), cli.width).context("ranking failed")?;
    print_rank_result(&result);
    Ok(())
}

fn run_analyze_command(cli: &Cli, word: &str, show: usize) -> Result<()> {
    let solver = cli.load_solver()?;
    let result = analyze_word(&solver, word, show)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_score_command(guess: &str, answer: &str) -> Result<()> {
    let result = score_words(guess, answer)?;
    print_score_result(&result);
    Ok(())
}
