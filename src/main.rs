//! Wordle Grid - CLI
//!
//! Wordle-style guessing game with TUI and plain CLI front ends.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::fs::OpenOptions;
use wordle_grid::{
    commands::{check_guess, run_simple},
    core::{ScoringMode, Word},
    game::{DEFAULT_ROWS, DEFAULT_TARGET, GameConfig, GameController},
    output::print_evaluation,
    wordlists::{Dictionary, loader::load_from_file},
};

/// File that receives log output while the TUI owns the terminal
const TUI_LOG_FILE: &str = "wordle_grid.log";

#[derive(Parser)]
#[command(
    name = "wordle_grid",
    about = "Wordle-style word guessing game on a 6x5 grid",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Target word to guess
    #[arg(short, long, global = true, default_value = DEFAULT_TARGET)]
    target: String,

    /// Pick the target at random from the dictionary (overrides --target)
    #[arg(long, global = true)]
    random_target: bool,

    /// Dictionary: 'builtin' (default, 13 words) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Number of guesses (grid rows)
    #[arg(long, global = true, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Do not credit repeated letters beyond their count in the target
    #[arg(long, global = true)]
    strict: bool,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type whole lines, no TUI)
    Simple,

    /// Score a single guess against the target
    Check {
        /// The guess to score
        guess: String,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    init_logging(cli.log_level, matches!(command, Commands::Play))?;

    let config = build_config(&cli)?;

    match command {
        Commands::Play => run_play_command(config),
        Commands::Simple => run_simple_command(config),
        Commands::Check { guess } => run_check_command(&guess, &config),
    }
}

/// Initialise `env_logger`; the TUI logs to a file so the screen stays clean
fn init_logging(level: LevelFilter, to_file: bool) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);

    if to_file && level != LevelFilter::Off {
        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(TUI_LOG_FILE)
            .with_context(|| format!("failed to open {TUI_LOG_FILE}"))?;
        builder.target(env_logger::Target::Pipe(Box::new(log_file)));
    }

    builder.init();
    Ok(())
}

/// Load the dictionary named by `-w`
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    match wordlist {
        "builtin" => Ok(Dictionary::builtin()),
        path => Ok(load_from_file(path)?),
    }
}

fn build_config(cli: &Cli) -> Result<GameConfig> {
    let dictionary = load_dictionary(&cli.wordlist)?;

    let config = if cli.random_target {
        GameConfig::with_random_target(dictionary, &mut rand::rng())
            .ok_or_else(|| anyhow!("cannot pick a random target from an empty dictionary"))?
    } else {
        let target = Word::new(&cli.target).context("invalid target word")?;
        GameConfig::new(target, dictionary)
    };

    let config = config
        .with_rows(cli.rows)
        .with_scoring(ScoringMode::from_strict(cli.strict));
    config.validate()?;
    Ok(config)
}

fn run_play_command(config: GameConfig) -> Result<()> {
    use wordle_grid::interactive::{App, run_tui};

    let game = GameController::new(config)?;
    run_tui(App::new(game))
}

fn run_simple_command(config: GameConfig) -> Result<()> {
    let mut game = GameController::new(config)?;
    run_simple(&mut game).map_err(|e| anyhow!(e))
}

fn run_check_command(guess: &str, config: &GameConfig) -> Result<()> {
    let result = check_guess(guess, config).map_err(|e| anyhow!(e))?;
    print_evaluation(&result.guess, &result.target, &result.evaluation);
    if !result.in_dictionary {
        println!("  (not in the word list, the game would reject this guess)");
    }
    Ok(())
}
