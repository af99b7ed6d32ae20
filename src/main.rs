//! Wordle - CLI
//!
//! Terminal Wordle with TUI and line modes, hard mode, persistent progress
//! and statistics.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use wordle_game::{
    commands::{SettingsChange, reset_statistics, run_simple, show_statistics, update_settings},
    config::{GameConfig, LOG_FILE_NAME, WordlistSource, default_data_dir, has_saved_data},
    game::Game,
    logging,
    output::print_settings,
    storage::FileStore,
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory for saved games, statistics, settings and the log file
    #[arg(long, global = true, env = "WORDLE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: WordlistSource,

    /// Fraction of the word list secrets are drawn from, in (0, 1]
    #[arg(short, long, global = true, default_value_t = 1.0, value_parser = parse_difficulty)]
    difficulty: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Show statistics
    Stats {
        /// Clear all statistics
        #[arg(long)]
        reset: bool,
    },

    /// Show or change settings
    Settings {
        /// Revealed hints must be used in subsequent guesses
        #[arg(long)]
        hard_mode: Option<bool>,

        /// Dark color theme
        #[arg(long)]
        dark_theme: Option<bool>,

        /// Orange/blue tiles for improved color vision
        #[arg(long)]
        high_contrast: Option<bool>,
    },
}

fn parse_difficulty(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(format!("difficulty must be in (0, 1], got {value}"))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = GameConfig {
        data_dir: cli.data_dir.unwrap_or_else(default_data_dir),
        wordlist: cli.wordlist,
        difficulty: cli.difficulty,
    };

    // Logging is best effort; the game runs without it
    let _guard = match logging::init(&config.data_dir, LOG_FILE_NAME) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: logging disabled: {e:#}");
            None
        }
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Stats { reset } => {
            let mut store = config.store();
            if reset {
                reset_statistics(&mut store);
            }
            show_statistics(&store);
            Ok(())
        }
        Commands::Settings {
            hard_mode,
            dark_theme,
            high_contrast,
        } => {
            let change = SettingsChange {
                hard_mode,
                dark_theme,
                high_contrast,
            };
            let settings = update_settings(&mut config.store(), change)?;
            print_settings(settings);
            Ok(())
        }
    }
}

fn start_game(config: &GameConfig, rng: &mut StdRng) -> Result<Game<FileStore>> {
    let dictionary = config.load_dictionary()?;
    tracing::info!(
        "Loaded {} words; data in {}",
        dictionary.answers().len(),
        config.data_dir.display()
    );

    Game::start(dictionary, config.store(), config.difficulty, rng)
        .context("failed to start game")
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let mut rng = StdRng::from_os_rng();
    let mut game = start_game(config, &mut rng)?;
    run_simple(&mut game, &mut rng)?;
    Ok(())
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let first_run = !has_saved_data(&config.data_dir);
    let mut rng = StdRng::from_os_rng();
    let game = start_game(config, &mut rng)?;

    let app = App::new(game, rng, first_run);
    run_tui(app)
}
