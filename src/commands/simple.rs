//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: one guess per line.

use crate::game::{Game, GameEvent, GameStatus};
use crate::output::{
    print_board, print_help, print_keyboard, print_outcome, print_settings, print_statistics,
};
use crate::storage::KeyValueStore;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// A line typed by the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Stats,
    Settings,
    /// Toggle hard mode
    Hard,
    NewGame,
    Guess(String),
}

impl Command {
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim().to_lowercase();
        match input.as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "help" | "?" => Self::Help,
            "stats" => Self::Stats,
            "settings" => Self::Settings,
            "hard" => Self::Hard,
            "new" => Self::NewGame,
            _ => Self::Guess(input),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn run_simple<S, R>(game: &mut Game<S>, rng: &mut R) -> io::Result<()>
where
    S: KeyValueStore,
    R: Rng + ?Sized,
{
    println!("\n╔════════════════════════════════════════╗");
    println!("║          Wordle - Simple Mode          ║");
    println!("╚════════════════════════════════════════╝");
    println!("\nType a five-letter guess and press Enter.");
    println!("Commands: 'help', 'stats', 'settings', 'hard', 'new', 'quit'\n");

    if game.session().row_index() > 0 {
        println!("{}", "Welcome back! Resuming your game.".bright_cyan());
    }

    loop {
        let settings = game.settings();
        print_board(game.session(), settings);
        if game.session().status() == GameStatus::InProgress {
            print_keyboard(game.session().keyboard(), settings);
        }

        let prompt = if game.session().status().is_terminal() {
            "Play again? (new/quit)"
        } else {
            "Guess"
        };
        let Some(line) = get_user_input(prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match Command::parse(&line) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::Help => print_help(settings),
            Command::Stats => print_statistics(game.statistics()),
            Command::Settings => print_settings(settings),
            Command::Hard => {
                let mut updated = settings;
                updated.hard_mode = !updated.hard_mode;
                match game.set_settings(updated) {
                    Ok(()) => print_settings(updated),
                    Err(e) => println!("{}", format!("❌ {e}").red()),
                }
            }
            Command::NewGame => {
                if game.new_game(rng) {
                    println!("\n🔄 New game started!");
                } else {
                    println!("{}", "Finish the current game first.".yellow());
                }
            }
            Command::Guess(word) if game.session().status().is_terminal() => {
                if word == "yes" || word == "y" {
                    game.new_game(rng);
                    println!("\n🔄 New game started!");
                } else {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
            Command::Guess(word) => match game.play_word(&word) {
                GameEvent::Rejected(e) => println!("{}", format!("❌ {e}").red()),
                GameEvent::Scored(submission) => {
                    if submission.outcome.is_terminal() {
                        print_board(game.session(), game.settings());
                        print_outcome(&submission.outcome, game.session().rows());
                        print_statistics(game.statistics());
                    } else {
                        print_outcome(&submission.outcome, game.session().rows());
                    }
                }
                GameEvent::LetterAdded(_) | GameEvent::LetterRemoved | GameEvent::Ignored => {}
            },
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
