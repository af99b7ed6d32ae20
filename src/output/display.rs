//! Line-mode display functions

use super::formatters::{
    HELP_LINES, KEYBOARD_ROWS, celebration, create_progress_bar, distribution_percent,
    emoji_grid, verdict_legend, verdict_rgb,
};
use crate::core::{Verdict, WORD_LENGTH};
use crate::game::{GameSession, MAX_ATTEMPTS, Outcome, Row};
use crate::keyboard::KeyboardState;
use crate::settings::Settings;
use crate::stats::Statistics;
use colored::{ColoredString, Colorize};

/// A letter on a colored tile
fn tile(letter: char, verdict: Option<Verdict>, settings: Settings) -> ColoredString {
    let (r, g, b) = verdict_rgb(verdict, settings.high_contrast, settings.dark_theme);
    let text = format!(" {} ", letter.to_ascii_uppercase());
    if verdict.is_some() {
        text.on_truecolor(r, g, b).white().bold()
    } else {
        text.truecolor(r, g, b).bold()
    }
}

fn format_row(row: &Row, settings: Settings) -> String {
    row.guess()
        .text()
        .chars()
        .zip(row.evaluation().verdicts())
        .map(|(letter, &verdict)| tile(letter, Some(verdict), settings).to_string())
        .collect()
}

/// Print all six rows: committed rows, the guess being composed, then blanks
pub fn print_board(session: &GameSession, settings: Settings) {
    println!();
    for row in session.rows() {
        println!("   {}", format_row(row, settings));
    }

    let mut remaining = MAX_ATTEMPTS - session.row_index();
    if !session.status().is_terminal() && remaining > 0 {
        let composed: String = session
            .buffer()
            .chars()
            .chain(std::iter::repeat('·'))
            .take(WORD_LENGTH)
            .map(|letter| tile(letter, None, settings).to_string())
            .collect();
        println!("   {composed}");
        remaining -= 1;
    }

    for _ in 0..remaining {
        let blank: String = (0..WORD_LENGTH)
            .map(|_| tile('·', None, settings).to_string())
            .collect();
        println!("   {}", blank.dimmed());
    }
    println!();
}

/// Print the keyboard with every used key colored by its best verdict
pub fn print_keyboard(keyboard: &KeyboardState, settings: Settings) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: String = row
            .bytes()
            .map(|letter| {
                let verdict = keyboard.state_of(letter);
                let key = format!(" {} ", char::from(letter).to_ascii_uppercase());
                match verdict {
                    Some(_) => {
                        let (r, g, b) =
                            verdict_rgb(verdict, settings.high_contrast, settings.dark_theme);
                        key.on_truecolor(r, g, b).white().to_string()
                    }
                    None => key.normal().to_string(),
                }
            })
            .collect();
        println!("{}{keys}", " ".repeat(indent * 2 + 1));
    }
    println!();
}

/// Print how the game ended
pub fn print_outcome(outcome: &Outcome, rows: &[Row]) {
    match outcome {
        Outcome::Continue { remaining } => {
            println!("{}", format!("{remaining} guesses left").bright_black());
        }
        Outcome::Won { attempts } => {
            println!("\n{}", "═".repeat(40).bright_cyan());
            println!("  {}", celebration(*attempts).bright_green().bold());
            println!(
                "  Solved in {} {}",
                attempts.to_string().bright_cyan().bold(),
                if *attempts == 1 { "guess" } else { "guesses" }
            );
            println!("{}", "═".repeat(40).bright_cyan());
            println!("\n{}\n", emoji_grid(rows));
        }
        Outcome::Lost { solution } => {
            println!("\n{}", "═".repeat(40).red());
            println!("  {}", "Out of guesses. Game over!".red().bold());
            println!(
                "  The right word was: {}",
                solution.text().to_uppercase().bright_yellow().bold()
            );
            println!("{}", "═".repeat(40).red());
            println!("\n{}\n", emoji_grid(rows));
        }
    }
}

/// Print the statistics summary and guess distribution
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    println!(
        "\n   {:>6} {:>6} {:>6} {:>8} {:>8}",
        stats.games_played().to_string().bold(),
        stats.games_won().to_string().bold(),
        format!("{:.0}", stats.win_percentage()).bold(),
        stats.current_streak().to_string().bold(),
        stats.max_streak().to_string().bold()
    );
    println!(
        "   {:>6} {:>6} {:>6} {:>8} {:>8}",
        "Played", "Won", "Win %", "Streak", "Max"
    );

    if stats.games_won() > 0 {
        println!("   Average guesses: {:.2}", stats.average_guesses());
    }

    println!("\n{}", "Guess distribution:".bright_cyan().bold());
    let bars = stats.distribution();
    let tallest = bars.iter().map(|bar| bar.count).max().unwrap_or(0);
    for bar in bars {
        let filled = create_progress_bar(
            f64::from(distribution_percent(bar.count, tallest)),
            100.0,
            30,
        );
        let filled = if bar.highlight {
            filled.green()
        } else {
            filled.bright_black()
        };
        println!("   {}: {filled} {}", bar.row, bar.count);
    }
    println!("   {}: {}", "X".red(), stats.failed());
    println!();
}

fn on_off(enabled: bool) -> ColoredString {
    if enabled { "on".green().bold() } else { "off".bright_black() }
}

/// Print current settings
pub fn print_settings(settings: Settings) {
    println!("\n{}", "Settings".bright_cyan().bold());
    println!(
        "   Hard mode:     {}  {}",
        on_off(settings.hard_mode),
        "revealed hints must be used in later guesses".bright_black()
    );
    println!("   Dark theme:    {}", on_off(settings.dark_theme));
    println!(
        "   High contrast: {}  {}",
        on_off(settings.high_contrast),
        "for improved color vision".bright_black()
    );
    println!();
}

/// Print how to play, with a tile legend in the current palette
pub fn print_help(settings: Settings) {
    println!("\n{}", "HOW TO PLAY".bright_cyan().bold());
    for line in HELP_LINES {
        println!("   {line}");
    }
    for verdict in [Verdict::Correct, Verdict::Present, Verdict::Absent] {
        println!(
            "   {} {}",
            tile('w', Some(verdict), settings),
            verdict_legend(verdict, settings.high_contrast)
        );
    }
    println!();
}
