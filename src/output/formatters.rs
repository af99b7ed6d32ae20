//! Formatting utilities shared by the line-mode and TUI front ends

use crate::core::Verdict;
use crate::game::Row;

/// On-screen keyboard layout, one string per row
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// How-to-play text
pub const HELP_LINES: &[&str] = &[
    "Guess the word in six tries or less.",
    "Each guess must be a valid five-letter word.",
    "Press Enter to submit a guess and Backspace to make corrections.",
    "After each guess the tiles and keys change color to show how close you were:",
];

/// One line per verdict for the help legend
#[must_use]
pub const fn verdict_legend(verdict: Verdict, high_contrast: bool) -> &'static str {
    match (verdict, high_contrast) {
        (Verdict::Correct, false) => "Green: letter is in the correct spot",
        (Verdict::Correct, true) => "Orange: letter is in the correct spot",
        (Verdict::Present, false) => "Yellow: letter is in the word but in the wrong spot",
        (Verdict::Present, true) => "Blue: letter is in the word but in the wrong spot",
        (Verdict::Absent, _) => "Grey: letter is not in the word in any spot",
    }
}

/// Background color of a tile or key as RGB
///
/// `None` is an unrevealed tile or an unused key. High contrast swaps
/// green/yellow for orange/blue.
#[must_use]
pub const fn verdict_rgb(
    verdict: Option<Verdict>,
    high_contrast: bool,
    dark_theme: bool,
) -> (u8, u8, u8) {
    match (verdict, high_contrast) {
        (Some(Verdict::Correct), false) => (106, 170, 100),
        (Some(Verdict::Correct), true) => (245, 121, 58),
        (Some(Verdict::Present), false) => (201, 180, 88),
        (Some(Verdict::Present), true) => (133, 192, 249),
        (Some(Verdict::Absent), _) if dark_theme => (58, 58, 60),
        (Some(Verdict::Absent), _) => (120, 124, 126),
        (None, _) if dark_theme => (129, 131, 132),
        (None, _) => (211, 214, 218),
    }
}

/// Player-facing message for a win on row `attempts`
#[must_use]
pub const fn celebration(attempts: usize) -> &'static str {
    match attempts {
        1 => "Genius!",
        2 => "Magnificent!",
        3 => "Impressive!",
        4 => "Splendid!",
        5 => "Great!",
        _ => "Phew!",
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Clamped to [0, width]
        ((value / max) * width as f64).round().clamp(0.0, width as f64) as usize
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Width of a distribution bar as a percentage of the tallest bar
#[must_use]
pub fn distribution_percent(count: u32, max: u32) -> u16 {
    if max == 0 {
        return 0;
    }
    (f64::from(count) / f64::from(max) * 100.0).round() as u16
}

/// Emoji grid of the submitted rows, one line per row
#[must_use]
pub fn emoji_grid(rows: &[Row]) -> String {
    rows.iter()
        .map(|row| row.evaluation().to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn distribution_relative_to_tallest() {
        assert_eq!(distribution_percent(0, 0), 0);
        assert_eq!(distribution_percent(4, 4), 100);
        assert_eq!(distribution_percent(1, 3), 33);
        assert_eq!(distribution_percent(2, 3), 67);
    }

    #[test]
    fn high_contrast_changes_hint_colors_only() {
        for verdict in [Verdict::Correct, Verdict::Present] {
            assert_ne!(
                verdict_rgb(Some(verdict), false, false),
                verdict_rgb(Some(verdict), true, false)
            );
        }
        assert_eq!(
            verdict_rgb(Some(Verdict::Absent), false, true),
            verdict_rgb(Some(Verdict::Absent), true, true)
        );
    }

    #[test]
    fn keyboard_covers_alphabet() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.iter().flat_map(|row| row.chars()).collect();
        letters.sort_unstable();
        assert_eq!(letters.into_iter().collect::<String>(), "abcdefghijklmnopqrstuvwxyz");
    }

    #[test]
    fn emoji_grid_one_line_per_row() {
        let secret = Word::new("crane").unwrap();
        let rows = [
            Row::score(Word::new("trace").unwrap(), &secret),
            Row::score(Word::new("crane").unwrap(), &secret),
        ];
        assert_eq!(emoji_grid(&rows), "⬜🟩🟩🟨🟩\n🟩🟩🟩🟩🟩");
    }
}
