//! Guess acceptance rules
//!
//! A guess must be complete, be a known word and, in hard mode, reuse every
//! letter already revealed as present or correct.

use crate::core::{WORD_LENGTH, Word};
use crate::keyboard::KeyboardState;
use crate::wordlists::Dictionary;
use thiserror::Error;

/// Reasons a submitted guess is rejected
///
/// All rejections are recoverable: the session is left untouched and the
/// player can edit the guess and resubmit. `Display` yields the message shown
/// to the player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Not enough letters")]
    IncompleteGuess,

    #[error("Not in word list: {}", .0.to_uppercase())]
    UnknownWord(String),

    #[error("Hard mode: guess must contain {}", .letter.to_ascii_uppercase())]
    HardModeViolation { letter: char },
}

/// Check a composed guess before it is scored
///
/// Checks run in order: length, dictionary membership, hard mode.
///
/// # Errors
/// Returns the first rule the guess breaks.
pub fn validate_guess(
    buffer: &str,
    dictionary: &Dictionary,
    keyboard: &KeyboardState,
    hard_mode: bool,
) -> Result<Word, GuessError> {
    if buffer.len() != WORD_LENGTH {
        return Err(GuessError::IncompleteGuess);
    }

    let guess = Word::new(buffer).map_err(|_| GuessError::IncompleteGuess)?;

    if !dictionary.contains(&guess) {
        return Err(GuessError::UnknownWord(guess.text().to_string()));
    }

    if hard_mode {
        check_hard_mode(keyboard, &guess)?;
    }

    Ok(guess)
}

/// Require every hinted letter to appear somewhere in `guess`
///
/// Positions are not checked: a letter known to be correct at position 2 is
/// satisfied by that letter anywhere in the guess.
///
/// # Errors
/// Returns `GuessError::HardModeViolation` naming the first missing letter
/// in alphabetical order.
pub fn check_hard_mode(keyboard: &KeyboardState, guess: &Word) -> Result<(), GuessError> {
    match keyboard
        .hinted_letters()
        .into_iter()
        .find(|&letter| !guess.has_letter(letter))
    {
        Some(letter) => Err(GuessError::HardModeViolation {
            letter: char::from(letter),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Evaluation, Verdict};
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> Dictionary {
        Dictionary::new(words_from_slice(&["crane", "trace", "audio", "slate", "tabby"])).unwrap()
    }

    #[test]
    fn short_buffer_is_incomplete() {
        let result = validate_guess("cran", &dictionary(), &KeyboardState::new(), false);
        assert_eq!(result, Err(GuessError::IncompleteGuess));
    }

    #[test]
    fn unknown_word_rejected() {
        let result = validate_guess("zzzzz", &dictionary(), &KeyboardState::new(), false);
        assert_eq!(result, Err(GuessError::UnknownWord("zzzzz".to_string())));
        assert_eq!(result.unwrap_err().to_string(), "Not in word list: ZZZZZ");
    }

    #[test]
    fn incomplete_checked_before_dictionary() {
        let result = validate_guess("zz", &dictionary(), &KeyboardState::new(), true);
        assert_eq!(result, Err(GuessError::IncompleteGuess));
    }

    #[test]
    fn hard_mode_requires_hinted_letters() {
        let secret = Word::new("trace").unwrap();
        let first = Word::new("crane").unwrap();
        let mut keyboard = KeyboardState::new();
        keyboard.record(&first, &Evaluation::calculate(&first, &secret));

        // c, r, a, e hinted; audio lacks c
        let result = validate_guess("audio", &dictionary(), &keyboard, true);
        assert_eq!(result, Err(GuessError::HardModeViolation { letter: 'c' }));

        // Same guess is fine outside hard mode
        assert!(validate_guess("audio", &dictionary(), &keyboard, false).is_ok());
    }

    #[test]
    fn hard_mode_ignores_positions() {
        let mut keyboard = KeyboardState::new();
        keyboard.upgrade(b't', Verdict::Correct);
        keyboard.upgrade(b'a', Verdict::Present);

        // t at a different position still satisfies the rule
        let guess = Word::new("slate").unwrap();
        assert!(check_hard_mode(&keyboard, &guess).is_ok());
    }

    #[test]
    fn hard_mode_ignores_absent_letters() {
        let mut keyboard = KeyboardState::new();
        keyboard.upgrade(b'z', Verdict::Absent);

        let guess = Word::new("crane").unwrap();
        assert!(check_hard_mode(&keyboard, &guess).is_ok());
    }

    #[test]
    fn violation_message_names_letter() {
        let error = GuessError::HardModeViolation { letter: 'r' };
        assert_eq!(error.to_string(), "Hard mode: guess must contain R");
    }
}
