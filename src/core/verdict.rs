//! Per-letter feedback verdicts

use serde::{Deserialize, Serialize};

/// Feedback for a single letter of a submitted guess
///
/// Variants are declared weakest first, so the derived `Ord` gives
/// `Absent < Present < Correct`. The keyboard tracker relies on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Letter not in the secret (or all its occurrences already matched)
    Absent,
    /// Letter in the secret at another position
    Present,
    /// Letter at the correct position
    Correct,
}

impl Verdict {
    /// Whether this verdict reveals the letter as part of the secret
    #[inline]
    #[must_use]
    pub const fn is_hint(self) -> bool {
        matches!(self, Self::Present | Self::Correct)
    }

    /// Square emoji used for shareable results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_absent_present_correct() {
        assert!(Verdict::Absent < Verdict::Present);
        assert!(Verdict::Present < Verdict::Correct);
        assert_eq!(Verdict::Absent.max(Verdict::Correct), Verdict::Correct);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&[Verdict::Correct, Verdict::Present, Verdict::Absent])
            .unwrap();
        assert_eq!(json, r#"["correct","present","absent"]"#);
    }

    #[test]
    fn hints() {
        assert!(Verdict::Correct.is_hint());
        assert!(Verdict::Present.is_hint());
        assert!(!Verdict::Absent.is_hint());
    }
}
