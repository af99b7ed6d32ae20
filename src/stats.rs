//! Statistics ledger
//!
//! Tracks finished games across sessions. Only the win histogram, the failed
//! bucket and the streaks are stored; games played, games won, average guesses
//! and win percentage are derived from them, so `played == won + failed`
//! holds by construction.

use crate::game::MAX_ATTEMPTS;

/// Aggregate results of every finished game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    wins_by_row: [u32; MAX_ATTEMPTS],
    failed: u32,
    current_streak: u32,
    max_streak: u32,
    last_win_row: Option<usize>,
}

/// One bar of the guess distribution chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistributionBar {
    /// Row the games were won on (1-based)
    pub row: usize,
    pub count: u32,
    /// Whether this row is where the most recent game was won
    pub highlight: bool,
}

impl Statistics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from persisted counters
    ///
    /// The max streak is raised to at least the current streak, and a last-win
    /// row outside 1..=6 is dropped.
    #[must_use]
    pub fn restore(
        wins_by_row: [u32; MAX_ATTEMPTS],
        failed: u32,
        current_streak: u32,
        max_streak: u32,
        last_win_row: Option<usize>,
    ) -> Self {
        Self {
            wins_by_row,
            failed,
            current_streak,
            max_streak: max_streak.max(current_streak),
            last_win_row: last_win_row.filter(|row| (1..=MAX_ATTEMPTS).contains(row)),
        }
    }

    /// Record a game won on row `attempts` (1-based)
    ///
    /// Calls with a row outside 1..=6 are ignored.
    pub fn record_win(&mut self, attempts: usize) {
        if self.is_full() {
            tracing::warn!("Statistics counters are full; win not recorded");
            return;
        }

        let Some(slot) = attempts
            .checked_sub(1)
            .and_then(|i| self.wins_by_row.get_mut(i))
        else {
            tracing::warn!("Ignoring win on impossible row {attempts}");
            return;
        };

        *slot += 1;
        self.current_streak = self.current_streak.saturating_add(1);
        self.max_streak = self.max_streak.max(self.current_streak);
        self.last_win_row = Some(attempts);

        tracing::info!(
            "Recorded win in {attempts}; streak {} (max {})",
            self.current_streak,
            self.max_streak
        );
    }

    /// Record a lost game
    pub fn record_loss(&mut self) {
        if self.is_full() {
            tracing::warn!("Statistics counters are full; loss not recorded");
            return;
        }

        self.failed += 1;
        self.current_streak = 0;
        self.last_win_row = None;

        tracing::info!("Recorded loss; {} games played", self.games_played());
    }

    #[must_use]
    pub fn games_won(&self) -> u32 {
        self.wins_by_row
            .iter()
            .fold(0, |total, &count| total.saturating_add(count))
    }

    #[must_use]
    pub fn games_played(&self) -> u32 {
        self.games_won().saturating_add(self.failed)
    }

    /// No further game fits without overflowing the played count
    fn is_full(&self) -> bool {
        self.games_played() == u32::MAX
    }

    #[must_use]
    pub const fn failed(&self) -> u32 {
        self.failed
    }

    /// Wins on row `row` (1-based); zero for rows outside 1..=6
    #[must_use]
    pub fn wins_on_row(&self, row: usize) -> u32 {
        row.checked_sub(1)
            .and_then(|i| self.wins_by_row.get(i))
            .copied()
            .unwrap_or(0)
    }

    #[must_use]
    pub const fn wins_by_row(&self) -> &[u32; MAX_ATTEMPTS] {
        &self.wins_by_row
    }

    #[must_use]
    pub const fn current_streak(&self) -> u32 {
        self.current_streak
    }

    #[must_use]
    pub const fn max_streak(&self) -> u32 {
        self.max_streak
    }

    /// Row of the most recent win, cleared by a loss
    #[must_use]
    pub const fn last_win_row(&self) -> Option<usize> {
        self.last_win_row
    }

    /// Mean winning row over won games only; 0.0 before the first win
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        let won = self.games_won();
        if won == 0 {
            return 0.0;
        }

        let total: u64 = self
            .wins_by_row
            .iter()
            .zip(1u64..)
            .map(|(&count, row)| u64::from(count) * row)
            .sum();

        total as f64 / f64::from(won)
    }

    /// Won games as a percentage of played games; 0.0 before the first game
    #[must_use]
    pub fn win_percentage(&self) -> f64 {
        let played = self.games_played();
        if played == 0 {
            return 0.0;
        }
        f64::from(self.games_won()) / f64::from(played) * 100.0
    }

    /// Bars for rows 1..=6, flagging the last win
    #[must_use]
    pub fn distribution(&self) -> Vec<DistributionBar> {
        self.wins_by_row
            .iter()
            .enumerate()
            .map(|(i, &count)| DistributionBar {
                row: i + 1,
                count,
                highlight: self.last_win_row == Some(i + 1),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariants(stats: &Statistics) {
        assert_eq!(stats.games_played(), stats.games_won() + stats.failed());
        if stats.games_played() > 0 {
            let expected = f64::from(stats.games_won()) / f64::from(stats.games_played()) * 100.0;
            assert!((stats.win_percentage() - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn empty_ledger() {
        let stats = Statistics::new();
        assert_eq!(stats.games_played(), 0);
        assert!(stats.average_guesses().abs() < f64::EPSILON);
        assert!(stats.win_percentage().abs() < f64::EPSILON);
        assert_eq!(stats.last_win_row(), None);
    }

    #[test]
    fn win_on_third_row() {
        let mut stats = Statistics::new();
        stats.record_win(5);
        stats.record_win(3);

        assert_eq!(stats.wins_on_row(3), 1);
        assert_eq!(stats.current_streak(), 2);
        assert_eq!(stats.max_streak(), 2);
        assert_eq!(stats.last_win_row(), Some(3));
        assert!((stats.average_guesses() - 4.0).abs() < 1e-9);
        assert!((stats.win_percentage() - 100.0).abs() < 1e-9);
        assert_invariants(&stats);
    }

    #[test]
    fn loss_resets_streak_and_highlight() {
        let mut stats = Statistics::new();
        stats.record_win(2);
        stats.record_win(4);
        stats.record_loss();

        assert_eq!(stats.failed(), 1);
        assert_eq!(stats.current_streak(), 0);
        assert_eq!(stats.max_streak(), 2);
        assert_eq!(stats.last_win_row(), None);
        assert_eq!(stats.games_played(), 3);
        // average counts wins only
        assert!((stats.average_guesses() - 3.0).abs() < 1e-9);
        assert_invariants(&stats);
    }

    #[test]
    fn max_streak_survives_new_streak() {
        let mut stats = Statistics::new();
        for _ in 0..3 {
            stats.record_win(4);
        }
        stats.record_loss();
        stats.record_win(1);

        assert_eq!(stats.current_streak(), 1);
        assert_eq!(stats.max_streak(), 3);
        assert_invariants(&stats);
    }

    #[test]
    fn impossible_rows_ignored() {
        let mut stats = Statistics::new();
        stats.record_win(0);
        stats.record_win(7);
        assert_eq!(stats, Statistics::new());
    }

    #[test]
    fn derived_values_reproducible_from_parts() {
        let mut live = Statistics::new();
        for row in [1, 3, 3, 6] {
            live.record_win(row);
        }
        live.record_loss();
        live.record_win(2);

        let restored = Statistics::restore(
            *live.wins_by_row(),
            live.failed(),
            live.current_streak(),
            live.max_streak(),
            live.last_win_row(),
        );

        assert_eq!(restored, live);
        assert!((restored.average_guesses() - live.average_guesses()).abs() < f64::EPSILON);
        assert!((restored.win_percentage() - live.win_percentage()).abs() < f64::EPSILON);
    }

    #[test]
    fn restore_repairs_inconsistent_streaks() {
        let stats = Statistics::restore([1, 0, 0, 0, 0, 0], 0, 4, 2, Some(9));
        assert_eq!(stats.max_streak(), 4);
        assert_eq!(stats.last_win_row(), None);
    }

    #[test]
    fn full_counters_stop_recording() {
        let mut stats = Statistics::restore([u32::MAX - 1, 0, 0, 0, 0, 0], 0, u32::MAX, 0, None);
        stats.record_win(1);
        assert_eq!(stats.games_played(), u32::MAX);
        assert_eq!(stats.current_streak(), u32::MAX);
        assert_invariants(&stats);

        let before = stats.clone();
        stats.record_win(2);
        stats.record_loss();
        assert_eq!(stats, before);
    }

    #[test]
    fn distribution_highlights_last_win() {
        let mut stats = Statistics::new();
        stats.record_win(2);
        stats.record_win(4);

        let bars = stats.distribution();
        assert_eq!(bars.len(), MAX_ATTEMPTS);
        assert_eq!(bars[1].count, 1);
        assert!(!bars[1].highlight);
        assert!(bars[3].highlight);
        assert_eq!(bars.iter().filter(|b| b.highlight).count(), 1);
    }
}
