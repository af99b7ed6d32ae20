//! Player settings

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User-configurable preferences
///
/// Theme flags are only read by the presentation layers; the core reads
/// `hard_mode` when validating guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Revealed hints must be used in subsequent guesses
    pub hard_mode: bool,
    pub dark_theme: bool,
    /// Orange/blue tiles instead of green/yellow
    pub high_contrast: bool,
}

/// Rejected settings changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("Hard mode can only be enabled at the start of a round")]
    HardModeLocked,
}
