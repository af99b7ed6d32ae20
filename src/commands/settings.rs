//! Settings command

use crate::settings::{Settings, SettingsError};
use crate::storage::records::RecordStatus;
use crate::storage::{KeyValueStore, Store};

/// Requested changes; `None` leaves a setting as it is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsChange {
    pub hard_mode: Option<bool>,
    pub dark_theme: Option<bool>,
    pub high_contrast: Option<bool>,
}

impl SettingsChange {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.hard_mode.is_none() && self.dark_theme.is_none() && self.high_contrast.is_none()
    }

    #[must_use]
    pub fn apply_to(&self, settings: Settings) -> Settings {
        Settings {
            hard_mode: self.hard_mode.unwrap_or(settings.hard_mode),
            dark_theme: self.dark_theme.unwrap_or(settings.dark_theme),
            high_contrast: self.high_contrast.unwrap_or(settings.high_contrast),
        }
    }
}

/// Apply `change` to the stored settings and save them
///
/// Returns the settings now in effect.
///
/// # Errors
/// Returns `SettingsError::HardModeLocked` when enabling hard mode while a
/// saved game is in progress with at least one guess; nothing is saved.
pub fn update_settings<S: KeyValueStore>(
    store: &mut Store<S>,
    change: SettingsChange,
) -> Result<Settings, SettingsError> {
    let current = store.load_settings();
    if change.is_empty() {
        return Ok(current);
    }

    let updated = change.apply_to(current);
    if updated.hard_mode && !current.hard_mode {
        let mid_game = store.load_session().is_some_and(|record| {
            record.game_status == RecordStatus::InProgress && record.row_index > 0
        });
        if mid_game {
            return Err(SettingsError::HardModeLocked);
        }
    }

    store.save_settings(updated);
    tracing::info!("Settings updated: {updated:?}");
    Ok(updated)
}
