//! Command implementations

pub mod settings;
pub mod simple;
pub mod stats;

pub use settings::{SettingsChange, update_settings};
pub use simple::run_simple;
pub use stats::{reset_statistics, show_statistics};
