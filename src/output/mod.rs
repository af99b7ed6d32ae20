//! Terminal output formatting
//!
//! Colored line-mode display plus formatting helpers shared with the TUI.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_help, print_keyboard, print_outcome, print_settings, print_statistics,
};
