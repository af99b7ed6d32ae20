//! Wordle Game
//!
//! A single-player Wordle engine: guess scoring with the duplicate-letter
//! rule, keyboard feedback, a six-row session state machine with hard mode,
//! a persistent statistics ledger and fail-open storage.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Evaluation, Verdict, Word};
//!
//! let guess = Word::new("trace").unwrap();
//! let secret = Word::new("crane").unwrap();
//!
//! let evaluation = Evaluation::calculate(&guess, &secret);
//! assert_eq!(evaluation.verdicts()[0], Verdict::Absent);
//! assert_eq!(evaluation.to_emoji(), "⬜🟩🟩🟨🟩");
//! ```

// Core domain types
pub mod core;

// Letter feedback across rows
pub mod keyboard;

// Word lists
pub mod wordlists;

// Session state machine and controller
pub mod game;

// Statistics ledger
pub mod stats;

// Player settings
pub mod settings;

// Persistence
pub mod storage;

// Runtime configuration
pub mod config;

// Log file setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
