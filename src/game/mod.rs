//! Game session state machine and controller
//!
//! `GameSession` holds the rules of a single game. `Game` owns the active
//! session together with the statistics ledger, settings and persistence
//! store, and is the only thing input handlers talk to.

mod controller;
mod rules;
mod session;

pub use controller::{Game, GameEvent, InputEvent};
pub use rules::{GuessError, check_hard_mode, validate_guess};
pub use session::{GameSession, GameStatus, MAX_ATTEMPTS, Outcome, ResumeError, Row, Submission};
