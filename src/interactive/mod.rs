//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Overlay, run_tui};
