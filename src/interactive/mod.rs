//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Mode, Results, run_tui};
