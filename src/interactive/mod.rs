//! Interactive terminal UI

mod app;
mod rendering;

pub use app::{App, run_tui};
