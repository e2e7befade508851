//! Drivers around the engine: a line-oriented console loop, a full-screen
//! terminal UI, and parsing of typed input.

mod app;
pub mod console;
mod game_view;
pub mod input;

pub use app::App;
pub use console::Console;
