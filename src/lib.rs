//! # Connect Four
//!
//! Two-player Connect Four on the classic 6×7 grid, played at a terminal.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, match state machine
//! - [`ui`] — Drivers: console prompt loop and ratatui terminal UI
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
