//! Core Connect Four game logic: board representation, player types, and the
//! game state machine that drives a single match.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, CAPACITY, COLS, ROWS};
pub use player::{Player, Players};
pub use state::{GameState, GameStatus, MatchOutcome, MoveResult, Placement};

pub use crate::error::MoveError;
