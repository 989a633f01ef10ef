//! Core minefield game engine (no_std compatible)
//!
//! The board, the per-cell flag set, the round resolver and the game loop.
//! Nothing in here touches stdin/stdout; moves come in through
//! [`Controller`](crate::player::Controller) implementations.

pub mod board;
pub mod cell;
pub mod common;
pub mod config;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use board::Board;
pub use cell::CellStatus;
pub use common::{GameError, Position, Seat};
pub use config::*;
pub use game::{Game, GameStatus, Player, RoundPhase, RoundReport};
pub use rules::{Collisions, Selection};
