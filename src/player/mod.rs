//! Move sources for the two seats.
//!
//! - [`CpuController`]: uniform random choice among open cells
//! - [`CliController`]: line-oriented prompts for a human at a terminal

use crate::engine::{
    board::Board,
    common::{GameError, Position},
    game::Player,
    rules::Selection,
};

/// Supplies positions for one seat.
///
/// The engine validates and deduplicates whatever comes back, but a
/// well-behaved controller only offers open cells.
pub trait Controller {
    /// A collection pass is starting for `player`.
    fn begin_turn(&mut self, _player: &Player, _selection: Selection) {}

    /// Produce one candidate position.
    fn request_position(
        &mut self,
        player: &Player,
        selection: Selection,
        board: &Board,
    ) -> Result<Position, GameError>;

    /// The last position repeated one already chosen this pass.
    fn handle_duplicate(&mut self, _player: &Player, _pos: Position) {}

    /// The last position was accepted.
    fn handle_accepted(&mut self, _player: &Player, _selection: Selection, _pos: Position) {}
}

pub mod ai;
pub use ai::CpuController;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliController;
