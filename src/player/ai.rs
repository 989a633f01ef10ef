use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use rand::Rng;

use crate::engine::{
    board::Board,
    common::{GameError, Position},
    game::Player,
    rules::Selection,
};

use super::Controller;

/// Computer opponent: picks uniformly among the cells still open, using the
/// random source it owns.
pub struct CpuController<R: Rng> {
    rng: R,
    announce: bool,
    reveal_placements: bool,
}

impl<R: Rng> CpuController<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            announce: false,
            reveal_placements: false,
        }
    }

    /// Print accepted guesses to stdout so a human opponent can follow along.
    /// Placements stay hidden unless [`reveal_placements`](Self::reveal_placements)
    /// is also set.
    pub fn with_announcements(mut self, announce: bool) -> Self {
        self.announce = announce;
        self
    }

    /// Debug aid: also echo where mines go. Only has an effect with
    /// announcements on.
    pub fn reveal_placements(mut self, reveal: bool) -> Self {
        self.reveal_placements = reveal;
        self
    }

    fn announcement(&self, player: &Player, selection: Selection, pos: Position) -> Option<String> {
        if !self.announce {
            return None;
        }
        match selection {
            Selection::Guesses => Some(format!("{} guesses at {}", player.name, pos)),
            Selection::Mines if self.reveal_placements => {
                Some(format!("{} places mine at {}", player.name, pos))
            }
            Selection::Mines => None,
        }
    }
}

/// Uniformly sample an open cell of `board`.
pub fn random_open_position<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Result<Position, GameError> {
    let open: Vec<Position> = board.available_positions().collect();
    if open.is_empty() {
        return Err(GameError::NoAvailableCell);
    }
    Ok(open[rng.random_range(0..open.len())])
}

impl<R: Rng> Controller for CpuController<R> {
    fn begin_turn(&mut self, player: &Player, selection: Selection) {
        if self.announce {
            announce(format_args!(
                "\n === {} PHASE === \n === TURN: {} ===\n",
                selection.label(),
                player.name
            ));
        }
    }

    fn request_position(
        &mut self,
        _player: &Player,
        _selection: Selection,
        board: &Board,
    ) -> Result<Position, GameError> {
        random_open_position(board, &mut self.rng)
    }

    fn handle_accepted(&mut self, player: &Player, selection: Selection, pos: Position) {
        log::trace!("{} {:?} at {:?}", player.name, selection, pos);
        if let Some(line) = self.announcement(player, selection, pos) {
            announce(format_args!("{}", line));
        }
    }
}

#[cfg(feature = "std")]
fn announce(message: core::fmt::Arguments<'_>) {
    std::println!("{}", message);
}

#[cfg(not(feature = "std"))]
fn announce(_message: core::fmt::Arguments<'_>) {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn cpu() -> CpuController<SmallRng> {
        CpuController::new(SmallRng::seed_from_u64(7))
    }

    #[test]
    fn quiet_unless_announcing() {
        let player = Player::cpu("CPU", 1);
        let at = Position::new(1, 0);
        let silent = cpu().reveal_placements(true);
        assert_eq!(silent.announcement(&player, Selection::Guesses, at), None);
        assert_eq!(silent.announcement(&player, Selection::Mines, at), None);
    }

    #[test]
    fn placements_hidden_by_default() {
        let player = Player::cpu("CPU", 1);
        let at = Position::new(1, 0);
        let cpu = cpu().with_announcements(true);
        assert_eq!(
            cpu.announcement(&player, Selection::Guesses, at).as_deref(),
            Some("CPU guesses at (2, 1)")
        );
        assert_eq!(cpu.announcement(&player, Selection::Mines, at), None);

        let cpu = cpu.reveal_placements(true);
        assert_eq!(
            cpu.announcement(&player, Selection::Mines, at).as_deref(),
            Some("CPU places mine at (2, 1)")
        );
    }
}
