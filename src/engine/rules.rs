//! Round resolution: collecting moves, collisions, hits, self-detonations and
//! end-of-game detection. Everything here is synchronous and owns no state;
//! the [`Game`](super::game::Game) loop calls these in a fixed order.

use alloc::vec::Vec;
use log::{debug, warn};

use super::board::Board;
use super::cell::CellStatus;
use super::common::{GameError, Position, Seat};
use super::game::{GameStatus, Player};
use crate::player::Controller;

/// What a collection pass is gathering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Mines,
    Guesses,
}

impl Selection {
    pub fn label(self) -> &'static str {
        match self {
            Selection::Mines => "PLACEMENT",
            Selection::Guesses => "GUESSING",
        }
    }
}

/// Ask `controller` for `count` distinct open positions on behalf of `player`.
///
/// Positions that are off the board, disabled, or already chosen this pass are
/// rejected and asked for again. Mines are marked on the board as they are
/// accepted. When the board has fewer open cells than `count`, the target is
/// capped at what is available.
pub fn collect_positions(
    board: &mut Board,
    player: &Player,
    controller: &mut dyn Controller,
    selection: Selection,
    count: usize,
) -> Result<Vec<Position>, GameError> {
    let available = board.available_positions().count();
    let target = count.min(available);
    if target < count {
        warn!(
            "{}: only {} open cells for {} {:?}, capping",
            player.name, available, count, selection
        );
    }

    let mut chosen: Vec<Position> = Vec::with_capacity(target);
    if target == 0 {
        return Ok(chosen);
    }

    controller.begin_turn(player, selection);
    while chosen.len() < target {
        let pos = controller.request_position(player, selection, board)?;
        if !board.is_open(pos) {
            warn!("{}: controller offered unusable cell {:?}", player.name, pos);
            continue;
        }
        if chosen.contains(&pos) {
            controller.handle_duplicate(player, pos);
            continue;
        }
        chosen.push(pos);
        if selection == Selection::Mines {
            board.mutate_cell(pos.column, pos.row, |s| s.insert(CellStatus::HAS_MINE));
        }
        controller.handle_accepted(player, selection, pos);
    }
    debug!("{} chose {:?}: {:?}", player.name, selection, chosen);
    Ok(chosen)
}

/// Keep the mines in `own` that nobody else placed. Every clash is pushed to
/// `collisions` and its cell becomes a disabled collision crater.
pub fn remove_colliding_mines(
    own: &[Position],
    opponent: &[Position],
    collisions: &mut Vec<Position>,
    board: &mut Board,
) -> Vec<Position> {
    let mut kept = Vec::with_capacity(own.len());
    for &mine in own {
        if opponent.contains(&mine) {
            collisions.push(mine);
            board.mutate_cell(mine.column, mine.row, |s| {
                *s |= CellStatus::HAD_COLLISION | CellStatus::DISABLED;
                s.clear_mine();
            });
        } else {
            kept.push(mine);
        }
    }
    kept
}

/// Set difference `own \ opponent`, without touching the board.
pub fn keep_non_colliding_mines(own: &[Position], opponent: &[Position]) -> Vec<Position> {
    own.iter()
        .copied()
        .filter(|mine| !opponent.contains(mine))
        .collect()
}

/// Outcome of the collision pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collisions {
    pub positions: Vec<Position>,
    /// Mines each seat lost, indexed by [`Seat::index`].
    pub removed: [usize; 2],
}

/// Destroy every mine both players placed on the same cell. The first player
/// logs the clashes; the final state is the same for both sides.
pub fn resolve_collisions(first: &mut Player, second: &mut Player, board: &mut Board) -> Collisions {
    let mut positions = Vec::new();
    let kept_first =
        remove_colliding_mines(&first.current_mines, &second.current_mines, &mut positions, board);
    let kept_second = keep_non_colliding_mines(&second.current_mines, &first.current_mines);

    let removed = [
        first.current_mines.len() - kept_first.len(),
        second.current_mines.len() - kept_second.len(),
    ];
    first.current_mines = kept_first;
    second.current_mines = kept_second;
    first.lose_mines(removed[0]);
    second.lose_mines(removed[1]);

    if !positions.is_empty() {
        debug!("collisions at {:?}, removed {:?}", positions, removed);
    }
    Collisions { positions, removed }
}

/// Number of `guesses` that land on one of `mines`.
pub fn count_hits(mines: &[Position], guesses: &[Position]) -> usize {
    guesses.iter().filter(|guess| mines.contains(guess)).count()
}

/// Score `guesses` against the defender and take the found mines off their
/// budget. The defender's mine list is left intact: a found mine the owner
/// also guessed still self-detonates and costs a second mine.
pub fn resolve_hits(defender: &mut Player, guesses: &[Position]) -> Vec<Position> {
    let found: Vec<Position> = defender
        .current_mines
        .iter()
        .copied()
        .filter(|mine| guesses.contains(mine))
        .collect();
    defender.lose_mines(found.len());
    found
}

/// Destroy the player's own surviving mines that they guessed themselves.
pub fn resolve_self_detonation(player: &mut Player, board: &mut Board) -> Vec<Position> {
    let mut detonated = Vec::new();
    let mut survivors = Vec::with_capacity(player.current_mines.len());
    for &mine in &player.current_mines {
        if player.current_guesses.contains(&mine) {
            board.mutate_cell(mine.column, mine.row, |s| {
                *s |= CellStatus::DISABLED | CellStatus::SELF_DETONATED;
                s.clear_mine();
            });
            detonated.push(mine);
        } else {
            survivors.push(mine);
        }
    }
    player.current_mines = survivors;
    player.lose_mines(detonated.len());
    if !detonated.is_empty() {
        debug!("{} self-detonated at {:?}", player.name, detonated);
    }
    detonated
}

/// Every guessed cell is spent, hit or miss.
pub fn disable_guessed_positions(guesses: &[Position], board: &mut Board) {
    for guess in guesses {
        board.mutate_cell(guess.column, guess.row, |s| {
            *s |= CellStatus::DISABLED | CellStatus::WAS_GUESSED;
        });
    }
}

/// A player out of mines loses; both out is a draw.
pub fn check_game_end(first: &Player, second: &Player) -> GameStatus {
    match (first.remaining_mines() == 0, second.remaining_mines() == 0) {
        (true, true) => GameStatus::Draw,
        (true, false) => GameStatus::Winner(Seat::Second),
        (false, true) => GameStatus::Winner(Seat::First),
        (false, false) => GameStatus::InProgress,
    }
}
