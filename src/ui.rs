//! Text for the terminal: boards, round results and the final verdict.

use alloc::format;
use alloc::string::String;

use crate::engine::{Board, Game, GameStatus, RoundReport, Seat};

/// Banner plus the grid, as shown at the start and end of every round.
pub fn render_board(board: &Board) -> String {
    format!("\n === BOARD === \n{}\n", board)
}

pub fn render_round_header(round: u32) -> String {
    format!("\n===============\n=== ROUND {} ===\n===============\n", round)
}

/// Collisions, self-detonations, the board and both budgets after a round.
pub fn render_round_results(game: &Game, report: &RoundReport) -> String {
    let first = &game.player(Seat::First).name;
    let second = &game.player(Seat::Second).name;
    let mut out = String::new();

    for pos in &report.collisions {
        out += &format!("\n === MINE COLLISION IN {} ===\n", pos);
    }
    if !report.collisions.is_empty() {
        out += &format!(
            "\nMines removed - {}: {}, {}: {}\n",
            first, report.collision_losses[0], second, report.collision_losses[1]
        );
    }
    for seat in Seat::BOTH {
        let name = &game.player(seat).name;
        for pos in &report.self_detonations[seat.index()] {
            out += &format!("{} exploded their own mine at {}!\n", name, pos);
        }
    }

    out += &format!("\n=== ROUND {} RESULTS ===\n", report.round);
    out += &render_board(game.board());
    out += &format!("{} - Remaining mines: {}\n", first, report.remaining[0]);
    out += &format!("{} - Remaining mines: {}\n", second, report.remaining[1]);
    out
}

/// Closing banner, empty while the game is still running.
pub fn render_outcome(game: &Game) -> String {
    match game.status() {
        GameStatus::InProgress => String::new(),
        GameStatus::Draw => {
            String::from("\n=========================\n=== DRAW: NO MINES ===\n=========================\n")
        }
        GameStatus::Stalemate => String::from(
            "\n===============================\n=== DRAW: NO CELLS LEFT ===\n===============================\n",
        ),
        GameStatus::Winner(seat) => format!(
            "\n==================================\n=== {} WIN THE GAME! ===\n==================================\n",
            game.player(seat).name
        ),
    }
}
