use alloc::string::String;
use alloc::vec::Vec;
use log::{debug, info};

use super::{
    board::Board,
    common::{GameError, Position, Seat},
    config::{GameConfig, GameMode},
    rules::{self, Selection},
};
use crate::player::Controller;

/// One side of the table: identity, mine budget and this round's choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub is_human: bool,
    pub name: String,
    remaining_mines: usize,
    /// Mines placed this round. Replaced wholesale every round.
    pub current_mines: Vec<Position>,
    /// Guesses made this round. Replaced wholesale every round.
    pub current_guesses: Vec<Position>,
}

impl Player {
    pub fn new(name: impl Into<String>, is_human: bool, mines: usize) -> Self {
        Self {
            is_human,
            name: name.into(),
            remaining_mines: mines,
            current_mines: Vec::new(),
            current_guesses: Vec::new(),
        }
    }

    pub fn human(name: impl Into<String>, mines: usize) -> Self {
        Self::new(name, true, mines)
    }

    pub fn cpu(name: impl Into<String>, mines: usize) -> Self {
        Self::new(name, false, mines)
    }

    /// Mine budget; zero means this player has lost.
    pub fn remaining_mines(&self) -> usize {
        self.remaining_mines
    }

    /// The budget only ever shrinks and stops at zero.
    pub fn lose_mines(&mut self, count: usize) {
        self.remaining_mines = self.remaining_mines.saturating_sub(count);
    }
}

/// Steps of a round, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    RoundStart,
    Placement,
    CollisionResolution,
    Guessing,
    HitResolution,
    SelfDetonation,
    DisableGuessed,
    EndCheck,
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    /// The other seat ran out of mines.
    Winner(Seat),
    /// Both seats ran out of mines in the same round.
    Draw,
    /// No open cell is left, so nobody can move.
    Stalemate,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Everything that happened in one round, per seat where it matters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundReport {
    pub round: u32,
    pub collisions: Vec<Position>,
    pub collision_losses: [usize; 2],
    /// Opponent mines found by each seat.
    pub hits: [Vec<Position>; 2],
    pub self_detonations: [Vec<Position>; 2],
    pub remaining: [usize; 2],
    pub status: GameStatus,
}

/// Core game loop holding the shared board and both players.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    round: u32,
    phase: RoundPhase,
    status: GameStatus,
}

impl Game {
    pub fn new(board: Board, first: Player, second: Player) -> Self {
        Self {
            board,
            players: [first, second],
            round: 0,
            phase: RoundPhase::RoundStart,
            status: GameStatus::InProgress,
        }
    }

    /// Fresh board and players from `config`; the second seat is a CPU in
    /// [`GameMode::VsCpu`].
    pub fn from_config(config: &GameConfig) -> Self {
        let board = Board::new(config.width, config.height);
        let first = Player::human("Player 1", config.mines);
        let second = match config.mode {
            GameMode::VsCpu => Player::cpu("CPU", config.mines),
            GameMode::TwoPlayer => Player::human("Player 2", config.mines),
        };
        Self::new(board, first, second)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Rounds fully played so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    fn enter(&mut self, phase: RoundPhase) {
        debug!("round {}: {:?}", self.round + 1, phase);
        self.phase = phase;
    }

    /// Play one full round. `controllers[i]` moves for the player in seat `i`.
    ///
    /// Calling this on a finished game returns a report with the final status
    /// and changes nothing.
    pub fn play_round(
        &mut self,
        mut controllers: [&mut dyn Controller; 2],
    ) -> Result<RoundReport, GameError> {
        let mut report = RoundReport {
            round: self.round + 1,
            collisions: Vec::new(),
            collision_losses: [0; 2],
            hits: [Vec::new(), Vec::new()],
            self_detonations: [Vec::new(), Vec::new()],
            remaining: self.remaining(),
            status: self.status,
        };
        if self.status.is_over() {
            return Ok(report);
        }

        self.enter(RoundPhase::RoundStart);
        self.board.clear_mines();
        for player in self.players.iter_mut() {
            player.current_mines = Vec::new();
            player.current_guesses = Vec::new();
        }
        if self.board.available_positions().next().is_none() {
            self.status = GameStatus::Stalemate;
            self.enter(RoundPhase::EndCheck);
            self.round += 1;
            report.status = self.status;
            info!("round {}: board exhausted", report.round);
            return Ok(report);
        }

        self.enter(RoundPhase::Placement);
        for seat in Seat::BOTH {
            let i = seat.index();
            let count = self.players[i].remaining_mines();
            let mines = rules::collect_positions(
                &mut self.board,
                &self.players[i],
                &mut *controllers[i],
                Selection::Mines,
                count,
            )?;
            self.players[i].current_mines = mines;
        }

        self.enter(RoundPhase::CollisionResolution);
        let [first, second] = &mut self.players;
        let collisions = rules::resolve_collisions(first, second, &mut self.board);
        report.collisions = collisions.positions;
        report.collision_losses = collisions.removed;

        self.enter(RoundPhase::Guessing);
        for seat in Seat::BOTH {
            let i = seat.index();
            let count = self.players[seat.opponent().index()].remaining_mines();
            let guesses = rules::collect_positions(
                &mut self.board,
                &self.players[i],
                &mut *controllers[i],
                Selection::Guesses,
                count,
            )?;
            self.players[i].current_guesses = guesses;
        }

        self.enter(RoundPhase::HitResolution);
        let [first, second] = &mut self.players;
        report.hits[0] = rules::resolve_hits(second, &first.current_guesses);
        report.hits[1] = rules::resolve_hits(first, &second.current_guesses);

        self.enter(RoundPhase::SelfDetonation);
        for (i, player) in self.players.iter_mut().enumerate() {
            report.self_detonations[i] = rules::resolve_self_detonation(player, &mut self.board);
        }

        self.enter(RoundPhase::DisableGuessed);
        for player in &self.players {
            rules::disable_guessed_positions(&player.current_guesses, &mut self.board);
        }

        self.enter(RoundPhase::EndCheck);
        self.status = rules::check_game_end(&self.players[0], &self.players[1]);
        self.round += 1;

        report.remaining = self.remaining();
        report.status = self.status;
        info!(
            "round {}: remaining {:?}, status {:?}",
            report.round, report.remaining, report.status
        );
        Ok(report)
    }

    /// Play rounds until the game ends, handing each report to `on_round`.
    pub fn run<F>(
        &mut self,
        mut controllers: [&mut dyn Controller; 2],
        mut on_round: F,
    ) -> Result<GameStatus, GameError>
    where
        F: FnMut(&Game, &RoundReport),
    {
        while !self.status.is_over() {
            let [first, second] = &mut controllers;
            let report = self.play_round([&mut **first, &mut **second])?;
            on_round(self, &report);
        }
        Ok(self.status)
    }

    fn remaining(&self) -> [usize; 2] {
        [
            self.players[0].remaining_mines(),
            self.players[1].remaining_mines(),
        ]
    }
}
