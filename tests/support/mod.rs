#![allow(dead_code)]

use std::collections::VecDeque;

use minefield::{Board, Controller, GameError, Player, Position, Selection};

/// Replays a fixed list of positions; runs dry with `InputClosed`.
pub struct ScriptedController {
    moves: VecDeque<Position>,
    pub duplicates: usize,
    pub turns: Vec<Selection>,
}

impl ScriptedController {
    pub fn new(moves: &[(usize, usize)]) -> Self {
        Self {
            moves: moves.iter().map(|&(c, r)| Position::new(c, r)).collect(),
            duplicates: 0,
            turns: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Controller for ScriptedController {
    fn begin_turn(&mut self, _player: &Player, selection: Selection) {
        self.turns.push(selection);
    }

    fn request_position(
        &mut self,
        _player: &Player,
        _selection: Selection,
        _board: &Board,
    ) -> Result<Position, GameError> {
        self.moves.pop_front().ok_or(GameError::InputClosed)
    }

    fn handle_duplicate(&mut self, _player: &Player, _pos: Position) {
        self.duplicates += 1;
    }
}

pub fn pos(column: usize, row: usize) -> Position {
    Position::new(column, row)
}

pub fn player_with(name: &str, mines: usize, placed: &[(usize, usize)]) -> Player {
    let mut player = Player::cpu(name, mines);
    player.current_mines = placed.iter().map(|&(c, r)| pos(c, r)).collect();
    player
}
