use super::common::GameError;

/// Smallest accepted board edge.
pub const MIN_SIZE: usize = 2;
/// Largest accepted board edge.
pub const MAX_SIZE: usize = 4;
pub const MIN_MINES: usize = 1;
pub const MAX_MINES: usize = 5;

/// Who sits in the second seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    VsCpu,
    TwoPlayer,
}

/// Settings for one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub mines: usize,
    pub mode: GameMode,
}

impl GameConfig {
    /// Build a config. Out-of-range dimensions fall back to [`MIN_SIZE`],
    /// the same way [`Board::new`](crate::engine::board::Board::new) treats them.
    pub fn new(
        width: usize,
        height: usize,
        mines: usize,
        mode: GameMode,
    ) -> Result<Self, GameError> {
        if !is_valid_mine_count(mines) {
            return Err(GameError::InvalidMineCount(mines));
        }
        Ok(Self {
            width: clamp_dimension(width),
            height: clamp_dimension(height),
            mines,
            mode,
        })
    }
}

/// Anything outside `[MIN_SIZE, MAX_SIZE]` becomes `MIN_SIZE`.
pub fn clamp_dimension(value: usize) -> usize {
    if (MIN_SIZE..=MAX_SIZE).contains(&value) {
        value
    } else {
        MIN_SIZE
    }
}

pub fn is_valid_mine_count(count: usize) -> bool {
    (MIN_MINES..=MAX_MINES).contains(&count)
}
