//! Common types for Minefield: coordinates, seats and errors.

use core::fmt;

/// Zero-based grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub column: usize,
    pub row: usize,
}

impl Position {
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

/// Shown 1-based, the way players type coordinates.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column + 1, self.row + 1)
    }
}

/// One of the two places at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub const BOTH: [Seat; 2] = [Seat::First, Seat::Second];

    pub const fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    pub const fn opponent(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

/// Errors surfaced at the edges of the engine. Board access itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Mine budget outside the accepted range.
    #[error("mine count {0} is out of range")]
    InvalidMineCount(usize),
    /// A move was requested but every cell is disabled.
    #[error("no cell is available for a move")]
    NoAvailableCell,
    /// The input stream ended while waiting for an answer.
    #[error("input closed")]
    InputClosed,
    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
