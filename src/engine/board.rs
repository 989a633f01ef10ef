//! Game board: a fixed grid of [`CellStatus`] with bounds-checked access.

use alloc::vec::Vec;
use core::fmt;

use super::cell::CellStatus;
use super::common::Position;
use super::config::{clamp_dimension, is_valid_mine_count};

/// Shared grid both players mine and guess on. Dimensions never change after
/// construction, and every write goes through [`Board::mutate_cell`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<CellStatus>,
}

impl Board {
    /// Create an empty board. Dimensions outside the accepted range are
    /// replaced by the minimum size rather than rejected.
    pub fn new(width: usize, height: usize) -> Self {
        let width = clamp_dimension(width);
        let height = clamp_dimension(height);
        Board {
            width,
            height,
            cells: alloc::vec![CellStatus::NONE; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_valid_position(&self, col: usize, row: usize) -> bool {
        col < self.width && row < self.height
    }

    /// `false` for coordinates off the board.
    pub fn is_disabled(&self, col: usize, row: usize) -> bool {
        self.cell_status(col, row).has_flag(CellStatus::DISABLED)
    }

    pub fn is_valid_mine_count(&self, count: usize) -> bool {
        is_valid_mine_count(count)
    }

    /// Flags of a cell, or [`CellStatus::NONE`] off the board.
    pub fn cell_status(&self, col: usize, row: usize) -> CellStatus {
        match self.index(col, row) {
            Some(i) => self.cells[i],
            None => CellStatus::NONE,
        }
    }

    /// Apply `f` to a cell's flags. Silently does nothing off the board.
    pub fn mutate_cell<F>(&mut self, col: usize, row: usize, f: F)
    where
        F: FnOnce(&mut CellStatus),
    {
        if let Some(i) = self.index(col, row) {
            f(&mut self.cells[i]);
        }
    }

    /// Every coordinate in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Position::new(col, row)))
    }

    /// Cells that can still be mined or guessed.
    pub fn available_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions()
            .filter(move |p| !self.is_disabled(p.column, p.row))
    }

    /// A position that is on the board and not disabled.
    pub fn is_open(&self, pos: Position) -> bool {
        self.is_valid_position(pos.column, pos.row) && !self.is_disabled(pos.column, pos.row)
    }

    /// Remove every mine marker, leaving all other history intact.
    pub fn clear_mines(&mut self) {
        for col in 0..self.width {
            for row in 0..self.height {
                self.mutate_cell(col, row, CellStatus::clear_mine);
            }
        }
    }

    fn index(&self, col: usize, row: usize) -> Option<usize> {
        if self.is_valid_position(col, row) {
            Some(row * self.width + col)
        } else {
            None
        }
    }
}

/// Column header line, then one line per row of 3-wide cell symbols.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.width {
            write!(f, "{:>3}", col + 1)?;
        }
        writeln!(f)?;
        for row in 0..self.height {
            write!(f, "{:>3}", row + 1)?;
            for col in 0..self.width {
                write!(f, "{:>3}", self.cell_status(col, row).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
