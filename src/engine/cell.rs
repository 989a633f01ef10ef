//! Per-cell history flags.

use bitflags::bitflags;

bitflags! {
    /// Accumulated facts about one cell. Flags compose freely; only the
    /// renderer imposes an order on them.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct CellStatus: u8 {
        /// Can no longer be targeted or mined.
        const DISABLED       = 0x01;
        /// Holds a mine this round. Cleared at the start of every round.
        const HAS_MINE       = 0x02;
        const WAS_GUESSED    = 0x04;
        /// The owner's own guess destroyed their mine here.
        const SELF_DETONATED = 0x08;
        /// Both players mined this cell in the same round.
        const HAD_COLLISION  = 0x10;
    }
}

impl CellStatus {
    pub const NONE: CellStatus = CellStatus::empty();

    /// `true` when every bit of `flag` is set. Asking for [`CellStatus::NONE`]
    /// means asking whether the cell is pristine.
    pub fn has_flag(self, flag: CellStatus) -> bool {
        if flag.is_empty() {
            self.is_empty()
        } else {
            self.contains(flag)
        }
    }

    /// Drop the transient mine marker, keep the history.
    pub fn clear_mine(&mut self) {
        *self = *self & !CellStatus::HAS_MINE;
    }

    /// Board symbol, highest priority first.
    pub fn symbol(self) -> char {
        if self.has_flag(CellStatus::SELF_DETONATED) {
            '#'
        } else if self.has_flag(CellStatus::HAD_COLLISION) {
            '*'
        } else if self.has_flag(CellStatus::WAS_GUESSED | CellStatus::HAS_MINE) {
            'G'
        } else if self.has_flag(CellStatus::DISABLED) {
            'X'
        } else {
            '.'
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_only_held_by_empty_status() {
        assert!(CellStatus::NONE.has_flag(CellStatus::NONE));
        assert!(!CellStatus::DISABLED.has_flag(CellStatus::NONE));
        assert!(!CellStatus::NONE.has_flag(CellStatus::DISABLED));
    }

    #[test]
    fn has_flag_requires_all_bits() {
        let status = CellStatus::DISABLED | CellStatus::HAD_COLLISION;
        assert!(status.has_flag(CellStatus::DISABLED));
        assert!(status.has_flag(CellStatus::HAD_COLLISION));
        assert!(status.has_flag(CellStatus::DISABLED | CellStatus::HAD_COLLISION));
        assert!(!status.has_flag(CellStatus::DISABLED | CellStatus::HAS_MINE));
    }

    #[test]
    fn clear_mine_preserves_other_bits() {
        let mut status = CellStatus::HAS_MINE | CellStatus::WAS_GUESSED | CellStatus::DISABLED;
        status.clear_mine();
        assert_eq!(status, CellStatus::WAS_GUESSED | CellStatus::DISABLED);

        let mut pristine = CellStatus::NONE;
        pristine.clear_mine();
        assert_eq!(pristine, CellStatus::NONE);
    }

    #[test]
    fn symbol_priority() {
        let all = CellStatus::all();
        assert_eq!(all.symbol(), '#');
        assert_eq!((all - CellStatus::SELF_DETONATED).symbol(), '*');
        assert_eq!(
            (CellStatus::WAS_GUESSED | CellStatus::HAS_MINE | CellStatus::DISABLED).symbol(),
            'G'
        );
        assert_eq!((CellStatus::WAS_GUESSED | CellStatus::DISABLED).symbol(), 'X');
        assert_eq!(CellStatus::HAS_MINE.symbol(), '.');
        assert_eq!(CellStatus::NONE.symbol(), '.');
    }
}
