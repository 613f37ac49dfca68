use core::fmt;
use serde::{Deserialize, Serialize};

/// Canonical player-visible state stored by the gameplay engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Hidden,
    Flagged,
    Revealed,
}

/// Read-only snapshot of one grid position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub has_mine: bool,
    pub revealed: bool,
    pub flagged: bool,
    /// Mined neighbors, always 0 for a mined cell.
    pub adjacent_mines: u8,
}

impl Cell {
    pub fn tile(self, reveal_all: bool) -> Tile {
        Tile::from_cell(self, reveal_all)
    }
}

/// What a cell looks like to the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Unknown,
    Flag,
    Mine,
    Count(u8),
}

impl Tile {
    pub const fn from_cell(cell: Cell, reveal_all: bool) -> Self {
        let shown = cell.revealed || reveal_all;
        match (shown, cell.has_mine, cell.flagged) {
            (true, true, _) => Self::Mine,
            (true, false, _) => Self::Count(cell.adjacent_mines),
            (false, _, true) => Self::Flag,
            (false, _, false) => Self::Unknown,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Unknown => '.',
            Self::Flag => 'F',
            Self::Mine => '*',
            // counts above 8 never come out of a board
            Self::Count(n) => match char::from_digit(n as u32, 10) {
                Some(digit) => digit,
                None => '?',
            },
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // honor width/alignment so boards can pad cells
        f.pad(self.symbol().encode_utf8(&mut [0; 4]))
    }
}
