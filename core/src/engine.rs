use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Owns one game: the mine layout plus what the player has uncovered so far.
///
/// Mutators never fail. Anything that does not apply (out of bounds, already revealed, flagged, game over) is
/// reported as a `NoChange` outcome and leaves the engine untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    mine_layout: MineLayout,
    board: Array2<CellState>,
    revealed_count: CellCount,
    flagged_count: CellCount,
    state: GameState,
    triggered_mine: Option<Coord2>,
}

impl PlayEngine {
    /// Creates a game with a freshly generated layout.
    pub fn new<S: MineSource + ?Sized>(config: GameConfig, source: &mut S) -> Result<Self> {
        Ok(Self::from_layout(MineLayout::generate(config, source)?))
    }

    pub fn from_layout(mine_layout: MineLayout) -> Self {
        let size = mine_layout.size();
        Self {
            mine_layout,
            board: Array2::default(size.to_nd_index()),
            revealed_count: 0,
            flagged_count: 0,
            state: GameState::default(),
            triggered_mine: None,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.state, GameState::Lost)
    }

    pub fn is_win(&self) -> bool {
        matches!(self.state, GameState::Won)
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.mine_layout.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    pub fn flag_count(&self) -> CellCount {
        self.flagged_count
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn mine_layout(&self) -> &MineLayout {
        &self.mine_layout
    }

    pub fn cell_state(&self, coords: Coord2) -> Option<CellState> {
        self.board.get(coords.to_nd_index()).copied()
    }

    pub fn cell(&self, coords: Coord2) -> Option<Cell> {
        let state = self.cell_state(coords)?;
        Some(Cell {
            has_mine: self.mine_layout.contains_mine(coords),
            revealed: state == CellState::Revealed,
            flagged: state == CellState::Flagged,
            adjacent_mines: self.mine_layout.adjacent_mine_count(coords),
        })
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        let (width, height) = self.size();
        (0..height)
            .flat_map(move |y| (0..width).map(move |x| (x, y)))
            .filter_map(move |coords| Some((coords, self.cell(coords)?)))
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        use CellState::*;

        if self.state.is_finished() {
            return MarkOutcome::NoChange;
        }
        let Some(cell) = self.board.get_mut(coords.to_nd_index()) else {
            return MarkOutcome::NoChange;
        };

        match *cell {
            Hidden => {
                *cell = Flagged;
                self.flagged_count += 1;
            }
            Flagged => {
                *cell = Hidden;
                self.flagged_count -= 1;
            }
            Revealed => return MarkOutcome::NoChange,
        }
        MarkOutcome::Changed
    }

    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if self.state.is_finished() || self.cell_state(coords) != Some(CellState::Hidden) {
            return RevealOutcome::NoChange;
        }

        if self.mine_layout.contains_mine(coords) {
            self.board[coords.to_nd_index()] = CellState::Revealed;
            self.triggered_mine = Some(coords);
            self.end_game(false);
            return RevealOutcome::HitMine;
        }

        let opened = self.flood_reveal(coords);
        log::trace!("Revealed {} cells from {:?}", opened, coords);

        if self.revealed_count == self.mine_layout.safe_cell_count() {
            self.end_game(true);
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    /// Opens `start` and keeps opening around every zero cell reached. Returns the number of cells opened.
    fn flood_reveal(&mut self, start: Coord2) -> CellCount {
        let mut opened = 0;
        let mut to_visit = vec![start];

        while let Some(coords) = to_visit.pop() {
            let cell = &mut self.board[coords.to_nd_index()];
            // flags stop the cascade even when misplaced
            if *cell != CellState::Hidden || self.mine_layout.contains_mine(coords) {
                continue;
            }
            *cell = CellState::Revealed;
            opened += 1;

            if self.mine_layout.adjacent_mine_count(coords) == 0 {
                to_visit.extend(
                    self.mine_layout
                        .iter_neighbors(coords)
                        .filter(|&pos| self.board[pos.to_nd_index()] == CellState::Hidden),
                );
            }
        }

        self.revealed_count += opened;
        opened
    }

    fn end_game(&mut self, won: bool) {
        if self.state.is_finished() {
            return;
        }

        self.state = if won { GameState::Won } else { GameState::Lost };
        log::debug!(
            "Game {} with {}/{} safe cells revealed",
            if won { "won" } else { "lost" },
            self.revealed_count,
            self.mine_layout.safe_cell_count()
        );
    }
}
