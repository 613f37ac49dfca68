use core::fmt;
use minesweep_core::{Coord, PlayEngine};

/// Text rendering of the board: column indices on top, row indices on the left.
pub struct BoardView<'a> {
    engine: &'a PlayEngine,
    reveal_all: bool,
}

impl<'a> BoardView<'a> {
    pub fn new(engine: &'a PlayEngine, reveal_all: bool) -> Self {
        Self { engine, reveal_all }
    }
}

/// Cell field width: one separating space plus the widest index.
fn field_width(width: Coord, height: Coord) -> usize {
    let widest = width.max(height).saturating_sub(1);
    widest.to_string().len().max(1) + 1
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.engine.size();
        let w = field_width(width, height);

        write!(f, "{:w$} ", "")?;
        for x in 0..width {
            write!(f, "{x:>w$}")?;
        }
        writeln!(f)?;

        for y in 0..height {
            write!(f, "{y:>w$} ")?;
            for x in 0..width {
                let tile = match self.engine.cell((x, y)) {
                    Some(cell) => cell.tile(self.reveal_all),
                    None => return Err(fmt::Error),
                };
                write!(f, "{tile:>w$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minesweep_core::MineLayout;

    fn engine(size: (Coord, Coord), mines: &[(Coord, Coord)]) -> PlayEngine {
        PlayEngine::from_layout(MineLayout::from_mine_coords(size, mines).unwrap())
    }

    #[test]
    fn hidden_board() {
        let engine = engine((3, 2), &[(2, 1)]);

        let text = BoardView::new(&engine, false).to_string();

        assert_eq!(text, "    0 1 2\n 0  . . .\n 1  . . .\n");
    }

    #[test]
    fn revealed_flagged_and_reveal_all() {
        let mut engine = engine((3, 2), &[(2, 1)]);
        engine.reveal((0, 0));
        engine.toggle_flag((2, 1));

        assert_eq!(
            BoardView::new(&engine, false).to_string(),
            "    0 1 2\n 0  0 1 .\n 1  0 1 F\n"
        );
        assert_eq!(
            BoardView::new(&engine, true).to_string(),
            "    0 1 2\n 0  0 1 1\n 1  0 1 *\n"
        );
    }

    #[test]
    fn wide_boards_keep_columns_apart() {
        assert_eq!(field_width(8, 8), 2);
        assert_eq!(field_width(16, 16), 3);
        assert_eq!(field_width(11, 3), 3);
        assert_eq!(field_width(1, 1), 2);

        let engine = engine((11, 1), &[]);
        let text = BoardView::new(&engine, false).to_string();
        let header = text.lines().next().unwrap();
        assert!(header.ends_with("  9 10"));
    }
}
