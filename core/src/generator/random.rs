use super::*;

/// Places mines by drawing uniformly random cells and skipping the ones already mined, until the requested count of
/// distinct cells is reached. The config must already be validated.
pub(crate) struct RandomMinefieldGenerator<'a, S: MineSource + ?Sized> {
    source: &'a mut S,
}

impl<'a, S: MineSource + ?Sized> RandomMinefieldGenerator<'a, S> {
    pub(crate) fn new(source: &'a mut S) -> Self {
        Self { source }
    }
}

impl<S: MineSource + ?Sized> MinefieldGenerator for RandomMinefieldGenerator<'_, S> {
    fn generate(self, config: GameConfig) -> MineLayout {
        let source = self.source;
        let (width, _) = config.size;
        let total_cells = config.total_cells();
        let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());

        let mut mines_placed = 0;
        let mut draws: u64 = 0;
        while mines_placed < config.mines {
            let index = source.next_index(total_cells);
            draws += 1;
            let coords = ((index % width as CellCount) as Coord, (index / width as CellCount) as Coord);
            let cell = &mut mine_mask[coords.to_nd_index()];
            if !*cell {
                *cell = true;
                mines_placed += 1;
            }
        }

        log::debug!(
            "Placed {} mines on a {}x{} board after {} draws",
            mines_placed,
            config.size.0,
            config.size.1,
            draws
        );
        MineLayout::from_mine_mask(mine_mask)
    }
}
