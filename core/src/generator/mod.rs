use crate::*;
pub use random::*;

mod random;

/// Uniform integer capability used for mine placement.
///
/// Every `rand` generator is a source.
pub trait MineSource {
    /// Returns a value drawn uniformly from `0..bound`. `bound` is never zero.
    fn next_index(&mut self, bound: CellCount) -> CellCount;
}

impl<R: rand::RngCore> MineSource for R {
    fn next_index(&mut self, bound: CellCount) -> CellCount {
        use rand::Rng;
        self.random_range(0..bound)
    }
}

pub(crate) trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> MineLayout;
}

/// Replays a fixed list of indices, cycling when exhausted.
#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ScriptedMineSource {
    indices: Vec<CellCount>,
    next: usize,
}

#[cfg(test)]
impl ScriptedMineSource {
    pub(crate) fn new(indices: impl IntoIterator<Item = CellCount>) -> Self {
        let indices: Vec<_> = indices.into_iter().collect();
        assert!(!indices.is_empty(), "scripted source needs at least one index");
        Self { indices, next: 0 }
    }
}

#[cfg(test)]
impl MineSource for ScriptedMineSource {
    fn next_index(&mut self, bound: CellCount) -> CellCount {
        let value = self.indices[self.next % self.indices.len()];
        self.next += 1;
        value % bound
    }
}
