//! Food placement
//!
//! Food only ever appears on interior cells (never flush with the wall) and
//! never on the snake. Selection is uniform over the free interior cells and
//! does not allocate: one pass counts the free cells, a second pass walks to
//! the randomly chosen one.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::grid::GridGeometry;
use crate::snake::Snake;
use crate::types::Cell;

/// Why no food could be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpawnError {
    /// Every interior cell is taken by the snake (or reserved).
    #[error("no free interior cell for food")]
    NoFreeCell,
}

#[derive(Debug, Clone)]
pub struct FoodSpawner<R = StdRng> {
    rng: R,
}

impl FoodSpawner<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible placement, for tests and benches.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> FoodSpawner<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Pick a free interior cell.
    ///
    /// `reserved` is an extra cell to avoid, typically the cell the head is about
    /// to move into.
    pub fn spawn(
        &mut self,
        snake: &Snake,
        geometry: &GridGeometry,
        reserved: Option<Cell>,
    ) -> Result<Cell, SpawnError> {
        let is_free = |cell: &Cell| Some(*cell) != reserved && !snake.occupies(*cell);

        let free = geometry.interior_cells().filter(is_free).count();
        if free == 0 {
            return Err(SpawnError::NoFreeCell);
        }

        let pick = self.rng.gen_range(0..free);
        geometry
            .interior_cells()
            .filter(is_free)
            .nth(pick)
            .ok_or(SpawnError::NoFreeCell)
    }
}
