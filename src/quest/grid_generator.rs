//! Random map generation. The random source is seeded explicitly so a map
//! can be reproduced from its seed.

use crate::quest::{
    grid::check_dimensions, Cell, Grid, GridError, MAX_DIMENSION, MIN_BLOCKED, MIN_CAPACITY,
    MIN_DIMENSION, MIN_ENEMIES,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug)]
pub struct GridGenerator {
    rng: StdRng,
}

impl GridGenerator {
    pub fn new(seed: u64) -> Self {
        debug!(seed, "seeding grid generator");
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a grid with random dimensions.
    pub fn generate(&mut self) -> Result<Grid, GridError> {
        let rows = self.rng.gen_range(MIN_DIMENSION..=MAX_DIMENSION);
        let cols = self.rng.gen_range(MIN_DIMENSION..=MAX_DIMENSION);
        self.generate_with_dimensions(rows, cols)
    }

    /// Generate a `rows x cols` grid. The agent starts in the bottom-right
    /// corner; blocked cells, enemies and the resource cell are placed on
    /// random free cells, in that order.
    pub fn generate_with_dimensions(
        &mut self,
        rows: usize,
        cols: usize,
    ) -> Result<Grid, GridError> {
        check_dimensions(rows, cols)?;

        let agent = Cell::new(rows - 1, cols - 1);
        let mut occupied = HashSet::from([agent]);

        let num_blocked = self.rng.gen_range(MIN_BLOCKED..=cols);
        let blocked: Vec<Cell> = (0..num_blocked)
            .map(|_| self.place(rows, cols, &mut occupied))
            .collect();

        let num_enemies = self.rng.gen_range(MIN_ENEMIES..cols);
        let enemies: Vec<Cell> = (0..num_enemies)
            .map(|_| self.place(rows, cols, &mut occupied))
            .collect();

        let resource = self.place(rows, cols, &mut occupied);
        let capacity = self.rng.gen_range(MIN_CAPACITY..num_enemies);

        Grid::new(rows, cols, agent, resource, blocked, enemies, capacity)
    }

    /// Pick a random cell not in `occupied` and mark it occupied.
    fn place(&mut self, rows: usize, cols: usize, occupied: &mut HashSet<Cell>) -> Cell {
        loop {
            let cell = Cell::new(self.rng.gen_range(0..rows), self.rng.gen_range(0..cols));
            if occupied.insert(cell) {
                return cell;
            }
        }
    }
}
