use crate::quest::{Cell, OperatorName};
use std::collections::{BTreeSet, HashSet};
use thiserror::Error;
use tracing::info;

pub const MIN_DIMENSION: usize = 4;
pub const MAX_DIMENSION: usize = 60;
pub const MIN_ENEMIES: usize = 3;
pub const MIN_BLOCKED: usize = 3;
pub const MIN_CAPACITY: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("map dimensions must be between 4 and 60, got {rows} x {cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("cell {cell} lies outside the {rows} x {cols} map")]
    OutOfBounds { cell: Cell, rows: usize, cols: usize },
    #[error("cell {0} is occupied more than once")]
    Overlap(Cell),
    #[error("agent capacity must be at least 1")]
    ZeroCapacity,
}

/// The quest map: an `rows x cols` board with the agent start, a resource
/// cell, blocked cells and enemies, none of them sharing a cell. Immutable
/// once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    agent: Cell,
    resource: Cell,
    blocked: BTreeSet<Cell>,
    enemies: BTreeSet<Cell>,
    capacity: usize,
}

impl Grid {
    /// Build a grid, checking the dimensions, that every cell is on the map,
    /// that no cell is used twice and that the capacity is positive.
    pub fn new(
        rows: usize,
        cols: usize,
        agent: Cell,
        resource: Cell,
        blocked: impl IntoIterator<Item = Cell>,
        enemies: impl IntoIterator<Item = Cell>,
        capacity: usize,
    ) -> Result<Self, GridError> {
        check_dimensions(rows, cols)?;
        if capacity < MIN_CAPACITY {
            return Err(GridError::ZeroCapacity);
        }

        let blocked: Vec<Cell> = blocked.into_iter().collect();
        let enemies: Vec<Cell> = enemies.into_iter().collect();
        let mut occupied = HashSet::new();
        for &cell in [agent, resource].iter().chain(&blocked).chain(&enemies) {
            if cell.row() >= rows || cell.col() >= cols {
                return Err(GridError::OutOfBounds { cell, rows, cols });
            }
            if !occupied.insert(cell) {
                return Err(GridError::Overlap(cell));
            }
        }

        Ok(Self {
            rows,
            cols,
            agent,
            resource,
            blocked: blocked.into_iter().collect(),
            enemies: enemies.into_iter().collect(),
            capacity,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn agent(&self) -> Cell {
        self.agent
    }

    pub fn resource(&self) -> Cell {
        self.resource
    }

    pub fn blocked(&self) -> &BTreeSet<Cell> {
        &self.blocked
    }

    pub fn enemies(&self) -> &BTreeSet<Cell> {
        &self.enemies
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_blocked(&self, cell: &Cell) -> bool {
        self.blocked.contains(cell)
    }

    /// The cell at `(row, col)`, if it is on the map.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| Cell::new(row, col))
    }

    /// The neighbour of `cell` a move operator leads to, if it is on the map.
    /// `None` for the operators that are not moves.
    pub fn neighbour(&self, cell: Cell, direction: OperatorName) -> Option<Cell> {
        let (row, col) = match direction {
            OperatorName::Up => (cell.row().checked_sub(1)?, cell.col()),
            OperatorName::Down => (cell.row() + 1, cell.col()),
            OperatorName::Left => (cell.row(), cell.col().checked_sub(1)?),
            OperatorName::Right => (cell.row(), cell.col() + 1),
            OperatorName::Kill | OperatorName::Pickup => return None,
        };
        self.cell(row, col)
    }

    pub fn log_info(&self) {
        info!(
            rows = self.rows,
            cols = self.cols,
            enemies = self.enemies.len(),
            blocked = self.blocked.len(),
            capacity = self.capacity,
            "grid"
        );
    }
}

pub(crate) fn check_dimensions(rows: usize, cols: usize) -> Result<(), GridError> {
    let valid = MIN_DIMENSION..=MAX_DIMENSION;
    if valid.contains(&rows) && valid.contains(&cols) {
        Ok(())
    } else {
        Err(GridError::InvalidDimensions { rows, cols })
    }
}
