use crate::quest::{Cell, Grid};

pub const NO_CELLS: [Cell; 0] = [];

/// 4x4, agent in the bottom-right corner with a single enemy to its left and
/// the resource in the opposite corner.
pub fn single_enemy_grid() -> Grid {
    Grid::new(
        4,
        4,
        Cell::new(3, 3),
        Cell::new(0, 0),
        NO_CELLS,
        [Cell::new(3, 2)],
        1,
    )
    .unwrap()
}

/// 4x4, the resource is one step up from the agent and next to the only
/// enemy.
pub fn adjacent_resource_grid() -> Grid {
    Grid::new(
        4,
        4,
        Cell::new(3, 3),
        Cell::new(2, 3),
        NO_CELLS,
        [Cell::new(2, 2)],
        1,
    )
    .unwrap()
}

/// 4x4, the only enemy sits in the top-right corner with both of its
/// neighbours blocked.
pub fn boxed_in_grid() -> Grid {
    Grid::new(
        4,
        4,
        Cell::new(3, 3),
        Cell::new(3, 0),
        [Cell::new(0, 2), Cell::new(1, 3)],
        [Cell::new(0, 3)],
        1,
    )
    .unwrap()
}

/// 5x5 with three enemies on the border. The free cells stay connected
/// whichever enemies remain, and every enemy keeps a free neighbour.
pub fn three_enemy_grid() -> Grid {
    Grid::new(
        5,
        5,
        Cell::new(4, 4),
        Cell::new(0, 0),
        [Cell::new(1, 3), Cell::new(2, 2), Cell::new(4, 1)],
        [Cell::new(2, 0), Cell::new(3, 4), Cell::new(0, 4)],
        2,
    )
    .unwrap()
}

/// 6x6 with four enemies stacked along the right edge and one in the
/// bottom-left corner.
pub fn heuristic_grid() -> Grid {
    Grid::new(
        6,
        6,
        Cell::new(5, 5),
        Cell::new(0, 0),
        [Cell::new(2, 2), Cell::new(3, 3), Cell::new(4, 4)],
        [
            Cell::new(0, 5),
            Cell::new(1, 5),
            Cell::new(2, 5),
            Cell::new(3, 5),
            Cell::new(5, 0),
        ],
        3,
    )
    .unwrap()
}
