//! Text rendering of the grid, one `[X]` per cell.

use crate::quest::{Grid, QuestState, Solution};
use itertools::Itertools;

const BLOCKED: char = 'O';
const ENEMY: char = 'W';
const RESOURCE: char = 'D';
const AGENT: char = 'A';
const EMPTY: char = 'E';

/// Render `state` on `grid`. A cell shows the first of blocked, enemy,
/// resource and agent that applies, so an agent standing on the resource
/// shows as the resource.
pub fn render(grid: &Grid, state: &QuestState) -> String {
    (0..grid.rows())
        .map(|row| {
            (0..grid.cols())
                .map(|col| {
                    let cell = (row, col).into();
                    let symbol = if grid.is_blocked(&cell) {
                        BLOCKED
                    } else if state.has_enemy_at(&cell) {
                        ENEMY
                    } else if cell == grid.resource() {
                        RESOURCE
                    } else if cell == state.agent() {
                        AGENT
                    } else {
                        EMPTY
                    };
                    format!("[{symbol}]")
                })
                .collect::<String>()
        })
        .join("\n")
}

/// Render every state along the solution, each one headed by the operator
/// that led to it.
pub fn render_solution(grid: &Grid, solution: &Solution) -> String {
    let mut steps = vec![format!("Initial\n{}", render(grid, &solution.states()[0]))];
    steps.extend(
        solution
            .plan()
            .operators()
            .iter()
            .zip(&solution.states()[1..])
            .map(|(op, state)| format!("{}\n{}", op.name(), render(grid, state))),
    );
    steps.join("\n\n")
}
