//! The quest domain: an agent on a grid clears every enemy, refilling its
//! consumables at a resource cell to pay for each kill.

mod cell;
mod grid;
mod grid_config;
mod grid_generator;
pub mod heuristics;
mod operator_name;
mod quest_problem;
mod quest_state;
mod render;
mod solution;
mod validate;

pub use cell::Cell;
pub use grid::{
    Grid, GridError, MAX_DIMENSION, MIN_BLOCKED, MIN_CAPACITY, MIN_DIMENSION, MIN_ENEMIES,
};
pub use grid_config::{ConfigError, GridConfig};
pub use grid_generator::GridGenerator;
pub use operator_name::OperatorName;
pub use quest_problem::{solve, QuestCosts, QuestProblem};
pub use quest_state::{DuplicateKey, QuestState};
pub use render::{render, render_solution};
pub use solution::Solution;
pub use validate::{validate, ValidationError};
