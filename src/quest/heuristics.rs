//! The two quest heuristics. Neither is admissible; both estimate how much
//! work is left from the number of enemies still standing, grouped in
//! batches of four.

use crate::quest::{Grid, QuestCosts, QuestState};
use crate::search::{Heuristic, HeuristicKind, HeuristicValue};

const KILLS_PER_BATCH: usize = 4;

pub fn create_heuristic<'a>(
    kind: HeuristicKind,
    grid: &'a Grid,
    costs: QuestCosts,
) -> Box<dyn Heuristic<QuestState> + 'a> {
    match kind {
        HeuristicKind::One => Box::new(BatchKillHeuristic::new(grid, costs)),
        HeuristicKind::Two => Box::new(NearestEnemyHeuristic::new(grid, costs)),
    }
}

/// Batches of enemies left times the consumables carried.
fn kill_estimate(state: &QuestState) -> f64 {
    (state.enemies().len() / KILLS_PER_BATCH * state.consumables()) as f64
}

/// Estimate for an agent without consumables: walk to the resource and pick
/// up. The kill estimate is taken with the current count, so it adds nothing
/// here.
fn replenish_estimate(grid: &Grid, costs: &QuestCosts, state: &QuestState) -> f64 {
    let distance = state.agent().manhattan_distance(&grid.resource());
    distance as f64 * costs.move_cost + costs.pickup_cost + kill_estimate(state)
}

/// With consumables in hand, the number of batches left times the
/// consumables carried.
#[derive(Debug)]
pub struct BatchKillHeuristic<'a> {
    grid: &'a Grid,
    costs: QuestCosts,
}

impl<'a> BatchKillHeuristic<'a> {
    pub fn new(grid: &'a Grid, costs: QuestCosts) -> Self {
        Self { grid, costs }
    }
}

impl Heuristic<QuestState> for BatchKillHeuristic<'_> {
    fn evaluate(&mut self, state: &QuestState) -> HeuristicValue {
        let remaining = state.enemies().len();
        if remaining == 0 {
            return 0.0.into();
        }
        if state.consumables() == 0 {
            return replenish_estimate(self.grid, &self.costs, state).into();
        }
        kill_estimate(state).into()
    }
}

/// With consumables in hand, scales the batch estimate by the cost of
/// walking to the nearest remaining enemy.
#[derive(Debug)]
pub struct NearestEnemyHeuristic<'a> {
    grid: &'a Grid,
    costs: QuestCosts,
}

impl<'a> NearestEnemyHeuristic<'a> {
    pub fn new(grid: &'a Grid, costs: QuestCosts) -> Self {
        Self { grid, costs }
    }
}

impl Heuristic<QuestState> for NearestEnemyHeuristic<'_> {
    fn evaluate(&mut self, state: &QuestState) -> HeuristicValue {
        let agent = state.agent();
        let Some(nearest) = state
            .enemies()
            .iter()
            .map(|enemy| agent.manhattan_distance(enemy))
            .min()
        else {
            return 0.0.into();
        };
        if state.consumables() == 0 {
            return replenish_estimate(self.grid, &self.costs, state).into();
        }
        let batches = state.enemies().len() / KILLS_PER_BATCH;
        (nearest as f64 * self.costs.move_cost * (batches * state.consumables()) as f64).into()
    }
}
