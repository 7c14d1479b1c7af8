use crate::quest::{heuristics::create_heuristic, Grid, OperatorName, QuestState, Solution};
use crate::search::{
    Heuristic, Operator, SearchOptions, SearchProblem, SearchResult, Strategy, ZeroHeuristic,
};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::info;

/// Operator costs of the quest domain. A kill is discounted by one per enemy
/// it removes.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct QuestCosts {
    #[serde(rename = "move", default = "default_move_cost")]
    pub move_cost: f64,
    #[serde(rename = "pickup", default = "default_pickup_cost")]
    pub pickup_cost: f64,
    #[serde(rename = "kill", default = "default_kill_cost")]
    pub kill_cost: f64,
}

fn default_move_cost() -> f64 {
    5.
}

fn default_pickup_cost() -> f64 {
    6.
}

fn default_kill_cost() -> f64 {
    4.
}

impl Default for QuestCosts {
    fn default() -> Self {
        Self {
            move_cost: default_move_cost(),
            pickup_cost: default_pickup_cost(),
            kill_cost: default_kill_cost(),
        }
    }
}

/// The quest as a search problem: clear every enemy from the grid, picking up
/// consumables at the resource cell to pay for the kills.
#[derive(Debug, Clone)]
pub struct QuestProblem<'a> {
    grid: &'a Grid,
    costs: QuestCosts,
}

impl<'a> QuestProblem<'a> {
    pub fn new(grid: &'a Grid, costs: QuestCosts) -> Self {
        Self { grid, costs }
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    pub fn costs(&self) -> &QuestCosts {
        &self.costs
    }

    /// Apply `name` to `state`, if it is legal there.
    pub fn successor(
        &self,
        state: &QuestState,
        name: OperatorName,
    ) -> Option<(Operator<OperatorName>, QuestState)> {
        match name {
            OperatorName::Up | OperatorName::Down | OperatorName::Left | OperatorName::Right => {
                let target = self.grid.neighbour(state.agent(), name)?;
                if self.grid.is_blocked(&target) || state.has_enemy_at(&target) {
                    return None;
                }
                Some((
                    Operator::new(name, self.costs.move_cost),
                    state.with_agent(target),
                ))
            }
            OperatorName::Pickup => (state.agent() == self.grid.resource()).then(|| {
                (
                    Operator::new(name, self.costs.pickup_cost),
                    state.with_consumables(self.grid.capacity()),
                )
            }),
            OperatorName::Kill => {
                if state.consumables() == 0 || state.enemies().is_empty() {
                    return None;
                }
                let (next, killed) = state.kill_adjacent();
                if killed == 0 {
                    return None;
                }
                let cost = self.costs.kill_cost - killed as f64;
                Some((Operator::new(name, cost), next))
            }
        }
    }

    /// Search for a solution with `strategy`. Informed strategies get the
    /// heuristic they are paired with, the others never evaluate one.
    pub fn solve(&self, strategy: Strategy, options: &SearchOptions) -> Option<Solution> {
        let mut heuristic: Box<dyn Heuristic<QuestState> + 'a> = match strategy.heuristic_kind() {
            Some(kind) => create_heuristic(kind, self.grid, self.costs),
            None => Box::new(ZeroHeuristic::new()),
        };

        let (result, statistics) = strategy.search(self, heuristic.as_mut(), options);
        match result {
            SearchResult::Success(plan) => Some(Solution::new(plan, strategy, statistics)),
            SearchResult::Unsolvable | SearchResult::DepthLimitReached => {
                info!(?strategy, "no solution found");
                None
            }
        }
    }
}

impl SearchProblem for QuestProblem<'_> {
    type State = QuestState;
    type Name = OperatorName;

    fn initial_state(&self) -> QuestState {
        QuestState::new(self.grid.enemies().clone(), self.grid.agent(), 0)
    }

    fn is_goal(&self, state: &QuestState) -> bool {
        state.enemies().is_empty()
    }

    fn expand(&self, state: &QuestState) -> Vec<(Operator<OperatorName>, QuestState)> {
        OperatorName::iter()
            .filter_map(|name| self.successor(state, name))
            .collect()
    }
}

/// Solve the quest on `grid` with the given costs and strategy.
pub fn solve(
    grid: &Grid,
    costs: QuestCosts,
    strategy: Strategy,
    options: &SearchOptions,
) -> Option<Solution> {
    QuestProblem::new(grid, costs).solve(strategy, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quest::{validate, Cell};
    use crate::search::{search_engines::general_search, SearchStatistics};
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;
    use std::collections::BTreeSet;

    const ALL_STRATEGIES: [Strategy; 8] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::UniformCost,
        Strategy::IterativeDeepening,
        Strategy::Greedy1,
        Strategy::Greedy2,
        Strategy::AStar1,
        Strategy::AStar2,
    ];

    fn names(successors: &[(Operator<OperatorName>, QuestState)]) -> Vec<OperatorName> {
        successors.iter().map(|(op, _)| *op.name()).collect()
    }

    fn solve_default(grid: &Grid, strategy: Strategy) -> Option<Solution> {
        solve(grid, QuestCosts::default(), strategy, &SearchOptions::default())
    }

    #[test]
    fn initial_state_has_no_consumables() {
        let grid = single_enemy_grid();
        let problem = QuestProblem::new(&grid, QuestCosts::default());
        let state = problem.initial_state();
        assert_eq!(state.agent(), Cell::new(3, 3));
        assert_eq!(state.consumables(), 0);
        assert_eq!(state.enemies(), grid.enemies());
        assert!(!problem.is_goal(&state));
    }

    #[test]
    fn enemies_and_edges_block_moves() {
        let grid = single_enemy_grid();
        let problem = QuestProblem::new(&grid, QuestCosts::default());
        let successors = problem.expand(&problem.initial_state());
        // Down and right leave the map, left walks into the enemy, and kill
        // needs a consumable.
        assert_eq!(names(&successors), vec![OperatorName::Up]);
        assert_eq!(successors[0].0.cost(), 5.);
        assert_eq!(successors[0].1.agent(), Cell::new(2, 3));
    }

    #[test]
    fn blocked_cells_block_moves() {
        let grid = boxed_in_grid();
        let problem = QuestProblem::new(&grid, QuestCosts::default());
        let state = problem.initial_state().with_agent(Cell::new(1, 2));
        let successors = problem.expand(&state);
        assert_eq!(
            names(&successors),
            vec![OperatorName::Down, OperatorName::Left]
        );
    }

    #[test]
    fn pickup_only_on_resource_and_refills() {
        let grid = adjacent_resource_grid();
        let problem = QuestProblem::new(&grid, QuestCosts::default());
        let state = problem.initial_state();
        assert!(problem.successor(&state, OperatorName::Pickup).is_none());

        let on_resource = state.with_agent(grid.resource());
        let (op, refilled) = problem
            .successor(&on_resource, OperatorName::Pickup)
            .unwrap();
        assert_eq!(op.cost(), 6.);
        assert_eq!(refilled.consumables(), grid.capacity());
        // Picking up again while full is still legal.
        assert!(problem
            .successor(&refilled, OperatorName::Pickup)
            .is_some());
    }

    #[test]
    fn kill_needs_consumable_and_adjacent_enemy() {
        let grid = adjacent_resource_grid();
        let problem = QuestProblem::new(&grid, QuestCosts::default());
        let state = problem.initial_state().with_agent(Cell::new(2, 3));
        assert!(problem.successor(&state, OperatorName::Kill).is_none());

        let armed = state.with_consumables(1);
        let (op, next) = problem.successor(&armed, OperatorName::Kill).unwrap();
        assert_eq!(op.cost(), 3.);
        assert!(next.enemies().is_empty());
        assert_eq!(next.consumables(), 0);

        let far = armed.with_agent(Cell::new(0, 0));
        assert!(problem.successor(&far, OperatorName::Kill).is_none());
    }

    #[test]
    fn kill_removes_all_adjacent_enemies_at_a_discount() {
        let grid = Grid::new(
            4,
            4,
            Cell::new(0, 0),
            Cell::new(3, 3),
            NO_CELLS,
            [Cell::new(1, 0), Cell::new(0, 1), Cell::new(2, 2)],
            2,
        )
        .unwrap();
        let problem = QuestProblem::new(&grid, QuestCosts::default());
        let state = problem.initial_state().with_consumables(2);
        let (op, next) = problem.successor(&state, OperatorName::Kill).unwrap();
        assert_eq!(op.cost(), 2.);
        assert_eq!(next.enemies(), &BTreeSet::from([Cell::new(2, 2)]));
        assert_eq!(next.consumables(), 1);
    }

    #[test]
    fn uniform_cost_on_adjacent_resource() {
        let grid = adjacent_resource_grid();
        let solution = solve_default(&grid, Strategy::UniformCost).unwrap();
        assert_eq!(solution.sequence(), "UP -> PICKUP -> KILL");
        assert_approx_eq!(solution.cost(), 14.);
        assert_eq!(solution.expanded_nodes(), 3);
    }

    #[test]
    fn uniform_cost_on_single_enemy() {
        let grid = single_enemy_grid();
        let solution = solve_default(&grid, Strategy::UniformCost).unwrap();
        // Six moves to the resource, a pickup, four moves back next to the
        // enemy and the kill.
        assert_approx_eq!(solution.cost(), 59.);
        assert_eq!(solution.expanded_nodes(), 12);
    }

    #[test]
    fn breadth_first_finds_fewest_steps() {
        let grid = single_enemy_grid();
        let breadth_first = solve_default(&grid, Strategy::BreadthFirst).unwrap();
        assert_eq!(
            breadth_first.sequence(),
            "UP -> UP -> UP -> LEFT -> LEFT -> LEFT -> PICKUP -> DOWN -> DOWN -> DOWN -> RIGHT -> KILL"
        );
        assert_eq!(breadth_first.expanded_nodes(), 12);
        assert_eq!(breadth_first.operators().last(), Some(&OperatorName::Kill));
        assert_eq!(
            breadth_first
                .operators()
                .iter()
                .filter(|&&name| name == OperatorName::Pickup)
                .count(),
            1
        );
        assert_eq!(breadth_first.cost(), 0.);

        for strategy in ALL_STRATEGIES {
            let solution = solve_default(&grid, strategy).unwrap();
            assert!(breadth_first.expanded_nodes() <= solution.expanded_nodes());
        }
    }

    #[test]
    fn every_strategy_solves_and_validates() {
        for grid in [single_enemy_grid(), adjacent_resource_grid()] {
            let problem = QuestProblem::new(&grid, QuestCosts::default());
            for strategy in ALL_STRATEGIES {
                let solution = problem
                    .solve(strategy, &SearchOptions::default())
                    .unwrap_or_else(|| panic!("{strategy:?} found no solution"));
                assert_eq!(validate(&problem, &solution.operators()), Ok(()));
                let last = solution.states().last().unwrap();
                assert!(last.enemies().is_empty());
                assert!(solution
                    .states()
                    .iter()
                    .all(|state| state.consumables() <= grid.capacity()));
            }
        }
    }

    #[test]
    fn solutions_on_a_larger_map_validate() {
        let grid = three_enemy_grid();
        let problem = QuestProblem::new(&grid, QuestCosts::default());
        for strategy in ALL_STRATEGIES {
            let solution = problem
                .solve(strategy, &SearchOptions::default())
                .unwrap_or_else(|| panic!("{strategy:?} found no solution"));
            assert_eq!(validate(&problem, &solution.operators()), Ok(()));
            assert!(solution.statistics().expanded_nodes() > 0);
        }
    }

    #[test]
    fn search_is_deterministic() {
        let grid = three_enemy_grid();
        for strategy in ALL_STRATEGIES {
            let first = solve_default(&grid, strategy).map(|s| s.sequence());
            let second = solve_default(&grid, strategy).map(|s| s.sequence());
            assert_eq!(first, second);
        }
    }

    #[test]
    fn boxed_in_enemy_has_no_solution() {
        let grid = boxed_in_grid();
        for strategy in ALL_STRATEGIES {
            assert!(
                solve_default(&grid, strategy).is_none(),
                "{strategy:?} found a solution"
            );
        }
    }

    #[test]
    fn iterative_deepening_respects_max_depth() {
        let grid = single_enemy_grid();
        let options = SearchOptions { max_depth: 5 };
        assert!(solve(
            &grid,
            QuestCosts::default(),
            Strategy::IterativeDeepening,
            &options
        )
        .is_none());
    }

    #[test]
    fn iterative_deepening_matches_bounded_depth_first() {
        let grid = single_enemy_grid();
        let problem = QuestProblem::new(&grid, QuestCosts::default());
        let solution = problem
            .solve(Strategy::IterativeDeepening, &SearchOptions::default())
            .unwrap();
        assert_eq!(
            solution.sequence(),
            "UP -> LEFT -> LEFT -> LEFT -> UP -> UP -> PICKUP -> RIGHT -> RIGHT -> DOWN -> DOWN -> KILL"
        );
        // Bounds start at 0, so the successful run used one less than the
        // number of runs.
        let bound = solution.statistics().iterations() as usize - 1;
        assert_eq!(bound, 12);

        let depth_first = |depth_limit| {
            general_search(
                &problem,
                Strategy::DepthFirst,
                &mut ZeroHeuristic::new(),
                Some(depth_limit),
                &mut SearchStatistics::new(),
            )
        };
        let names: Vec<OperatorName> = depth_first(bound)
            .plan()
            .unwrap()
            .operators()
            .iter()
            .map(|op| *op.name())
            .collect();
        assert_eq!(names, solution.operators());
        assert!(matches!(
            depth_first(bound - 1),
            SearchResult::DepthLimitReached
        ));
    }
}
