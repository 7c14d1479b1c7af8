use crate::quest::{OperatorName, QuestState};
use crate::search::{Plan, SearchStatistics, Strategy};
use itertools::Itertools;

/// A solved quest: the plan found by a strategy together with what the
/// search reports about it.
#[derive(Debug, Clone)]
pub struct Solution {
    plan: Plan<QuestState, OperatorName>,
    strategy: Strategy,
    statistics: SearchStatistics,
}

impl Solution {
    pub(crate) fn new(
        plan: Plan<QuestState, OperatorName>,
        strategy: Strategy,
        statistics: SearchStatistics,
    ) -> Self {
        Self {
            plan,
            strategy,
            statistics,
        }
    }

    pub fn plan(&self) -> &Plan<QuestState, OperatorName> {
        &self.plan
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn operators(&self) -> Vec<OperatorName> {
        self.plan.operators().iter().map(|op| *op.name()).collect()
    }

    /// The operator names joined with ` -> `.
    pub fn sequence(&self) -> String {
        self.plan
            .operators()
            .iter()
            .map(|op| op.name())
            .join(" -> ")
    }

    /// Path cost of the plan. Strategies that ignore costs report zero.
    pub fn cost(&self) -> f64 {
        if self.strategy.is_cost_aware() {
            self.plan.cost()
        } else {
            0.
        }
    }

    /// Number of nodes on the path below the root, which is how the number of
    /// expanded nodes is reported.
    pub fn expanded_nodes(&self) -> usize {
        self.plan.len()
    }

    pub fn states(&self) -> &[QuestState] {
        self.plan.states()
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quest::{solve, QuestCosts};
    use crate::search::SearchOptions;
    use crate::test_utils::*;

    #[test]
    fn cost_blind_strategies_report_zero_cost() {
        let grid = adjacent_resource_grid();
        let options = SearchOptions::default();
        for strategy in [
            Strategy::BreadthFirst,
            Strategy::DepthFirst,
            Strategy::IterativeDeepening,
        ] {
            let solution = solve(&grid, QuestCosts::default(), strategy, &options).unwrap();
            assert_eq!(solution.cost(), 0.);
            assert_eq!(solution.plan().cost(), 14.);
        }
    }

    #[test]
    fn states_follow_operators() {
        let grid = adjacent_resource_grid();
        let solution = solve(
            &grid,
            QuestCosts::default(),
            Strategy::AStar1,
            &SearchOptions::default(),
        )
        .unwrap();
        assert_eq!(
            solution.operators(),
            vec![OperatorName::Up, OperatorName::Pickup, OperatorName::Kill]
        );
        assert_eq!(solution.states().len(), 4);
        assert_eq!(solution.states()[0].agent(), grid.agent());
        assert_eq!(solution.states()[2].consumables(), 1);
        assert_eq!(solution.cost(), 14.);
    }
}
