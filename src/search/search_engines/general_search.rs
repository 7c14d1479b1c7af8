//! The general search algorithm shared by every strategy. The strategy only
//! decides where successors go in the frontier and which value orders it.

use crate::search::{
    search_engines::SearchResult, Frontier, Heuristic, HeuristicValue, SearchProblem,
    SearchSpace, SearchState, SearchStatistics, Strategy,
};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Run the general search once.
///
/// The goal test happens when a node is removed from the frontier, not when
/// it is generated. A successor whose state is the same (by
/// [`SearchState::duplicate_key`]) as any successor inserted earlier in this
/// run is discarded. The initial state itself is not recorded as visited.
///
/// With a `depth_limit`, successors deeper than the limit are not generated.
pub fn general_search<P: SearchProblem>(
    problem: &P,
    strategy: Strategy,
    heuristic: &mut dyn Heuristic<P::State>,
    depth_limit: Option<usize>,
    statistics: &mut SearchStatistics,
) -> SearchResult<P::State, P::Name> {
    statistics.increment_iterations();
    let evaluate_heuristic = strategy.heuristic_kind().is_some();

    let mut search_space = SearchSpace::new(problem.initial_state());
    let mut frontier = Frontier::new(strategy.discipline());
    let mut visited: HashSet<<P::State as SearchState>::Key> = HashSet::new();
    let mut cut_off = false;

    let root_node = search_space.get_root_node_mut();
    if evaluate_heuristic {
        statistics.increment_evaluated_nodes();
        let h_value = heuristic.evaluate(root_node.get_state());
        root_node.open_with_f(strategy.evaluate(root_node.get_g(), h_value));
    }
    frontier.push(root_node.get_node_id(), root_node.get_f());

    while let Some(node_id) = frontier.pop() {
        let node = search_space.get_node(node_id);
        if problem.is_goal(node.get_state()) {
            debug!(
                depth = node.get_depth(),
                path_cost = node.get_g().into_inner(),
                "goal reached"
            );
            return SearchResult::Success(search_space.extract_plan(node_id));
        }

        statistics.increment_expanded_nodes();
        let successors = problem.expand(node.get_state());
        statistics.increment_generated_nodes(successors.len());
        if depth_limit.is_some_and(|limit| node.get_depth() >= limit) {
            // Successors that would have been pruned anyway do not count, so
            // a run without cut-offs behaves exactly like an unbounded one.
            let unseen = successors
                .iter()
                .filter(|(_, state)| !visited.contains(&state.duplicate_key()))
                .count();
            if unseen > 0 {
                cut_off = true;
                statistics.increment_cut_off_nodes(unseen);
            }
            continue;
        }

        let mut operators = vec![];
        let mut states_to_evaluate = vec![];
        for (operator, state) in successors {
            if !visited.insert(state.duplicate_key()) {
                statistics.increment_pruned_nodes();
                continue;
            }
            operators.push(operator);
            states_to_evaluate.push(state);
        }

        let h_values = if evaluate_heuristic {
            heuristic.evaluate_batch(&states_to_evaluate)
        } else {
            vec![HeuristicValue::from(0.); states_to_evaluate.len()]
        };

        for ((operator, state), h_value) in operators
            .into_iter()
            .zip(states_to_evaluate)
            .zip(h_values)
        {
            let child_node = search_space.insert_node(state, operator, node_id);
            if evaluate_heuristic {
                statistics.increment_evaluated_nodes();
            }
            child_node.open_with_f(strategy.evaluate(child_node.get_g(), h_value));
            trace!(
                node = child_node.get_node_id().id(),
                depth = child_node.get_depth(),
                g = child_node.get_g().into_inner(),
                f = child_node.get_f().into_inner(),
            );
            frontier.push(child_node.get_node_id(), child_node.get_f());
        }
        statistics.register_frontier_size(frontier.len());
    }

    if cut_off {
        SearchResult::DepthLimitReached
    } else {
        SearchResult::Unsolvable
    }
}
