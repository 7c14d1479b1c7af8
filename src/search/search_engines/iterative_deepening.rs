//! Iterative deepening: bounded depth-first runs of the general search with
//! a growing depth bound.

use crate::search::{
    search_engines::{general_search, SearchResult},
    SearchProblem, SearchStatistics, Strategy, ZeroHeuristic,
};
use tracing::debug;

/// Run bounded depth-first searches with bounds `0, 1, ..., max_depth` until
/// one reaches a goal. Stops early with [`SearchResult::Unsolvable`] once a
/// run finishes without cutting anything off at its bound, since every
/// larger bound would then repeat the same run.
pub fn iterative_deepening<P: SearchProblem>(
    problem: &P,
    max_depth: usize,
    statistics: &mut SearchStatistics,
) -> SearchResult<P::State, P::Name> {
    let mut heuristic = ZeroHeuristic::new();
    for depth_limit in 0..=max_depth {
        debug!(depth_limit, "starting depth-limited search");
        match general_search(
            problem,
            Strategy::IterativeDeepening,
            &mut heuristic,
            Some(depth_limit),
            statistics,
        ) {
            SearchResult::DepthLimitReached => continue,
            result => return result,
        }
    }
    SearchResult::DepthLimitReached
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search_engines::general_search::tests::Counter;

    #[test]
    fn finds_shallowest_bound() {
        let problem = Counter { goal: 6, cap: 20 };
        let mut statistics = SearchStatistics::new();
        let result = iterative_deepening(&problem, usize::MAX, &mut statistics);
        let plan = result.plan().unwrap();
        assert_eq!(plan.states(), &[1, 2, 3, 6]);
        // Bounds 0, 1, 2 and 3
        assert_eq!(statistics.iterations(), 4);
    }

    #[test]
    fn matches_depth_first_at_the_final_bound() {
        let problem = Counter { goal: 6, cap: 20 };
        let mut statistics = SearchStatistics::new();
        let deepening = iterative_deepening(&problem, usize::MAX, &mut statistics);
        let bound = statistics.iterations() as usize - 1;
        let bounded = general_search(
            &problem,
            Strategy::DepthFirst,
            &mut ZeroHeuristic::new(),
            Some(bound),
            &mut SearchStatistics::new(),
        );
        assert_eq!(deepening, bounded);
    }

    #[test]
    fn stops_once_nothing_is_cut_off() {
        let problem = Counter { goal: 100, cap: 20 };
        let mut statistics = SearchStatistics::new();
        let result = iterative_deepening(&problem, usize::MAX, &mut statistics);
        assert_eq!(result, SearchResult::Unsolvable);
        assert!(statistics.iterations() < 25);
    }

    #[test]
    fn gives_up_after_max_depth() {
        let problem = Counter { goal: 6, cap: 20 };
        let mut statistics = SearchStatistics::new();
        let result = iterative_deepening(&problem, 2, &mut statistics);
        assert_eq!(result, SearchResult::DepthLimitReached);
        assert_eq!(statistics.iterations(), 3);
    }
}
