use crate::search::{
    search_engines::{general_search, iterative_deepening},
    Heuristic, Plan, SearchProblem, SearchStatistics, Strategy,
};

#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult<S, N> {
    /// The search reached a goal
    Success(Plan<S, N>),
    /// The frontier ran empty without reaching a goal
    Unsolvable,
    /// A depth-bounded search ran empty, but successors were cut off at the
    /// bound, so a larger bound might still succeed
    DepthLimitReached,
}

impl<S, N> SearchResult<S, N> {
    pub fn plan(&self) -> Option<&Plan<S, N>> {
        match self {
            SearchResult::Success(plan) => Some(plan),
            SearchResult::Unsolvable | SearchResult::DepthLimitReached => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Largest depth bound iterative deepening tries before giving up.
    pub max_depth: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_depth: usize::MAX,
        }
    }
}

impl Strategy {
    /// Run this strategy on `problem`. The heuristic is only consulted by the
    /// informed strategies.
    pub fn search<P: SearchProblem>(
        &self,
        problem: &P,
        heuristic: &mut dyn Heuristic<P::State>,
        options: &SearchOptions,
    ) -> (SearchResult<P::State, P::Name>, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let result = match self {
            Strategy::IterativeDeepening => {
                iterative_deepening(problem, options.max_depth, &mut statistics)
            }
            _ => general_search(problem, *self, heuristic, None, &mut statistics),
        };
        statistics.finalise_search();
        (result, statistics)
    }
}
