use crate::search::{HeuristicKind, HeuristicValue};
use clap;

/// How a strategy orders the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    /// Successors go to the back of the frontier
    Fifo,
    /// Successors go to the front of the frontier
    Lifo,
    /// The frontier is kept sorted ascending by the node's f-value, ties
    /// broken by insertion order
    Ordered,
}

/// The search strategies. Each one is a discipline for the same general
/// search routine, plus the evaluation used for ordered frontiers.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[clap(rename_all = "kebab-case")]
pub enum Strategy {
    #[clap(name = "bf", help = "Breadth-first search.")]
    BreadthFirst,
    #[clap(name = "df", help = "Depth-first search.")]
    DepthFirst,
    #[clap(name = "uc", help = "Uniform-cost search, ordered by path cost.")]
    UniformCost,
    #[clap(
        name = "id",
        help = "Iterative deepening, depth-first search with a growing depth bound."
    )]
    IterativeDeepening,
    #[clap(name = "gr1", help = "Greedy search with the first heuristic.")]
    Greedy1,
    #[clap(name = "gr2", help = "Greedy search with the second heuristic.")]
    Greedy2,
    #[clap(name = "as1", help = "A* search with the first heuristic.")]
    AStar1,
    #[clap(name = "as2", help = "A* search with the second heuristic.")]
    AStar2,
}

impl Strategy {
    pub fn discipline(&self) -> Discipline {
        match self {
            Strategy::BreadthFirst => Discipline::Fifo,
            Strategy::DepthFirst | Strategy::IterativeDeepening => Discipline::Lifo,
            Strategy::UniformCost
            | Strategy::Greedy1
            | Strategy::Greedy2
            | Strategy::AStar1
            | Strategy::AStar2 => Discipline::Ordered,
        }
    }

    /// The heuristic the strategy evaluates nodes with, if any.
    pub fn heuristic_kind(&self) -> Option<HeuristicKind> {
        match self {
            Strategy::Greedy1 | Strategy::AStar1 => Some(HeuristicKind::One),
            Strategy::Greedy2 | Strategy::AStar2 => Some(HeuristicKind::Two),
            Strategy::BreadthFirst
            | Strategy::DepthFirst
            | Strategy::UniformCost
            | Strategy::IterativeDeepening => None,
        }
    }

    /// Whether the strategy takes path costs into account. The reported
    /// solution cost of the other strategies is zero.
    pub fn is_cost_aware(&self) -> bool {
        !matches!(
            self,
            Strategy::BreadthFirst | Strategy::DepthFirst | Strategy::IterativeDeepening
        )
    }

    /// The f-value of a node with path cost `g` and heuristic value `h`.
    pub fn evaluate(&self, g: HeuristicValue, h: HeuristicValue) -> HeuristicValue {
        match self {
            Strategy::Greedy1 | Strategy::Greedy2 => h,
            Strategy::AStar1 | Strategy::AStar2 => g + h,
            Strategy::BreadthFirst
            | Strategy::DepthFirst
            | Strategy::UniformCost
            | Strategy::IterativeDeepening => g,
        }
    }
}
