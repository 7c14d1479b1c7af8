mod heuristic;
mod zero_heuristic;

pub use heuristic::{Heuristic, HeuristicKind, HeuristicValue};
pub use zero_heuristic::ZeroHeuristic;
