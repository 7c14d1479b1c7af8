//! A generic state-space search engine. Problems implement
//! [`SearchProblem`]; a [`Strategy`] picks the frontier discipline for the
//! one general search routine in [`search_engines`].

mod frontier;
pub mod heuristics;
mod operator;
mod plan;
pub mod problem_formulations;
pub mod search_engines;
mod search_node;
mod search_space;
mod search_statistics;
mod strategy;
mod verbosity;

pub use frontier::Frontier;
pub use heuristics::{Heuristic, HeuristicKind, HeuristicValue, ZeroHeuristic};
pub use operator::Operator;
pub use plan::Plan;
pub use problem_formulations::{SearchProblem, SearchState};
pub use search_engines::{SearchOptions, SearchResult};
pub use search_node::{NodeId, SearchNode, NO_NODE};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use strategy::{Discipline, Strategy};
pub use verbosity::Verbosity;
