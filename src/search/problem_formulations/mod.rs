mod search_problem;

pub use search_problem::{SearchProblem, SearchState};
